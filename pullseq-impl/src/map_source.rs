use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::hash::Hash;

use tracing::trace;

use crate::producible::Producible;

/// Source over the values of an owned `HashMap`.
///
/// The key set is snapshotted when the source is built, which fixes the pull
/// order for the lifetime of the source. That order is whatever the map
/// enumerates and should not be assumed to match between two sources built
/// from identical maps. Values are moved out of the map as they are pulled.
#[derive(Debug)]
pub struct MapSource<K, V, S = RandomState> {
    keys: Vec<K>,
    data: HashMap<K, V, S>,
    cursor: usize,
}

impl<K, V, S> MapSource<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    pub fn new(data: HashMap<K, V, S>) -> Self {
        let keys = data.keys().cloned().collect::<Vec<_>>();
        trace!(keys = keys.len(), "snapshotted map keys");
        MapSource {
            keys,
            data,
            cursor: 0,
        }
    }

    /// Keys in the order their values will be pulled, including the ones
    /// already pulled.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<K, V, S> Producible for MapSource<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = V;

    fn pull_next(&mut self) -> Option<V> {
        let key = self.keys.get(self.cursor)?;
        self.cursor += 1;
        self.data.remove(key)
    }
}

/// Source over the values of a borrowed `HashMap`, yielding references.
///
/// The map cannot be mutated while the source is alive.
#[derive(Debug)]
pub struct MapRefSource<'a, K, V, S = RandomState> {
    keys: Vec<&'a K>,
    data: &'a HashMap<K, V, S>,
    cursor: usize,
}

impl<'a, K, V, S> MapRefSource<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn new(data: &'a HashMap<K, V, S>) -> Self {
        let keys = data.keys().collect::<Vec<_>>();
        trace!(keys = keys.len(), "snapshotted map keys");
        MapRefSource {
            keys,
            data,
            cursor: 0,
        }
    }

    pub fn keys(&self) -> &[&'a K] {
        &self.keys
    }
}

impl<'a, K, V, S> Producible for MapRefSource<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = &'a V;

    fn pull_next(&mut self) -> Option<&'a V> {
        let key = self.keys.get(self.cursor)?;
        self.cursor += 1;
        self.data.get(*key)
    }
}
