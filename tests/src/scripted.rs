//! A source that replays a fixed script and records how often it was pulled,
//! for checking exactly how much each combinator consumes.

use pullseq::prelude::*;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

struct Scripted {
    script: VecDeque<i32>,
    pulls: Rc<Cell<usize>>,
}

impl Producible for Scripted {
    type Item = i32;

    fn pull_next(&mut self) -> Option<i32> {
        self.pulls.set(self.pulls.get() + 1);
        self.script.pop_front()
    }
}

fn scripted(values: &[i32]) -> (Iter<Scripted>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let source = Scripted {
        script: values.iter().copied().collect(),
        pulls: Rc::clone(&pulls),
    };
    (iterate(source), pulls)
}

#[test]
fn collect_pulls_until_exhausted() {
    let (iter, pulls) = scripted(&[1, 2, 3]);
    assert_eq!(iter.collect(), vec![1, 2, 3]);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn count_pulls_until_exhausted() {
    let (iter, pulls) = scripted(&[1, 2, 3]);
    assert_eq!(iter.count(), 3);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn successive_takes_share_the_source() {
    let (mut iter, pulls) = scripted(&[1, 2, 3, 4]);
    assert_eq!(iter.by_ref().take(2).collect(), vec![1, 2]);
    assert_eq!(pulls.get(), 2);
    assert_eq!(iter.by_ref().take(1).collect(), vec![3]);
    assert_eq!(iter.by_ref().take(2).collect(), vec![4]);
    assert_eq!(pulls.get(), 5);
}

#[test]
fn nth_is_stateful() {
    let (mut iter, pulls) = scripted(&[1, 2, 3, 4]);
    assert_eq!(iter.nth(0), Some(1));
    assert_eq!(iter.nth(0), Some(2));
    assert_eq!(iter.nth(1), Some(4));
    assert_eq!(pulls.get(), 4);
    assert_eq!(iter.nth(0), None);
}

#[test]
fn skip_consumes_from_the_same_source() {
    let (mut iter, pulls) = scripted(&[1, 2, 3, 4]);
    let _ = iter.by_ref().skip(2);
    assert_eq!(pulls.get(), 2);
    assert_eq!(iter.collect(), vec![3, 4]);
}

#[test]
fn for_each_sums() {
    let (iter, _) = scripted(&[1, 2, 3, 4]);
    let mut res = 0;
    iter.for_each(|i| res += i);
    assert_eq!(res, 10);
}

#[test]
fn step_by_and_reverse() {
    let (iter, _) = scripted(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(iter.step_by(2).collect(), vec![1, 3, 5]);

    let (iter, _) = scripted(&[1, 2, 3, 4]);
    assert_eq!(iter.reverse().collect(), vec![4, 3, 2, 1]);
}

#[test]
fn chain_drains_both() {
    let (first, first_pulls) = scripted(&[1, 2]);
    let (second, second_pulls) = scripted(&[3, 4]);
    assert_eq!(first.chain(second).collect(), vec![1, 2, 3, 4]);
    assert_eq!(first_pulls.get(), 3);
    assert_eq!(second_pulls.get(), 3);
}
