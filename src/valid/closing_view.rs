use std::iter;
use std::option;
use std::slice;

use super::Closure;

pub type Iter<'a, P> = iter::Chain<slice::Iter<'a, P>, option::IntoIter<&'a P>>;

/// A read-only view of a Ring's Points that always ends where it began.
///
/// A Closed Ring is viewed as-is. An Open Ring is viewed with its first Point
/// appended, without copying anything:
///
/// ```ascii
/// points: [ A, B, C ]      Open   => view: [ A, B, C, A ]
/// points: [ A, B, C, A ]   Closed => view: [ A, B, C, A ]
/// ```
///
/// Positions are indices: `begin()` is 0 and `end()` is one past the last
/// Point. Any position below `points.len()` is also an index into `points`.
#[derive(Debug)]
pub struct ClosingView<'a, P: 'a> {
    points: &'a [P],
    closure: Closure,
}

impl<'a, P> ClosingView<'a, P> {
    pub fn new(points: &'a [P], closure: Closure) -> ClosingView<'a, P> {
        ClosingView {
            points: points,
            closure: closure,
        }
    }

    /// The Point we append, if we append one.
    fn tail(&self) -> Option<&'a P> {
        match self.closure {
            Closure::Open => self.points.first(),
            Closure::Closed => None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len() + if self.tail().is_some() { 1 } else { 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn begin(&self) -> usize {
        0
    }

    pub fn end(&self) -> usize {
        self.len()
    }

    /// Returns the Point at `position`, or `None` at or beyond `end()`.
    pub fn get(&self, position: usize) -> Option<&'a P> {
        if position < self.points.len() {
            Some(&self.points[position])
        } else if position == self.points.len() {
            self.tail()
        } else {
            None
        }
    }

    pub fn front(&self) -> Option<&'a P> {
        self.points.first()
    }

    pub fn back(&self) -> Option<&'a P> {
        self.tail().or_else(|| self.points.last())
    }

    /// Iterates over the view. Use `.rev()` to walk it backwards.
    pub fn iter(&self) -> Iter<'a, P> {
        self.points.iter().chain(self.tail())
    }
}
