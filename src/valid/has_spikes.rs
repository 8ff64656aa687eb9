use geo::{self, Point};
use super::{ClosingView, Closure};
use super::distinct::{find_next_distinct, rfind_distinct};

/// Returns `true` iff the Ring `points` doubles back on itself somewhere.
///
/// A spike is a Point where the boundary turns all the way around:
///
/// ```ascii
///   *-----*======*      the boundary runs right, then back left
///   |            spike  along the same line
///   *
/// ```
///
/// Repeated consecutive Points are not spikes: they're skipped. A Ring with
/// fewer than three distinct Points has no spikes.
///
/// # Examples
///
/// ```
/// use topovalid::{has_spikes, Closure};
/// use topovalid::geo::Point;
///
/// let ring = [ Point(0, 0), Point(1, 0), Point(2, 0), Point(1, 0), Point(0, 1) ];
/// assert!(has_spikes(&ring, Closure::Open));
///
/// let square = [ Point(0, 0), Point(0, 1), Point(1, 1), Point(1, 0), Point(0, 0) ];
/// assert!(!has_spikes(&square, Closure::Closed));
/// ```
pub fn has_spikes(points: &[Point], closure: Closure) -> bool {
    find_spike(points, closure).is_some()
}

/// Returns the index in `points` of the first spike, if there is one.
pub fn find_spike(points: &[Point], closure: Closure) -> Option<usize> {
    find_spike_by(points, closure, geo::points_equal, geo::point_is_spike_or_equal)
}

/// `has_spikes()` for any kind of Point.
///
/// `equals(a, b)` says whether two Points coincide.
/// `is_spike_or_equal(start, end, mid)` says whether `mid` is degenerate on
/// the path `start -> mid -> end`.
pub fn has_spikes_by<P, E, S>(points: &[P], closure: Closure, equals: E, is_spike_or_equal: S) -> bool
    where E: Fn(&P, &P) -> bool,
          S: Fn(&P, &P, &P) -> bool
{
    find_spike_by(points, closure, equals, is_spike_or_equal).is_some()
}

/// `find_spike()` for any kind of Point.
///
/// We slide a window of three distinct Points -- `prev`, `cur` and `next` --
/// along the Ring (closed if need be) and test `cur` each time. That tests
/// every Point but the first, so we finish by testing the first Point against
/// its neighbours across the seam.
///
/// A spike at the seam is reported at index 0.
pub fn find_spike_by<P, E, S>(points: &[P], closure: Closure, equals: E, is_spike_or_equal: S) -> Option<usize>
    where E: Fn(&P, &P) -> bool,
          S: Fn(&P, &P, &P) -> bool
{
    let view = ClosingView::new(points, closure);
    let end = view.end();

    let mut prev = view.begin();
    let first = view.get(prev)?;

    let mut cur = find_next_distinct(&view, prev, first, &equals);
    if cur == end {
        trace!("Ring of {} points has only one distinct point", points.len());
        return None;
    }

    let second = view.get(cur)?;
    let mut next = find_next_distinct(&view, cur, second, &equals);
    if next == end {
        trace!("Ring of {} points has only two distinct points", points.len());
        return None;
    }

    // With two distinct Points, every window is A-B-A: a "spike" on a Ring
    // that has no area to begin with. Everything before `next` is `first` or
    // `second`, so start looking there.
    if !view.iter().skip(next).any(|p| !equals(p, first) && !equals(p, second)) {
        trace!("Ring of {} points has only two distinct points", points.len());
        return None;
    }

    while next != end {
        let next_point = view.get(next)?;

        if is_spike_or_equal(view.get(prev)?, next_point, view.get(cur)?) {
            debug!("Spike at point {} of {}", cur, points.len());
            return Some(cur);
        }

        prev = cur;
        cur = next;
        next = find_next_distinct(&view, cur, next_point, &equals);
    }

    seam_spike(&view, &equals, &is_spike_or_equal)
}

/// Tests the first Point of `view` against the last distinct Point before the
/// end and the first distinct Point after the start.
///
/// Returns `None` when the view doesn't end where it began.
fn seam_spike<'a, P, E, S>(view: &ClosingView<'a, P>, equals: &E, is_spike_or_equal: &S) -> Option<usize>
    where E: Fn(&P, &P) -> bool,
          S: Fn(&P, &P, &P) -> bool
{
    let front = view.front()?;
    let back = view.back()?;
    if !equals(front, back) {
        return None;
    }

    let cur = view.begin();
    let prev = rfind_distinct(view, back, equals)?;
    let next = find_next_distinct(view, cur, front, equals);

    if is_spike_or_equal(view.get(prev)?, view.get(next)?, front) {
        debug!("Spike at the seam, between points {} and {}", prev, next);
        Some(cur)
    } else {
        None
    }
}
