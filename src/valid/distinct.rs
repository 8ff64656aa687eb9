use super::ClosingView;

/// Returns a test for "equals `reference`".
pub fn equal_to<'r, P, E>(reference: &'r P, equals: E) -> impl Fn(&P) -> bool + 'r
    where E: Fn(&P, &P) -> bool + 'r
{
    move |other: &P| equals(reference, other)
}

/// Returns a test for "does not equal `reference`".
pub fn not_equal_to<'r, P, E>(reference: &'r P, equals: E) -> impl Fn(&P) -> bool + 'r
    where E: Fn(&P, &P) -> bool + 'r
{
    move |other: &P| !equals(other, reference)
}

/// Returns the first position at or after `from` whose Point is not equal to
/// `reference`, or `view.end()` if there isn't one.
///
/// This is how we step over repeated Points: scanning from a Point with that
/// Point as `reference` lands on the next Point that is actually somewhere
/// else. Callers resume from the position this returns, so walking a whole
/// Ring this way reads each Point once.
pub fn find_next_distinct<'a, P, E>(view: &ClosingView<'a, P>, from: usize, reference: &P, equals: E) -> usize
    where E: Fn(&P, &P) -> bool
{
    let not_equal = not_equal_to(reference, equals);

    let mut position = from;
    while let Some(point) = view.get(position) {
        if not_equal(point) {
            return position;
        }
        position += 1;
    }

    view.end()
}

/// Returns the last position in `view` whose Point is not equal to
/// `reference`.
pub fn rfind_distinct<'a, P, E>(view: &ClosingView<'a, P>, reference: &P, equals: E) -> Option<usize>
    where E: Fn(&P, &P) -> bool
{
    let not_equal = not_equal_to(reference, equals);
    let end = view.end();

    view.iter().rev().position(|p| not_equal(p)).map(|i| end - 1 - i)
}

#[cfg(test)]
mod test {
    use geo::{Point, points_equal};
    use valid::{ClosingView, Closure};
    use super::{equal_to, find_next_distinct, not_equal_to, rfind_distinct};

    #[test]
    fn adapters() {
        let a = Point(1, 1);
        assert!(equal_to(&a, points_equal)(&Point(1, 1)));
        assert!(!equal_to(&a, points_equal)(&Point(1, 2)));
        assert!(!not_equal_to(&a, points_equal)(&Point(1, 1)));
        assert!(not_equal_to(&a, points_equal)(&Point(1, 2)));
    }

    #[test]
    fn skips_repeats() {
        let points = [ Point(1, 1), Point(1, 1), Point(1, 1), Point(2, 2), Point(3, 3) ];
        let view = ClosingView::new(&points, Closure::Closed);
        assert_eq!(3, find_next_distinct(&view, 0, &Point(1, 1), points_equal));
        assert_eq!(4, find_next_distinct(&view, 3, &Point(2, 2), points_equal));
    }

    #[test]
    fn from_is_inclusive() {
        let points = [ Point(1, 1), Point(2, 2) ];
        let view = ClosingView::new(&points, Closure::Closed);
        assert_eq!(1, find_next_distinct(&view, 1, &Point(1, 1), points_equal));
    }

    #[test]
    fn end_when_nothing_differs() {
        let points = [ Point(1, 1), Point(2, 2), Point(2, 2) ];
        let view = ClosingView::new(&points, Closure::Closed);
        assert_eq!(view.end(), find_next_distinct(&view, 1, &Point(2, 2), points_equal));
        assert_eq!(view.end(), find_next_distinct(&view, 7, &Point(9, 9), points_equal));
    }

    #[test]
    fn finds_the_appended_point() {
        let points = [ Point(1, 1), Point(2, 2), Point(2, 2) ];
        let view = ClosingView::new(&points, Closure::Open);
        assert_eq!(3, find_next_distinct(&view, 1, &Point(2, 2), points_equal));
    }

    #[test]
    fn rfind_skips_closing_repeats() {
        let points = [ Point(1, 1), Point(2, 2), Point(3, 3), Point(1, 1), Point(1, 1) ];
        let view = ClosingView::new(&points, Closure::Closed);
        assert_eq!(Some(2), rfind_distinct(&view, &Point(1, 1), points_equal));

        let points = [ Point(1, 1), Point(2, 2), Point(3, 3), Point(1, 1) ];
        let view = ClosingView::new(&points, Closure::Open);
        assert_eq!(Some(2), rfind_distinct(&view, &Point(1, 1), points_equal));
    }

    #[test]
    fn rfind_none() {
        let points = [ Point(1, 1), Point(1, 1) ];
        let view = ClosingView::new(&points, Closure::Open);
        assert_eq!(None, rfind_distinct(&view, &Point(1, 1), points_equal));
    }
}
