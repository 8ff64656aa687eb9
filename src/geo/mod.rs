use std::fmt;
use itertools::Itertools;

use valid::{self, Closure};

/// A place in space.
///
/// Coordinates are integers, so equality is exact and the spike test below
/// never has to guess about rounding.
#[derive(Clone, Copy, Debug, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Point(pub u32, pub u32);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

/// A path joining two Points, via any number of intermediate Points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge(pub Box<[Point]>);

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Edge({})", self.0.iter().join(","))
    }
}

/// A path joining a Point to itself.
///
/// Nothing stops a Ring from being degenerate: it may repeat Points, double
/// back on itself, or have fewer than three distinct Points. Use
/// `has_spikes()` to find out whether it folds back anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ring {
    /// Efficient for geometry-related algorithms.
    Points(Box<[Point]>),

    /// Efficient for topology-related algorithms. Each Edge starts where the
    /// previous one ended.
    Edges(Box<[Edge]>),
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Ring::Points(ref points) => write!(f, "[{}]", points.iter().join(",")),
            &Ring::Edges(ref edges) => write!(f, "[{}]", edges.iter().join(",")),
        }
    }
}

impl Ring {
    /// Returns all Points in the Ring, in order, copied.
    ///
    /// For an Edges Ring, the Point where one Edge meets the next appears
    /// twice. Spike detection skips such repeats.
    pub fn points(&self) -> Box<[Point]> {
        match self {
            &Ring::Points(ref points) => points.clone(),
            &Ring::Edges(ref edges) => {
                let len = edges.iter().map(|e| e.0.len()).sum();
                let mut ret = Vec::<Point>::with_capacity(len);
                for edge in edges.iter() {
                    ret.extend_from_slice(&*edge.0);
                }
                ret.into_boxed_slice()
            }
        }
    }

    /// `true` iff the Ring's boundary doubles back on itself somewhere.
    pub fn has_spikes(&self, closure: Closure) -> bool {
        self.find_spike(closure).is_some()
    }

    /// Returns the index (into `points()`) of the first spike, if any.
    pub fn find_spike(&self, closure: Closure) -> Option<usize> {
        let ret = match self {
            &Ring::Points(ref points) => valid::find_spike(points, closure),
            &Ring::Edges(_) => valid::find_spike(&self.points(), closure),
        };

        if let Some(index) = ret {
            debug!("Ring {} has a spike at point {}", self, index);
        }

        ret
    }
}

/// Exact equality. Coordinates are integers.
pub fn points_equal(a: &Point, b: &Point) -> bool {
    a == b
}

/// Returns `true` iff following `edge_start -> mid -> edge_end` makes `mid`
/// degenerate: `mid` coincides with either end, or all three Points lie on
/// one line and the path turns all the way around at `mid`.
///
/// ```ascii
/// edge_start   edge_end   mid
///     *-----------*--------*       spike: we come back from mid
///
/// edge_start     mid     edge_end
///     *-----------*--------*       no spike: mid is on the way
/// ```
pub fn point_is_spike_or_equal(edge_start: &Point, edge_end: &Point, mid: &Point) -> bool {
    fn i(u: u32) -> i128 { u as i128 }

    // Vectors from mid to each end. The products can exceed i64.
    let (ax, ay) = (i(edge_start.0) - i(mid.0), i(edge_start.1) - i(mid.1));
    let (bx, by) = (i(edge_end.0) - i(mid.0), i(edge_end.1) - i(mid.1));

    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;

    // Collinear vectors pointing the same way, or at least one zero vector.
    cross == 0 && dot >= 0
}
