use env_logger;
use geo::Point;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds a Vec of Points from `(x, y)` pairs.
pub fn points(coords: &[(u32, u32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point(x, y)).collect()
}

/// Returns `points` with its first Point repeated at the end.
pub fn closed(points: &[Point]) -> Vec<Point> {
    let mut ret = points.to_vec();
    if let Some(&first) = points.first() {
        ret.push(first);
    }
    ret
}
