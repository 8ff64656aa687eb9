use std::error;
use std::fmt;
use std::str::FromStr;

/// Whether a Ring's storage repeats its first Point at the end.
///
/// Checks treat the Ring as closed either way; this only says whether they
/// must close it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closure {
    /// `[A, B, C]`: the segment from C back to A is implied.
    Open,

    /// `[A, B, C, A]`: the last Point repeats the first.
    Closed,
}

impl Default for Closure {
    fn default() -> Closure {
        Closure::Closed
    }
}

impl Closure {
    /// Guesses the Closure of `points` from its storage: Closed iff there is a
    /// first Point and the last Point equals it.
    pub fn of<P, E>(points: &[P], equals: E) -> Closure
        where E: Fn(&P, &P) -> bool
    {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if equals(first, last) => Closure::Closed,
            _ => Closure::Open,
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Closure::Open => write!(f, "open"),
            Closure::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClosureError(String);

impl error::Error for ParseClosureError {
    fn description(&self) -> &str {
        "expected \"open\" or \"closed\""
    }
}

impl fmt::Display for ParseClosureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parse error: expected \"open\" or \"closed\"; got \"{}\"", self.0)
    }
}

impl FromStr for Closure {
    type Err = ParseClosureError;

    fn from_str(s: &str) -> Result<Closure, ParseClosureError> {
        if s.eq_ignore_ascii_case("open") {
            Ok(Closure::Open)
        } else if s.eq_ignore_ascii_case("closed") {
            Ok(Closure::Closed)
        } else {
            Err(ParseClosureError(s.to_string()))
        }
    }
}
