//! Checks that help decide whether a Ring is valid.
//!
//! Everything here reads Points and never changes them. The checks that take
//! a `_by` suffix work on any Point type: pass them the equality test and the
//! spike test. The others use `geo::Point` and its exact integer predicates.
mod closure;
mod closing_view;
mod distinct;
mod has_spikes;

pub use self::closure::{Closure, ParseClosureError};
pub use self::closing_view::ClosingView;
pub use self::distinct::{equal_to, find_next_distinct, not_equal_to, rfind_distinct};
pub use self::has_spikes::{find_spike, find_spike_by, has_spikes, has_spikes_by};
