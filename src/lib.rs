extern crate itertools;
#[macro_use] extern crate log;

#[cfg(test)]
extern crate env_logger;

pub mod geo;
pub mod valid;

#[cfg(test)]
mod testing;

pub use valid::{Closure, ParseClosureError};
pub use valid::{find_spike, find_spike_by, has_spikes, has_spikes_by};
