//! Default snapshot and passed-value resolution
//!
//! Both resolvers go through the same parser: defaults are what an empty
//! argument vector parses to, and "passed" options are those whose parsed
//! value differs from that snapshot.

mod context;
mod defaults;
mod passed;

pub use context::ResolutionContext;
pub use defaults::compute_defaults;
pub use passed::{compute_passed, passed_subset};
