//! Portfolio aggregation module.
//!
//! Pure calculators deriving summary metrics from record snapshots, plus
//! the overview service that assembles the dashboard numbers from them.

pub mod allocation;
pub mod overview;
pub mod performance;
pub mod summary;

pub use allocation::*;
pub use overview::*;
pub use performance::*;
pub use summary::*;
