//! Portfolio allocation module for category breakdowns.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::compute_allocations;
pub use allocation_model::AllocationSlice;
