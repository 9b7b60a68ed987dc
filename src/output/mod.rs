//! Terminal output formatting
//!
//! Display utilities for CLI results and CSV report writers.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_case_result, print_case_summary, print_simulation_summary, print_solve_result,
};
pub use report::{write_case_results, write_simulation_results};
