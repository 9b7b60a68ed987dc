//! Command implementations

pub mod simulate;
pub mod solve;
pub mod test_cases;

pub use simulate::{RunRecord, SimulationConfig, SimulationSummary, run_simulation};
pub use solve::{SolveConfig, solve_word};
pub use test_cases::{CaseResult, run_test_cases};
