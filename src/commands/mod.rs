//! Command implementations

pub mod check;
pub mod simple;
pub mod solve;
pub mod survey;

pub use check::{CheckReport, check_word};
pub use simple::run_simple;
pub use solve::{SolveResult, solve_root};
pub use survey::{RootYield, SurveyStatistics, print_survey_statistics, run_survey};
