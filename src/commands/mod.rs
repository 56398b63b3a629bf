//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::{OpenerAnalysis, analyze_opener};
pub use check::{CheckResult, check_guess};
pub use simple::{run_simple, run_simple_with};
