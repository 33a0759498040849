pub mod calculator;
pub mod log;
pub mod punch;
pub mod report;
pub mod status;
