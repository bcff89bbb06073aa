pub mod cash_flow;
pub mod credit_scoring;
pub mod format;
pub mod funding;
pub mod loans;
pub mod working_capital;
