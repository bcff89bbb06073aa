pub mod error;
pub mod format;
pub mod time_value;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "cash_flow")]
pub mod cash_flow;

#[cfg(feature = "working_capital")]
pub mod working_capital;

#[cfg(feature = "credit_scoring")]
pub mod credit_scoring;

#[cfg(feature = "funding")]
pub mod funding;

pub use error::ArthankurError;
pub use types::*;

/// Standard result type for all Arthankur calculations
pub type ArthankurResult<T> = Result<T, ArthankurError>;
