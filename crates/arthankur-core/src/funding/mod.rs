pub mod request;
pub mod stats;
