//! Orders

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SubmissionError;
pub use models::{OrderData, OrderEnvelope, OrderNumber};
pub use service::*;
