//! paramlog-axum
//!
//! Binds [`paramlog_core::ParameterLogger`] to axum. Add it to a router with
//! `axum::middleware::from_fn_with_state(logger, paramlog_axum::log_parameters)`.

pub mod capture;
pub mod log;
pub mod middleware;

pub use log::RequestLog;
pub use middleware::{AxumContext, log_parameters};
