use std::error::Error;

use crate::error::FormError;
use crate::params::{FormSubmission, Params};

/// What [`ParameterLogger`](crate::ParameterLogger) needs from the host
/// framework's per-request context.
///
/// Log methods take `&self`: the logging context is expected to be a shared
/// per-request accumulator.
pub trait RequestContext {
    /// HTTP method of the current request.
    fn method(&self) -> &str;

    /// Decoded body fields. `Ok(None)` when the request carries no form.
    fn form(&self) -> Result<Option<FormSubmission>, FormError>;

    /// Route, query and (for GET) form parameters as resolved by the host.
    fn params(&self) -> Params;

    /// Attach a named string field to the request's log context.
    fn log_field(&self, key: &'static str, value: String);

    /// Emit an error-level entry on the request's log context.
    fn log_error(&self, err: &(dyn Error + 'static));
}
