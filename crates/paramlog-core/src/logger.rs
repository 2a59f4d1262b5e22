//! The parameter logging middleware.
//!
//! [`ParameterLogger::handle`] wraps the downstream handler. Once the handler
//! has produced its result, or has been abandoned, a [`Finalizer`] guard
//! attaches the redacted `form` and `params` fields to the request's log
//! context. The handler's own result is returned as is.

use std::future::Future;
use std::sync::Arc;

use crate::config::{DEFAULT_MAX_FORM_BYTES, ParamLogConfig};
use crate::context::RequestContext;
use crate::error::ParamLogError;
use crate::exclusion::ExclusionList;
use crate::mask::mask_secrets;
use crate::params::Params;

/// Log field holding the redacted body fields of non-GET requests.
pub const FORM_FIELD: &str = "form";

/// Log field holding the redacted resolved parameters.
pub const PARAMS_FIELD: &str = "params";

#[derive(Debug, Clone)]
pub struct ParameterLogger {
    excluded: Arc<ExclusionList>,
    max_form_bytes: usize,
}

impl Default for ParameterLogger {
    fn default() -> Self {
        Self::new(ExclusionList::default())
    }
}

impl ParameterLogger {
    pub fn new(excluded: ExclusionList) -> Self {
        Self {
            excluded: Arc::new(excluded),
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }

    pub fn from_config(config: &ParamLogConfig) -> Self {
        Self::new(config.exclusions.clone()).with_max_form_bytes(config.max_form_bytes)
    }

    pub fn with_max_form_bytes(mut self, limit: usize) -> Self {
        self.max_form_bytes = limit;
        self
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.excluded
    }

    /// Upper bound on the body size hosts should buffer for form logging.
    pub fn max_form_bytes(&self) -> usize {
        self.max_form_bytes
    }

    /// Run `next` with `ctx`, then log the request's parameters.
    ///
    /// Logging happens on every exit path: normal completion, an `Err`
    /// output, a panic in `next`, or the returned future being dropped
    /// before completion. Logging failures go to [`RequestContext::log_error`].
    pub async fn handle<C, F, Fut>(&self, ctx: C, next: F) -> Fut::Output
    where
        C: RequestContext + Clone,
        F: FnOnce(C) -> Fut,
        Fut: Future,
    {
        let _finalizer = Finalizer {
            logger: self,
            ctx: ctx.clone(),
        };
        next(ctx).await
    }

    fn finalize<C: RequestContext>(&self, ctx: &C) {
        if !ctx.method().eq_ignore_ascii_case("GET") {
            if let Err(e) = self.log_form(ctx) {
                ctx.log_error(&e);
            }
        }

        if let Err(e) = self.log_params(ctx) {
            ctx.log_error(&e);
        }
    }

    /// Attach the redacted body fields under [`FORM_FIELD`].
    pub fn log_form<C: RequestContext>(&self, ctx: &C) -> Result<(), ParamLogError> {
        let Some(form) = ctx.form()? else {
            return Ok(());
        };

        let masked = mask_secrets(&form.fields(), &self.excluded);
        let json = serde_json::to_string(&masked).map_err(|source| {
            ParamLogError::FormSerialization {
                form: format!("{masked:?}"),
                source,
            }
        })?;

        ctx.log_field(FORM_FIELD, json);
        Ok(())
    }

    /// Attach the resolved parameters under [`PARAMS_FIELD`]. Only
    /// [`Params::Values`] are redacted.
    pub fn log_params<C: RequestContext>(&self, ctx: &C) -> Result<(), ParamLogError> {
        let params = match ctx.params() {
            Params::Values(map) => Params::Values(mask_secrets(&map, &self.excluded)),
            other => other,
        };

        let json = serde_json::to_string(&params).map_err(ParamLogError::ParamsSerialization)?;
        ctx.log_field(PARAMS_FIELD, json);
        Ok(())
    }
}

struct Finalizer<'a, C: RequestContext> {
    logger: &'a ParameterLogger,
    ctx: C,
}

impl<C: RequestContext> Drop for Finalizer<'_, C> {
    fn drop(&mut self) {
        self.logger.finalize(&self.ctx);
    }
}
