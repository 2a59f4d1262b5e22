use std::error::Error;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use tracing::field::Empty;
use uuid::Uuid;

use paramlog_core::{FormError, FormSubmission, ParameterLogger, Params, RequestContext};

use crate::capture::{CapturedRequest, capture};
use crate::log::RequestLog;

/// [`RequestContext`] over an axum request.
#[derive(Clone)]
pub struct AxumContext {
    captured: Arc<CapturedRequest>,
    log: RequestLog,
}

impl AxumContext {
    pub fn new(captured: CapturedRequest, log: RequestLog) -> Self {
        Self {
            captured: Arc::new(captured),
            log,
        }
    }
}

impl RequestContext for AxumContext {
    fn method(&self) -> &str {
        self.captured.method.as_str()
    }

    fn form(&self) -> Result<Option<FormSubmission>, FormError> {
        self.captured.form.clone()
    }

    fn params(&self) -> Params {
        Params::Values(self.captured.params.clone())
    }

    fn log_field(&self, key: &'static str, value: String) {
        self.log.set(key, value);
    }

    fn log_error(&self, err: &(dyn Error + 'static)) {
        self.log
            .span()
            .in_scope(|| tracing::error!(error = %err, "parameter logging failed"));
    }
}

/// Parameter logging middleware.
///
/// Runs the request inside an `http_request` span and records the redacted
/// `params` and `form` fields on it once the handler is done. The
/// [`RequestLog`] is available to handlers through request extensions and to
/// outer layers through response extensions.
pub async fn log_parameters(
    State(logger): State<ParameterLogger>,
    req: Request,
    next: Next,
) -> Response {
    let (mut req, captured) = capture(req, logger.max_form_bytes()).await;

    let span = tracing::info_span!(
        "http_request",
        request_id = %Uuid::new_v4(),
        method = %captured.method,
        path = %captured.path,
        params = Empty,
        form = Empty
    );
    let log = RequestLog::new(span.clone());
    req.extensions_mut().insert(log.clone());

    let ctx = AxumContext::new(captured, log.clone());
    let mut response = logger
        .handle(ctx, |_| next.run(req))
        .instrument(span)
        .await;

    response.extensions_mut().insert(log);
    response
}
