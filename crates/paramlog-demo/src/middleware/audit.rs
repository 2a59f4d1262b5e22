use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use paramlog_axum::RequestLog;
use paramlog_core::{FORM_FIELD, PARAMS_FIELD};

/// Access log middleware.
///
/// Emits one `api_request` event per request. Sits outside the parameter
/// logger so the redacted fields can be read back from the response.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let log = response.extensions().get::<RequestLog>();
    let params = log.and_then(|l| l.get(PARAMS_FIELD));
    let form = log.and_then(|l| l.get(FORM_FIELD));

    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        params = params.as_deref(),
        form = form.as_deref(),
        "api_request"
    );

    response
}
