//! Reads everything the parameter logger needs out of an axum request
//! before the handler consumes it.

use axum::Form;
use axum::body::{Body, Bytes, HttpBody};
use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, RawPathParams, Request};
use axum::http::request::Parts;
use axum::http::{self, Method, header};
use futures::stream::{self, StreamExt};
use http_body_util::{BodyExt, BodyStream, StreamBody};

use paramlog_core::{FormError, FormSubmission, MultipartForm, ParameterMap};

/// Snapshot of a request taken on the way in.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    /// Route params followed by query params.
    pub params: ParameterMap,
    pub form: Result<Option<FormSubmission>, FormError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    UrlEncoded,
    Multipart,
}

impl FormKind {
    fn of(parts: &Parts) -> Option<Self> {
        let content_type = parts.headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
        let mime = content_type.split(';').next()?.trim();
        if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            Some(Self::UrlEncoded)
        } else if mime.eq_ignore_ascii_case("multipart/form-data") {
            Some(Self::Multipart)
        } else {
            None
        }
    }
}

/// Split `req` into the request to hand downstream and its captured
/// parameters.
///
/// Form bodies of non-GET requests are buffered (up to `max_form_bytes`)
/// and decoded; the returned request carries the same body. Unnamed
/// multipart parts are skipped. Other bodies are left untouched and produce
/// an empty form.
pub async fn capture(req: Request, max_form_bytes: usize) -> (Request, CapturedRequest) {
    let (mut parts, body) = req.into_parts();

    let mut params = ParameterMap::new();
    if let Ok(route) = RawPathParams::from_request_parts(&mut parts, &()).await {
        for (key, value) in route.iter() {
            params.add(key, value);
        }
    }
    match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
        Ok(Query(pairs)) => {
            for (key, value) in pairs {
                params.add(key, value);
            }
        }
        Err(e) => tracing::debug!(error = %e, "unparsable query string"),
    }

    let (body, form) = if parts.method == Method::GET {
        (body, Ok(None))
    } else {
        match FormKind::of(&parts) {
            Some(kind) => read_form(kind, &parts, body, max_form_bytes).await,
            None => (body, Ok(Some(FormSubmission::Standard(ParameterMap::new())))),
        }
    };

    let captured = CapturedRequest {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        params,
        form,
    };

    (Request::from_parts(parts, body), captured)
}

/// Buffer up to `limit` bytes of a form body and decode them.
///
/// The returned body replays every frame read here, followed by the rest of
/// the original body, so the handler sees the same data and the same read
/// errors it would without this layer.
async fn read_form(
    kind: FormKind,
    parts: &Parts,
    mut body: Body,
    limit: usize,
) -> (Body, Result<Option<FormSubmission>, FormError>) {
    if HttpBody::size_hint(&body).lower() > limit as u64 {
        return (body, Err(FormError::TooLarge { limit }));
    }

    let mut frames = Vec::new();
    let mut buffered = Vec::new();
    while let Some(frame) = body.frame().await {
        match frame {
            Ok(frame) => {
                if let Some(data) = frame.data_ref() {
                    buffered.extend_from_slice(data);
                }
                frames.push(frame);
                if buffered.len() > limit {
                    let replay = stream::iter(frames.into_iter().map(Ok))
                        .chain(BodyStream::new(body));
                    return (
                        Body::new(StreamBody::new(replay)),
                        Err(FormError::TooLarge { limit }),
                    );
                }
            }
            Err(e) => {
                let err = FormError::Read(e.to_string());
                let replay = stream::iter(frames.into_iter().map(Ok))
                    .chain(stream::once(async move { Err(e) }));
                return (Body::new(StreamBody::new(replay)), Err(err));
            }
        }
    }

    let form = decode(kind, parts, Bytes::from(buffered)).await.map(Some);
    let replay = stream::iter(frames.into_iter().map(Ok::<_, axum::Error>));
    (Body::new(StreamBody::new(replay)), form)
}

async fn decode(kind: FormKind, parts: &Parts, bytes: Bytes) -> Result<FormSubmission, FormError> {
    let mut builder = http::Request::builder()
        .method(parts.method.clone())
        .uri(parts.uri.clone());
    if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
        builder = builder.header(header::CONTENT_TYPE, content_type.clone());
    }
    let req = builder
        .body(Body::from(bytes))
        .map_err(|e| FormError::Decode(e.to_string()))?;

    match kind {
        FormKind::UrlEncoded => {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, &())
                .await
                .map_err(|e| FormError::Decode(e.to_string()))?;
            Ok(FormSubmission::Standard(pairs.into_iter().collect()))
        }
        FormKind::Multipart => {
            let mut multipart = Multipart::from_request(req, &())
                .await
                .map_err(|e| FormError::Decode(e.to_string()))?;

            let mut form = MultipartForm::default();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| FormError::Decode(e.to_string()))?
            {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                // File contents are skipped, only the filename is kept.
                match field.file_name().map(str::to_string) {
                    Some(filename) => form.files.push((name, filename)),
                    None => {
                        let value = field
                            .text()
                            .await
                            .map_err(|e| FormError::Decode(e.to_string()))?;
                        form.values.push((name, value));
                    }
                }
            }
            Ok(FormSubmission::Multipart(form))
        }
    }
}
