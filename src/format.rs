// src/format.rs
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use http::header::ACCEPT;

/// Response representation negotiated per request. The bare routes render
/// HTML documents; JSON is selected by the `Accept` header or an explicit
/// `format=json` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    fn from_parts(parts: &Parts) -> Self {
        if let Some(query) = parts.uri.query() {
            for pair in query.split('&') {
                match pair {
                    "format=json" => return ResponseFormat::Json,
                    "format=html" => return ResponseFormat::Html,
                    _ => {}
                }
            }
        }

        let accept = parts
            .headers
            .get(ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if accepts_json(accept) {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }
}

fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|entry| {
        let media = entry.split(';').next().unwrap_or("").trim();
        media == "application/json" || media.ends_with("+json")
    })
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        Ok(ResponseFormat::from_parts(parts))
    }
}
