use axum::extract::{Form, FromRequest, Multipart, Query, Request};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::server::api::{self, ErrorResponse, ProgressionPayloadError};
use crate::server::views;
use crate::theory::resolve;

/// Body of the plain-text 400 returned to the HTML form.
pub const INCORRECT_INPUT: &str = "Incorrect input.";

#[derive(Debug, Default, Deserialize)]
pub struct ProgressionForm {
    #[serde(default)]
    pub prog: Option<String>,
}

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

/// `POST /`: renders the table, or falls back to the empty form when no
/// `prog` field was submitted. Urlencoded and multipart bodies are both read;
/// anything else counts as a missing field.
pub async fn submit(request: Request) -> Response {
    let Some(prog) = submitted_prog(request).await else {
        return Html(views::home_page()).into_response();
    };

    match resolve(&prog) {
        Ok(progression) => Html(views::progressions_page(&prog, &progression)).into_response(),
        Err(err) => {
            debug!(input = %prog, error = %err, "rejected form progression");
            (StatusCode::BAD_REQUEST, INCORRECT_INPUT).into_response()
        }
    }
}

async fn submitted_prog(request: Request) -> Option<String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &()).await.ok()?;
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("prog") {
                return field.text().await.ok();
            }
        }
        None
    } else {
        let Form(form) = Form::<ProgressionForm>::from_request(request, &()).await.ok()?;
        form.prog
    }
}

pub async fn health() -> Json<api::HealthResponse> {
    Json(api::health())
}

pub async fn keys() -> Json<api::KeysResponse> {
    Json(api::keys())
}

pub async fn progressions_query(Query(query): Query<ProgressionForm>) -> Response {
    let Some(prog) = query.prog else {
        return error_response(StatusCode::BAD_REQUEST, "missing 'prog' query parameter");
    };
    match resolve(&prog) {
        Ok(progression) => Json(progression).into_response(),
        Err(err) => ProgressionPayloadError::from(err).into_response(),
    }
}

pub async fn progressions_body(body: String) -> Response {
    match api::progressions_from_body(&body) {
        Ok(progression) => Json(progression).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

impl IntoResponse for ProgressionPayloadError {
    fn into_response(self) -> Response {
        debug!(error = %self, "rejected api progression");
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
