use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hashlink_core::{ShortCode, ShortLink};
use tracing::{debug, warn};

pub async fn create_url_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Json(request) = request?;
    let code = state.shortener().shorten(request.url).await?;

    Ok(Json(CreateUrlResponse {
        short_url: code.to_string(),
    }))
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Response> {
    let code = parse_short_code(short_code)?;
    let link = state.shortener().resolve(&code).await?;

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|_| {
        warn!(code = %code, "stored url is not a valid Location header value");
        AppError::InvalidRedirectTarget(code.to_string())
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<ShortLink>> {
    let code = parse_short_code(short_code)?;
    let link = state.shortener().resolve(&code).await?;
    Ok(Json(link))
}

/// A segment that is not a well-formed code was never handed out, so it is
/// reported the same way as an unknown code.
fn parse_short_code(short_code: String) -> Result<ShortCode> {
    ShortCode::new(short_code.as_str()).map_err(|error| {
        debug!(code = %short_code, %error, "rejecting malformed short code");
        AppError::NotFound(short_code)
    })
}
