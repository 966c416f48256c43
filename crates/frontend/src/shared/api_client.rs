//! Thin HTTP layer over `gloo_net` for the REST backend.
//!
//! Every request carries `Authorization: Bearer <token>` when the token cookie
//! is present. Failures are mapped into [`ApiError`]; 422 bodies are unpacked
//! into a flat message list.

use super::api_utils::api_url;
use crate::system::auth::storage;
use contracts::domain::common::{RecordId, Resource};
use contracts::shared::api::{ListEnvelope, MessageBody, ValidationErrorBody};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{AbortSignal, File, FormData};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Parse(String),
    /// Client-side checks that never reached the backend
    #[error("{0}")]
    Form(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Map a non-success status and its body into an [`ApiError`].
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        422 => {
            let messages = serde_json::from_str::<ValidationErrorBody>(body)
                .map(|b| b.messages())
                .unwrap_or_default();
            if messages.is_empty() {
                ApiError::Http {
                    status,
                    message: "The given data was invalid".to_string(),
                }
            } else {
                ApiError::Validation(messages)
            }
        }
        _ => {
            let message = serde_json::from_str::<MessageBody>(body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| default_status_text(status).to_string());
            ApiError::Http { status, message }
        }
    }
}

fn default_status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        403 => "You are not allowed to do this",
        404 => "Not found",
        409 => "Conflict",
        419 => "Session token mismatch",
        429 => "Too many requests",
        500..=599 => "Server error",
        _ => "Unexpected status",
    }
}

/// Decode a JSON body; an empty body decodes as JSON `null`.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Flatten a JSON object into multipart text fields.
///
/// Nulls are skipped; nested arrays/objects are not representable as plain
/// form fields and are skipped as well.
pub fn form_fields(value: &serde_json::Value) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(key, v)| {
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("{:?} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = classify_failure(status, &body);
    log::warn!("{:?} {} -> {}: {}", method, url, status, err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    decode_body(&text)
}

fn build_err(e: gloo_net::Error) -> ApiError {
    ApiError::Parse(format!("Failed to build request: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_json_with_signal(path, None).await
}

/// GET that can be aborted through an `AbortController`.
pub async fn get_json_with_signal<T: DeserializeOwned>(
    path: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let request = authorized(Request::get(&api_url(path)))
        .abort_signal(signal)
        .build()
        .map_err(build_err)?;
    read_json(dispatch(request).await?).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(build_err)?;
    read_json(dispatch(request).await?).await
}

/// POST whose response body is irrelevant.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(build_err)?;
    dispatch(request).await.map(|_| ())
}

pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::put(&api_url(path)))
        .json(body)
        .map_err(build_err)?;
    dispatch(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api_url(path)))
        .build()
        .map_err(build_err)?;
    dispatch(request).await.map(|_| ())
}

pub async fn post_multipart(path: &str, form: FormData) -> Result<(), ApiError> {
    let request = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(build_err)?;
    dispatch(request).await.map(|_| ())
}

// ============================================================================
// Resource helpers
// ============================================================================

pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    get_json::<ListEnvelope<R>>(&R::collection_path())
        .await
        .map(ListEnvelope::into_vec)
}

pub async fn fetch_all_with_signal<R: Resource>(
    signal: Option<&AbortSignal>,
) -> Result<Vec<R>, ApiError> {
    get_json_with_signal::<ListEnvelope<R>>(&R::collection_path(), signal)
        .await
        .map(ListEnvelope::into_vec)
}

/// Create (POST) or update (PUT) depending on whether the item has an id.
pub async fn save<R: Resource>(item: &R) -> Result<(), ApiError> {
    item.validate().map_err(ApiError::Form)?;
    match item.id() {
        Some(id) => put_unit(&R::item_path(id), item).await,
        None => post_unit(&R::collection_path(), item).await,
    }
}

/// Save as multipart form-data with an attached photo.
///
/// Updates are sent as POST with `_method=PUT` since multipart bodies are
/// only parsed on POST by the backend.
pub async fn save_with_photo<R: Resource>(item: &R, photo: Option<File>) -> Result<(), ApiError> {
    let Some(photo) = photo else {
        return save(item).await;
    };
    item.validate().map_err(ApiError::Form)?;

    let value = serde_json::to_value(item).map_err(|e| ApiError::Parse(e.to_string()))?;
    let form = FormData::new().map_err(|e| ApiError::Parse(format!("{e:?}")))?;
    for (key, text) in form_fields(&value) {
        form.append_with_str(&key, &text)
            .map_err(|e| ApiError::Parse(format!("{e:?}")))?;
    }
    form.append_with_blob_and_filename("photo", &photo, &photo.name())
        .map_err(|e| ApiError::Parse(format!("{e:?}")))?;

    match item.id() {
        Some(id) => {
            form.append_with_str("_method", "PUT")
                .map_err(|e| ApiError::Parse(format!("{e:?}")))?;
            post_multipart(&R::item_path(id), form).await
        }
        None => post_multipart(&R::collection_path(), form).await,
    }
}

pub async fn remove<R: Resource>(id: RecordId) -> Result<(), ApiError> {
    delete(&R::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_is_flattened_into_one_message() {
        let body = r#"{"message":"The given data was invalid.",
            "errors":{"email":["The email has already been taken."],"name":["The name field is required."]}}"#;
        let err = classify_failure(422, body);
        assert_eq!(
            err,
            ApiError::Validation(vec![
                "The email has already been taken.".into(),
                "The name field is required.".into()
            ])
        );
        assert_eq!(
            err.to_string(),
            "The email has already been taken., The name field is required."
        );
    }

    #[test]
    fn test_unparseable_422_degrades_to_http_error() {
        let err = classify_failure(422, "<html>oops</html>");
        assert!(matches!(err, ApiError::Http { status: 422, .. }));
    }

    #[test]
    fn test_other_statuses() {
        assert_eq!(classify_failure(401, ""), ApiError::Unauthorized);
        assert_eq!(
            classify_failure(409, r#"{"message":"Branch still has classes"}"#),
            ApiError::Http {
                status: 409,
                message: "Branch still has classes".into()
            }
        );
        assert_eq!(
            classify_failure(500, ""),
            ApiError::Http {
                status: 500,
                message: "Server error".into()
            }
        );
    }

    #[test]
    fn test_decode_body_handles_empty_and_invalid() {
        let none: Option<i32> = decode_body("").unwrap();
        assert_eq!(none, None);
        assert!(matches!(decode_body::<Vec<i32>>("{"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_form_fields_skip_nulls_and_nested() {
        let value = serde_json::json!({
            "name": "Coach Dimas",
            "sport_id": 4,
            "active": true,
            "bio": null,
            "tags": ["a"]
        });
        let mut fields = form_fields(&value);
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("active".to_string(), "1".to_string()),
                ("name".to_string(), "Coach Dimas".to_string()),
                ("sport_id".to_string(), "4".to_string()),
            ]
        );
    }
}
