use std::collections::HashMap;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::database::models::MovieFields;
use crate::database::SqlValue;
use crate::error::ApiError;

const DIRECTOR_ID: &str = "directorId";
const MOVIE_NAME: &str = "movieName";
const LEAD_ACTOR: &str = "leadActor";

/// Movie body accepted by create and update, as JSON or an urlencoded form.
///
/// Fields that are absent bind as NULL, as does an empty JSON body. A body
/// with any other content type is ignored, leaving every field NULL.
#[derive(Debug)]
pub struct MoviePayload(pub MovieFields);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return BodyKind::Other;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json"
            || (essence.starts_with("application/") && essence.ends_with("+json"))
        {
            BodyKind::Json
        } else if essence == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for MoviePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
                Ok(Self(parse_json_body(&bytes)?))
            }
            BodyKind::Form => {
                let Form(body) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
                Ok(Self(fields_from_form(body)))
            }
            BodyKind::Other => Ok(Self(MovieFields::empty())),
        }
    }
}

/// An empty body reads as `{}`; a top-level scalar is rejected.
fn parse_json_body(bytes: &[u8]) -> Result<MovieFields, ApiError> {
    if bytes.is_empty() {
        return Ok(MovieFields::empty());
    }

    let body: Value = serde_json::from_slice(bytes).map_err(|e| {
        ApiError::bad_request(format!("Failed to parse the request body as JSON: {e}"))
    })?;
    match body {
        Value::Object(_) | Value::Array(_) => Ok(fields_from_json(&body)),
        _ => Err(ApiError::bad_request("JSON body must be an object or array")),
    }
}

fn fields_from_json(body: &Value) -> MovieFields {
    MovieFields {
        director_id: SqlValue::from(body.get(DIRECTOR_ID)),
        movie_name: SqlValue::from(body.get(MOVIE_NAME)),
        lead_actor: SqlValue::from(body.get(LEAD_ACTOR)),
    }
}

fn fields_from_form(mut body: HashMap<String, String>) -> MovieFields {
    MovieFields {
        director_id: SqlValue::from(body.remove(DIRECTOR_ID)),
        movie_name: SqlValue::from(body.remove(MOVIE_NAME)),
        lead_actor: SqlValue::from(body.remove(LEAD_ACTOR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{self, HeaderValue, StatusCode};

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/movies/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[test]
    fn classifies_content_types() {
        let mut headers = HeaderMap::new();
        assert_eq!(BodyKind::of(&headers), BodyKind::Other);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        assert_eq!(BodyKind::of(&headers), BodyKind::Json);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.api+json"));
        assert_eq!(BodyKind::of(&headers), BodyKind::Json);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/x-www-form-urlencoded"));
        assert_eq!(BodyKind::of(&headers), BodyKind::Form);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(BodyKind::of(&headers), BodyKind::Other);
    }

    #[test]
    fn array_json_supplies_nothing() {
        assert_eq!(parse_json_body(b"[1, 2, 3]").unwrap(), MovieFields::empty());
    }

    #[test]
    fn empty_json_body_reads_as_empty_object() {
        assert_eq!(parse_json_body(b"").unwrap(), MovieFields::empty());
    }

    #[test]
    fn top_level_json_scalars_are_rejected() {
        let bodies: [&[u8]; 4] = [b"\"Dune\"", b"5", b"true", b"null"];
        for body in bodies {
            let err = parse_json_body(body).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let req = request(
            Some("application/json"),
            r#"{"directorId": 1, "movieName": "Dune", "leadActor": "Chalamet"}"#,
        );
        let MoviePayload(fields) = MoviePayload::from_request(req, &()).await.unwrap();
        assert_eq!(fields.director_id, SqlValue::Integer(1));
        assert_eq!(fields.movie_name, SqlValue::Text("Dune".into()));
        assert_eq!(fields.lead_actor, SqlValue::Text("Chalamet".into()));
    }

    #[tokio::test]
    async fn decodes_form_body() {
        let req = request(
            Some("application/x-www-form-urlencoded"),
            "directorId=4&movieName=The+Prestige",
        );
        let MoviePayload(fields) = MoviePayload::from_request(req, &()).await.unwrap();
        assert_eq!(fields.director_id, SqlValue::Text("4".into()));
        assert_eq!(fields.movie_name, SqlValue::Text("The Prestige".into()));
        assert_eq!(fields.lead_actor, SqlValue::Null);
    }

    #[tokio::test]
    async fn unknown_content_type_yields_nulls() {
        let req = request(None, "directorId=4");
        let MoviePayload(fields) = MoviePayload::from_request(req, &()).await.unwrap();
        assert_eq!(fields, MovieFields::empty());
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let req = request(Some("application/json"), "{\"movieName\": ");
        let err = MoviePayload::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
