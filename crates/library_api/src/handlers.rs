//! Catalog HTTP handlers.
//!
//! Five generic handlers, one per operation; the router instantiates each
//! for `Author`, `Category` and `Book`.
//!
//! # Invariants
//! - Bodies are decoded from raw bytes whatever the `Content-Type`.
//! - Update checks the body before the path id; both fail with 400.
//! - A zero-row update answers 200 with `{"error": "<kind> does not exist"}`,
//!   unlike Get which answers 404.
//! - Delete answers 204 whether or not a row existed.

use crate::error::ApiError;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use library_core::{EntityId, EntityKind, StoredEntity, UpdateOutcome};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Body returned by Update when no row matched the id.
#[derive(Debug, Serialize)]
pub struct MissingRecord {
    pub error: String,
}

impl MissingRecord {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            error: format!("{kind} does not exist"),
        }
    }
}

pub async fn list<E>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError>
where
    E: StoredEntity + Serialize,
{
    let records = state
        .catalog
        .list_all::<E>()
        .await
        .map_err(|err| ApiError::from_repo("list", E::KIND, err))?;
    Ok(Json(records))
}

pub async fn get<E>(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<E>, ApiError>
where
    E: StoredEntity + Serialize,
{
    let id = parse_id(path)?;
    let record = state
        .catalog
        .get_by_id::<E>(id)
        .await
        .map_err(|err| ApiError::from_repo("get", E::KIND, err))?;
    Ok(Json(record))
}

pub async fn create<E>(State(state): State<AppState>, body: Bytes) -> Result<Json<E>, ApiError>
where
    E: StoredEntity + Serialize,
    E::Draft: DeserializeOwned,
{
    let draft = decode_body::<E::Draft>(&body)?;
    let record = state
        .catalog
        .create::<E>(draft)
        .await
        .map_err(|err| ApiError::from_repo("create", E::KIND, err))?;
    Ok(Json(record))
}

pub async fn update<E>(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    E: StoredEntity + Serialize,
    E::Draft: DeserializeOwned,
{
    let draft = decode_body::<E::Draft>(&body)?;
    let id = parse_id(path)?;
    let outcome = state
        .catalog
        .update::<E>(id, draft)
        .await
        .map_err(|err| ApiError::from_repo("update", E::KIND, err))?;

    Ok(match outcome {
        UpdateOutcome::Updated(record) => Json(record).into_response(),
        UpdateOutcome::NotFound => Json(MissingRecord::new(E::KIND)).into_response(),
    })
}

pub async fn delete<E>(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    E: StoredEntity,
{
    let id = parse_id(path)?;
    state
        .catalog
        .delete_by_id::<E>(id)
        .await
        .map_err(|err| ApiError::from_repo("delete", E::KIND, err))?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<EntityId, ApiError> {
    let Path(raw) = path.map_err(|err| ApiError::MalformedInput(err.body_text()))?;
    raw.parse::<EntityId>()
        .map_err(|err| ApiError::MalformedInput(format!("id `{raw}`: {err}")))
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::MalformedInput(err.to_string()))
}
