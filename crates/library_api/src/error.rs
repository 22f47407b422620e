//! Handler-boundary errors and their HTTP encoding.
//!
//! # Invariants
//! - Every variant renders as a bare status code with an empty body.
//! - Store failures are logged here, once per request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use library_core::{EntityKind, RepoError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// Body or path parameter did not decode.
    MalformedInput(String),
    /// Keyed read found no row.
    NotFound,
    /// Connectivity, constraint or query failure in the store.
    Store(RepoError),
}

impl ApiError {
    /// Classifies a repository failure for operation `op` on `kind`.
    pub fn from_repo(op: &'static str, kind: EntityKind, err: RepoError) -> Self {
        if err.is_not_found() {
            debug!("event=http_{op} module=handlers status=not_found kind={kind} error={err}");
            return Self::NotFound;
        }

        error!("event=http_{op} module=handlers status=error kind={kind} error={err}");
        Self::Store(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(message) => write!(f, "malformed input: {message}"),
            Self::NotFound => write!(f, "not found"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::MalformedInput(_) | Self::NotFound => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
