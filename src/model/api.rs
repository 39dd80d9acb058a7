//! The response envelope every endpoint speaks.
//!
//! On the wire a reply is `{"status": "success", "message": ..., <payload fields>}` or
//! `{"status": "error", "message": ...}`.

use rocket::{
    http::Status,
    response::{self, status::Custom, Responder},
    serde::json::Json,
    Request,
};
use serde::Serialize;

use crate::error::Error;

use super::PositionResult;

/// The outcome of one operation, as returned to the client.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Reply<T> {
    Success {
        message: String,
        #[serde(flatten)]
        payload: T,
    },
    Error {
        message: String,
        #[serde(skip)]
        code: Status,
    },
}

impl<T> Reply<T> {
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self::Success {
            message: message.into(),
            payload,
        }
    }

    /// Translate a domain error. Only its public message crosses the boundary.
    pub fn error(err: &Error) -> Self {
        Self::Error {
            message: err.public_message(),
            code: err.status(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Error { message, .. } => message,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Error { .. } => None,
        }
    }

    /// The HTTP status the reply is sent with.
    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Ok,
            Self::Error { code, .. } => *code,
        }
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for Reply<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        Custom(status, Json(self)).respond_to(req)
    }
}

/// Payload carried under `data`.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// No payload beyond the message.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// Payload of the results endpoint, carried under `results`.
#[derive(Debug, Serialize)]
pub struct Results {
    pub results: Vec<PositionResult>,
}
