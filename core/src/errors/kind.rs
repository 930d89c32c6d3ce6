//! Closed set of error kinds

use apperr_shared::error_codes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of an application failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "not found")]
    NotFound,
    #[serde(rename = "bad request")]
    BadRequest,
    #[serde(rename = "conflict")]
    Conflict,
    #[serde(rename = "unauthorized")]
    Unauthorized,
    #[serde(rename = "forbidden")]
    Forbidden,
    #[serde(rename = "internal error")]
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::NotFound,
        ErrorKind::BadRequest,
        ErrorKind::Conflict,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::Internal,
    ];

    /// Canonical code string used in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::BadRequest => error_codes::BAD_REQUEST,
            ErrorKind::Conflict => error_codes::CONFLICT,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::Forbidden => error_codes::FORBIDDEN,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }

    /// HTTP status for this kind.
    ///
    /// No wildcard arm: a new kind must be given a status here.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadRequest => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::Internal => 500,
        }
    }

    /// Whether the failure is attributed to the client (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code string that names none of the known kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error kind: {0}")]
pub struct UnknownErrorKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownErrorKind(s.to_string()))
    }
}
