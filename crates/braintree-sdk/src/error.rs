use thiserror::Error;

use crate::config::ConfigError;

/// Out-of-band faults raised by gateway operations.
///
/// Validation failures never appear here; they are returned inside a
/// [`crate::ValidatedResponse`]. The first nine variants are the service
/// faults; `Config` and `Serde` are local failures.
#[derive(Debug, Error)]
pub enum BraintreeError {
    #[error("authentication failed")]
    Authentication,

    #[error("not authorized to perform this operation")]
    Authorization,

    #[error("resource not found")]
    NotFound,

    #[error("gateway is down for maintenance")]
    DownForMaintenance,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("too many requests")]
    TooManyRequests,

    #[error("server error")]
    Server,

    #[error("unexpected error: {0}")]
    Unexpected(String),

    #[error("client library must be upgraded")]
    UpgradeRequired,

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Payload-free identification of a service fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Authentication,
    Authorization,
    NotFound,
    DownForMaintenance,
    InvalidSignature,
    TooManyRequests,
    Server,
    Unexpected,
    UpgradeRequired,
}

impl BraintreeError {
    /// Map a non-success HTTP status to the fault it signals.
    ///
    /// Returns `None` for 2xx and 422, which are not faults.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 | 422 => None,
            401 => Some(Self::Authentication),
            403 => Some(Self::Authorization),
            404 => Some(Self::NotFound),
            426 => Some(Self::UpgradeRequired),
            429 => Some(Self::TooManyRequests),
            500 => Some(Self::Server),
            503 => Some(Self::DownForMaintenance),
            other => Some(Self::Unexpected(format!("unexpected HTTP status {other}"))),
        }
    }

    /// The service fault category, or `None` for local failures.
    pub fn kind(&self) -> Option<FaultKind> {
        match self {
            Self::Authentication => Some(FaultKind::Authentication),
            Self::Authorization => Some(FaultKind::Authorization),
            Self::NotFound => Some(FaultKind::NotFound),
            Self::DownForMaintenance => Some(FaultKind::DownForMaintenance),
            Self::InvalidSignature => Some(FaultKind::InvalidSignature),
            Self::TooManyRequests => Some(FaultKind::TooManyRequests),
            Self::Server => Some(FaultKind::Server),
            Self::Unexpected(_) => Some(FaultKind::Unexpected),
            Self::UpgradeRequired => Some(FaultKind::UpgradeRequired),
            Self::Config(_) | Self::Serde(_) => None,
        }
    }
}
