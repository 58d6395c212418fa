//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// Gallery error type.
///
/// Every variant carries technical detail meant for the diagnostic log only.
/// The gallery never shows these strings to the user; it renders a generic
/// message instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum GalleryError {
    /// Transport failure (DNS, connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-success HTTP status whose body is not JSON either
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The response body is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Feed options cannot be turned into a client
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Gallery Result 类型别名
pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
