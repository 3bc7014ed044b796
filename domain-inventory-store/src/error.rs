use serde::{Deserialize, Serialize};

/// Unified error type for all remote domain store operations.
///
/// Variants fall into two families:
/// - **Rejections**: the store answered with a non-success status
///   ([`Unauthorized`](Self::Unauthorized), [`InvalidRequest`](Self::InvalidRequest),
///   [`DomainExists`](Self::DomainExists), [`DomainNotFound`](Self::DomainNotFound),
///   [`ServerError`](Self::ServerError), [`Unknown`](Self::Unknown)).
/// - **Transport failures**: the request never produced a usable answer
///   ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
///   [`ParseError`](Self::ParseError), [`SerializationError`](Self::SerializationError)).
///
/// Requests are never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum StoreError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// No authenticated user (HTTP 401).
    Unauthorized {
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },

    /// The store rejected the request body (HTTP 400).
    InvalidRequest {
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },

    /// A domain with the same name already exists (HTTP 409).
    DomainExists {
        /// Name that collided.
        name: String,
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },

    /// The domain id is unknown to the store (HTTP 404).
    DomainNotFound {
        /// Id that was not found.
        id: String,
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },

    /// The store failed while handling the request (HTTP 5xx).
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the store's response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Any other non-success status.
    Unknown {
        /// HTTP status code.
        status: u16,
        /// Message returned by the store, if any.
        raw_message: Option<String>,
    },
}

impl StoreError {
    /// 是否为预期行为（未登录、输入错误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::InvalidRequest { .. }
                | Self::DomainExists { .. }
                | Self::DomainNotFound { .. }
        )
    }

    /// 请求是否根本没有得到可用的响应（网络、超时、解析）。
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::Timeout { .. }
                | Self::ParseError { .. }
                | Self::SerializationError { .. }
        )
    }

    /// Human-readable message supplied by the store, if the response carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { raw_message }
            | Self::InvalidRequest { raw_message }
            | Self::DomainExists { raw_message, .. }
            | Self::DomainNotFound { raw_message, .. }
            | Self::ServerError { raw_message, .. }
            | Self::Unknown { raw_message, .. } => raw_message.as_deref(),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => None,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Unauthorized { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::InvalidRequest { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid request: {msg}")
                } else {
                    write!(f, "Invalid request")
                }
            }
            Self::DomainExists { name, .. } => write!(f, "Domain '{name}' already exists"),
            Self::DomainNotFound { id, .. } => write!(f, "Domain '{id}' not found"),
            Self::ServerError {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "Server error (HTTP {status})")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::Unknown {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Unexpected response (HTTP {status}): {msg}")
                } else {
                    write!(f, "Unexpected response (HTTP {status})")
                }
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;
