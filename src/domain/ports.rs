use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;

/// Ordered `(name, value)` pairs appended to a request URL.
pub type Query = Vec<(&'static str, String)>;

/// Base-URL-relative GET that decodes a JSON body.
///
/// `segments` are raw path segments; the transport escapes them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, segments: &[&str], query: &Query) -> Result<serde_json::Value>;
}

/// Receives every failure swallowed by a `RequestErrorHandler`.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, operation: &str, error: &ApiError);
}
