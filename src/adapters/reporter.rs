use crate::domain::ports::ErrorReporter;
use crate::utils::error::ApiError;

/// Default reporter: one `warn` event per swallowed failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: &str, error: &ApiError) {
        match error {
            ApiError::Status { status, .. } => {
                tracing::warn!(operation, status, "BFF answered with an error status: {}", error)
            }
            _ => tracing::warn!(operation, "BFF request failed: {}", error),
        }
    }
}
