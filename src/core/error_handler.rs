use crate::domain::ports::ErrorReporter;
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;

/// Turns a failing request into a fallback value.
///
/// Wraps an `ApiResult<R>` future: success is converted into `T`, failure is
/// handed to the reporter and replaced by a clone of `fallback`. Most
/// operations use `T = Option<R>` with a `None` fallback.
#[derive(Clone)]
pub struct RequestErrorHandler<T> {
    operation: &'static str,
    fallback: T,
    reporter: Arc<dyn ErrorReporter>,
}

impl<T: Clone> RequestErrorHandler<T> {
    pub fn new(operation: &'static str, fallback: T, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            operation,
            fallback,
            reporter,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    pub async fn handle<R, F>(&self, request: F) -> T
    where
        F: Future<Output = Result<R>>,
        R: Into<T>,
    {
        match request.await {
            Ok(value) => value.into(),
            Err(e) => {
                self.reporter.report(self.operation, &e);
                self.fallback.clone()
            }
        }
    }
}

impl<R: Clone> RequestErrorHandler<Option<R>> {
    /// Handler that resolves failures to `None`.
    pub fn without_fallback(operation: &'static str, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self::new(operation, None, reporter)
    }
}
