use crate::adapters::http::HttpTransport;
use crate::adapters::reporter::TracingReporter;
use crate::config::ClientConfig;
use crate::core::error_handler::RequestErrorHandler;
use crate::core::query;
use crate::domain::model::{
    GetBreederPoultriesSuccess, GetBreederSuccess, GetBreedersSuccess, GetHomeSuccess,
    GetPoultrySuccess, GetSearchSuccess,
};
use crate::domain::params::{PoultriesPagination, SearchParams};
use crate::domain::ports::{ErrorReporter, Query, Transport};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Typed client for the content/search BFF.
///
/// Each endpoint comes in two flavours. `try_*` methods return the decoded
/// envelope or the error. The plain methods run the same request through a
/// [`RequestErrorHandler`] and never fail: `get_breeders` falls back to an
/// empty list, everything else to `None`.
///
/// The client keeps no per-call state, so clones can be used concurrently.
pub struct ContentSearchClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
    reporter: Arc<dyn ErrorReporter>,
}

impl<T: Transport> Clone for ContentSearchClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl ContentSearchClient<HttpTransport> {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(base_url))
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ContentSearchClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replaces the reporter that receives failures swallowed by the plain methods.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, segments: &[&str], query: Query) -> Result<R> {
        let body = self.transport.get_json(segments, &query).await?;
        Ok(serde_json::from_value(body)?)
    }

    fn guarded<R: Clone>(&self, operation: &'static str) -> RequestErrorHandler<Option<R>> {
        RequestErrorHandler::without_fallback(operation, Arc::clone(&self.reporter))
    }

    // GET /v1/breeders

    pub async fn try_get_breeders(&self, keyword: &str) -> Result<GetBreedersSuccess> {
        self.fetch(&["v1", "breeders"], query::breeders_query(keyword))
            .await
    }

    /// Breeders whose name matches `keyword`; an empty keyword lists all of them.
    pub async fn get_breeders(&self, keyword: &str) -> GetBreedersSuccess {
        RequestErrorHandler::new(
            "get_breeders",
            GetBreedersSuccess::empty(),
            Arc::clone(&self.reporter),
        )
        .handle(self.try_get_breeders(keyword))
        .await
    }

    // GET /v1/breeders/{breederId}

    pub async fn try_get_breeder(&self, breeder_id: &str) -> Result<GetBreederSuccess> {
        self.fetch(&["v1", "breeders", breeder_id], Query::new())
            .await
    }

    pub async fn get_breeder(&self, breeder_id: &str) -> Option<GetBreederSuccess> {
        self.guarded("get_breeder")
            .handle(self.try_get_breeder(breeder_id))
            .await
    }

    // GET /v1/breeders/{breederId}/poultries

    pub async fn try_get_breeder_poultries(
        &self,
        breeder_id: &str,
        pagination: Option<&PoultriesPagination>,
    ) -> Result<GetBreederPoultriesSuccess> {
        let query = query::breeder_poultries_query(pagination)?;
        self.fetch(&["v1", "breeders", breeder_id, "poultries"], query)
            .await
    }

    /// A breeder's poultries split into for-sale, reproductive, matrix, male
    /// and female lists, each paged independently.
    pub async fn get_breeder_poultries(
        &self,
        breeder_id: &str,
        pagination: Option<&PoultriesPagination>,
    ) -> Option<GetBreederPoultriesSuccess> {
        self.guarded("get_breeder_poultries")
            .handle(self.try_get_breeder_poultries(breeder_id, pagination))
            .await
    }

    // GET /v1/breeders/{breederId}/poultries/{poultryId}

    pub async fn try_get_poultry(
        &self,
        breeder_id: &str,
        poultry_id: &str,
    ) -> Result<GetPoultrySuccess> {
        self.fetch(
            &["v1", "breeders", breeder_id, "poultries", poultry_id],
            Query::new(),
        )
        .await
    }

    pub async fn get_poultry(&self, breeder_id: &str, poultry_id: &str) -> Option<GetPoultrySuccess> {
        self.guarded("get_poultry")
            .handle(self.try_get_poultry(breeder_id, poultry_id))
            .await
    }

    // GET /v1/home

    pub async fn try_get_home(&self, user_id: Option<&str>) -> Result<GetHomeSuccess> {
        self.fetch(&["v1", "home"], query::home_query(user_id)).await
    }

    /// Home-page carousels, personalised when `user_id` is given.
    pub async fn get_home(&self, user_id: Option<&str>) -> Option<GetHomeSuccess> {
        self.guarded("get_home")
            .handle(self.try_get_home(user_id))
            .await
    }

    // GET /v1/search

    pub async fn try_get_search(&self, params: &SearchParams) -> Result<GetSearchSuccess> {
        let query = query::search_query(params)?;
        self.fetch(&["v1", "search"], query).await
    }

    pub async fn get_search(&self, params: &SearchParams) -> Option<GetSearchSuccess> {
        self.guarded("get_search")
            .handle(self.try_get_search(params))
            .await
    }
}
