//! Option structs accepted by the client operations.
//!
//! All of them are plain data with `Default`; the encoding into query
//! parameters lives in `core::query`.

use serde::Serialize;
use serde_json::Number;

/// Per-category page offsets for `get_breeder_poultries`.
///
/// Travels as a single JSON-encoded `pagination` parameter. Unset counters
/// are left out of the JSON so the BFF applies its own default for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultriesPagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reproductives: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrixes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub males: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub females: Option<u32>,
}

impl PoultriesPagination {
    pub fn for_sale(mut self, page: u32) -> Self {
        self.for_sale = Some(page);
        self
    }

    pub fn reproductives(mut self, page: u32) -> Self {
        self.reproductives = Some(page);
        self
    }

    pub fn matrixes(mut self, page: u32) -> Self {
        self.matrixes = Some(page);
        self
    }

    pub fn males(mut self, page: u32) -> Self {
        self.males = Some(page);
        self
    }

    pub fn females(mut self, page: u32) -> Self {
        self.females = Some(page);
        self
    }
}

/// Price bounds for a search, sent JSON-encoded as `prices`.
///
/// Bounds are JSON numbers, so `10` stays `10` on the wire while `99.9` and
/// negative values are carried as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
}

impl PriceRange {
    pub fn new<N: Into<Number>>(min: Option<N>, max: Option<N>) -> Self {
        Self {
            min: min.map(Into::into),
            max: max.map(Into::into),
        }
    }

    /// Fractional bounds. `None` for NaN or infinite values, which JSON cannot hold.
    pub fn from_f64(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        let bound = |value: Option<f64>| match value {
            Some(v) => Number::from_f64(v).map(Some),
            None => Some(None),
        };
        Some(Self {
            min: bound(min)?,
            max: bound(max)?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Filters for `get_search`.
///
/// | field | default | wire |
/// |---|---|---|
/// | array filters | empty | comma-joined, blank entries dropped, absent when empty |
/// | `keyword` | `None` | sent as-is when set |
/// | `prices` | `None` | JSON string |
/// | `sort` | `None` | sent as-is when set |
/// | `page` | `0` | always sent |
/// | `favorite_external_id` | `None` | sent only when non-empty |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub gender: Vec<String>,
    pub kind: Vec<String>,
    pub tail: Vec<String>,
    pub dewlap: Vec<String>,
    pub crest: Vec<String>,
    pub gender_category: Vec<String>,
    pub keyword: Option<String>,
    pub prices: Option<PriceRange>,
    pub sort: Option<String>,
    pub page: u32,
    pub favorite_external_id: Option<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gender = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn kind<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn tail<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tail = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn dewlap<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dewlap = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn crest<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.crest = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn gender_category<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gender_category = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn prices(mut self, prices: PriceRange) -> Self {
        self.prices = Some(prices);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn favorite_external_id(mut self, id: impl Into<String>) -> Self {
        self.favorite_external_id = Some(id.into());
        self
    }
}
