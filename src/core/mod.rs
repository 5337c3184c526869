pub mod client;
pub mod error_handler;
pub mod query;

pub use crate::domain::model::*;
pub use crate::domain::params::{PoultriesPagination, PriceRange, SearchParams};
pub use crate::domain::ports::{ErrorReporter, Query, Transport};
pub use crate::utils::error::Result;
