pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{http::HttpTransport, reporter::TracingReporter};
pub use config::{toml_config::TomlConfig, ClientConfig};
pub use crate::core::{client::ContentSearchClient, error_handler::RequestErrorHandler};
pub use domain::params::{PoultriesPagination, PriceRange, SearchParams};
pub use utils::error::{ApiError, Result};
