use crate::config::toml_config::{LogFormat, TomlConfig};
use crate::config::{ClientConfig, ENV_BASE_URL};
use crate::domain::params::{PoultriesPagination, PriceRange, SearchParams};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Number;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "content-search")]
#[command(about = "Query the breeder marketplace content/search BFF")]
pub struct CliConfig {
    /// BFF base URL; overrides the config file and environment
    #[arg(long, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// TOML file with a [client] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List breeders, optionally filtered by keyword
    Breeders {
        #[arg(long, default_value = "")]
        keyword: String,
    },
    /// Fetch one breeder with contacts, poultries and reviews
    Breeder { breeder_id: String },
    /// Fetch a breeder's poultries by category
    Poultries {
        breeder_id: String,
        #[command(flatten)]
        pagination: PaginationArgs,
    },
    /// Fetch one poultry's detail
    Poultry {
        breeder_id: String,
        poultry_id: String,
    },
    /// Fetch the home-page carousels
    Home {
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Search advertisings
    Search(SearchArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct PaginationArgs {
    #[arg(long)]
    pub for_sale: Option<u32>,
    #[arg(long)]
    pub reproductives: Option<u32>,
    #[arg(long)]
    pub matrixes: Option<u32>,
    #[arg(long)]
    pub males: Option<u32>,
    #[arg(long)]
    pub females: Option<u32>,
}

impl PaginationArgs {
    /// `None` when no counter was given, so the parameter is left off.
    pub fn to_pagination(&self) -> Option<PoultriesPagination> {
        let pagination = PoultriesPagination {
            for_sale: self.for_sale,
            reproductives: self.reproductives,
            matrixes: self.matrixes,
            males: self.males,
            females: self.females,
        };
        (pagination != PoultriesPagination::default()).then_some(pagination)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    #[arg(long, value_delimiter = ',')]
    pub gender: Vec<String>,
    #[arg(long = "type", value_delimiter = ',')]
    pub kind: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub tail: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub dewlap: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub crest: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub gender_category: Vec<String>,
    #[arg(long)]
    pub keyword: Option<String>,
    /// Lower price bound, any JSON number (`99.9`, `-5`)
    #[arg(long, allow_negative_numbers = true)]
    pub min_price: Option<Number>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_price: Option<Number>,
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, default_value = "0")]
    pub page: u32,
    #[arg(long)]
    pub favorite_external_id: Option<String>,
}

impl SearchArgs {
    pub fn to_params(&self) -> SearchParams {
        let prices = PriceRange {
            min: self.min_price.clone(),
            max: self.max_price.clone(),
        };
        SearchParams {
            gender: self.gender.clone(),
            kind: self.kind.clone(),
            tail: self.tail.clone(),
            dewlap: self.dewlap.clone(),
            crest: self.crest.clone(),
            gender_category: self.gender_category.clone(),
            keyword: self.keyword.clone(),
            prices: (!prices.is_unbounded()).then_some(prices),
            sort: self.sort.clone(),
            page: self.page,
            favorite_external_id: self.favorite_external_id.clone(),
        }
    }
}

impl CliConfig {
    /// Reads the `--config` file, if one was given.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()
    }

    /// Environment, then config file, then `--base-url`.
    pub fn client_config(&self, file: Option<&TomlConfig>) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env()?;
        if let Some(file) = file {
            config = file.apply_to(config);
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        Ok(config)
    }

    /// `--json-logs` and `--verbose` win over the `[logging]` table.
    pub fn log_settings(&self, file: Option<&TomlConfig>) -> (LogFormat, bool) {
        let logging = file.map(TomlConfig::logging).unwrap_or_default();
        let format = if self.json_logs {
            LogFormat::Json
        } else {
            logging.format
        };
        (format, self.verbose || logging.verbose)
    }
}
