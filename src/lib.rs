pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{
    fetcher::EventFetcher,
    filters::build_query,
    query::QueryBuilder,
    search::{format_ids, QuakeSearch},
};
pub use domain::model::{Feature, Properties, Search};
pub use utils::error::{QuakeError, Result};
