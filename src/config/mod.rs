pub mod toml_config;

use std::time::Duration;

pub const DEFAULT_SERVICE: &str = "wfs.geonet.org.nz";
pub const DEFAULT_MIN_MAGNITUDE: f64 = 3.0;
pub const DEFAULT_MAX_MAGNITUDE: f64 = 0.0;
pub const DEFAULT_SINCE: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_AGO: Duration = Duration::ZERO;
pub const DEFAULT_EVENT_TYPE: &str = "earthquake";
pub const DEFAULT_EVALUATION_STATUS: &str = "confirmed";
pub const DEFAULT_EVALUATION_MODE: &str = "manual";
pub const DEFAULT_LIMIT: usize = 0;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::duration::parse_duration;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_search_options, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "quake-search")]
    #[command(about = "Provide a list of recent earthquakes suitable for shakemap processing")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_SERVICE, help = "earthquake query service")]
        pub service: String,

        #[arg(
            long,
            default_value_t = DEFAULT_MIN_MAGNITUDE,
            help = "minimum magnitude to process, use 0.0 for no limit"
        )]
        pub minmag: f64,

        #[arg(
            long,
            default_value_t = DEFAULT_MAX_MAGNITUDE,
            help = "maximum magnitude to process, use 0.0 for no limit"
        )]
        pub maxmag: f64,

        #[arg(
            long,
            default_value = "30m",
            value_parser = parse_duration,
            help = "modified event search window since this time offset, use 0 for no offset"
        )]
        pub since: Duration,

        #[arg(
            long,
            default_value = "0",
            value_parser = parse_duration,
            help = "modified event search window at least this time offset ago, use 0 for no offset"
        )]
        pub ago: Duration,

        #[arg(
            long = "type",
            default_value = DEFAULT_EVENT_TYPE,
            help = "event type query parameter"
        )]
        pub event_type: String,

        #[arg(
            long,
            default_value = DEFAULT_EVALUATION_STATUS,
            help = "event status query parameter"
        )]
        pub status: String,

        #[arg(long, default_value = DEFAULT_EVALUATION_MODE, help = "event mode query parameter")]
        pub mode: String,

        #[arg(
            long,
            default_value_t = DEFAULT_LIMIT,
            help = "maximum number of records to process before filters, use 0 for no limit"
        )]
        pub limit: usize,

        #[arg(long, help = "make noise")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[arg(long, help = "Read query options from a TOML file instead of the flags above")]
        pub config: Option<String>,

        #[arg(long, help = "Print the request URL without contacting the service")]
        pub dry_run: bool,
    }

    impl ConfigProvider for CliConfig {
        fn service(&self) -> &str {
            &self.service
        }

        fn min_magnitude(&self) -> f64 {
            self.minmag
        }

        fn max_magnitude(&self) -> f64 {
            self.maxmag
        }

        fn since(&self) -> Duration {
            self.since
        }

        fn ago(&self) -> Duration {
            self.ago
        }

        fn event_type(&self) -> &str {
            &self.event_type
        }

        fn evaluation_status(&self) -> &str {
            &self.status
        }

        fn evaluation_mode(&self) -> &str {
            &self.mode
        }

        fn limit(&self) -> usize {
            self.limit
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_search_options(self)
        }
    }

}
