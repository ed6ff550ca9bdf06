use chrono::Utc;
use clap::Parser;
use quake_search::core::ConfigProvider;
use quake_search::utils::{logger, validation::Validate};
use quake_search::{build_query, format_ids, CliConfig, EventFetcher, QuakeSearch, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading query options from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(&config, cli.dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => run(&cli, cli.dry_run).await,
    };

    match outcome {
        Ok(Some(line)) => println!("{}", line),
        Ok(None) => {}
        Err(e) => {
            // The diagnostic itself goes to stderr once, below.
            tracing::debug!(
                "Category: {:?}, suggestion: {}",
                e.category(),
                e.recovery_suggestion()
            );
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    dry_run: bool,
) -> quake_search::Result<Option<String>> {
    // 驗證配置
    config.validate()?;

    let query = build_query(config, Utc::now())?;

    if dry_run {
        return Ok(Some(query.render_url().to_string()));
    }

    let engine = QuakeSearch::new(EventFetcher::new());
    let ids = engine.run(&query).await?;

    Ok(format_ids(&ids))
}
