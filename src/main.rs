use anyhow::Context;
use clap::Parser;
use serial_search::utils::{logger, validation::Validate};
use serial_search::{CliConfig, Console, SearchEngine, SearchError, TsvFileSource};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting serial-search");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<SearchError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                eprintln!("{}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                err.exit_code()
            }
            None => {
                tracing::error!("❌ Run failed: {:#}", e);
                eprintln!("Error: {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let settings = config.resolve()?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    // Prompts go to stderr so stdout carries only the report.
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stderr());
    let lines = match settings.lines {
        Some(lines) => lines,
        None => console
            .prompt_line_count()
            .context("reading number of lines")?,
    };
    let key = match settings.key {
        Some(key) => key,
        None => console.prompt_search_key().context("reading search key")?,
    };

    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine =
        SearchEngine::new_with_monitoring(TsvFileSource::new(&settings.path), settings.monitor);
    let report = engine.run(lines, key)?;

    print!("{}", report.render(settings.format)?);
    tracing::info!("✅ Search completed");
    Ok(())
}
