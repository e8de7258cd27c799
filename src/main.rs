use clap::Parser;
use sorted_check::utils::{logger, validation::Validate};
use sorted_check::{CheckEngine, CliConfig, ConsoleReporter, OutputFormat, StdinSource};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let source = StdinSource::stdin(config.max_size);
    let reporter = ConsoleReporter::console(config.format, config.quiet);
    let mut engine = CheckEngine::new(source, reporter);

    let result = engine.run().await;
    // release stdin/stdout before exiting on any path
    drop(engine);

    if let Err(e) = result {
        tracing::error!("Check failed: {} (Category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
