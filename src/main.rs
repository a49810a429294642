use clap::Parser;
use secret_santa::core::report::{render_json, render_text};
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, DrawEngine, OutputFormat, SantaError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting secret-santa");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), SantaError> {
    let roster = config.load_roster()?;
    roster.validate()?;

    let engine = DrawEngine::new(roster);
    let outcome = engine.run()?;

    let rendered = match config.format {
        OutputFormat::Text => render_text(&outcome),
        OutputFormat::Json => render_json(&outcome)?,
    };
    print!("{}", rendered);
    if config.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
