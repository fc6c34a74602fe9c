use clap::Parser;
use degree_formatter::adapters::clipboard::SystemClipboard;
use degree_formatter::adapters::sheets::SheetSource;
use degree_formatter::domain::model::DropdownData;
use degree_formatter::domain::ports::{Clipboard, DropdownSource};
use degree_formatter::utils::{logger, validation::Validate};
use degree_formatter::{CliConfig, FormSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting degree-formatter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let dropdowns = if config.offline {
        DropdownData::default()
    } else {
        SheetSource::new(config.sheet_endpoint.clone()).fetch_all().await
    };
    tracing::debug!(
        "Loaded {} degree levels, {} abbreviations",
        dropdowns.degree_levels.len(),
        dropdowns.degree_map.len()
    );

    let mut session = FormSession::new(dropdowns);
    session.set_degree_level(&config.degree_level);
    session.set_major(&config.major);
    session.set_second_major(&config.second_major);
    session.set_minor(&config.minor);
    session.set_option(&config.option);
    session.set_honors(&config.honors);
    session.set_awarded_date(&config.awarded_date);
    session.set_start_term(config.start_term_form.selection(&config.start_term));
    session.set_start_year(&config.start_year);
    session.set_end_term(config.end_term_form.selection(&config.end_term));
    session.set_end_year(&config.end_year);

    let text = if config.no_degree {
        session.no_degree_text()
    } else {
        session.presentation_text()
    };
    println!("{}", text);

    if config.copy {
        // Clipboard failure never affects the printed result.
        match SystemClipboard.write_text(&text) {
            Ok(()) => tracing::info!("Copied to clipboard"),
            Err(e) => tracing::warn!("Failed to copy text: {}", e),
        }
    }

    Ok(())
}
