use clap::Parser;
use eyre::Result;
use laudo_cli::cli::{Cli, Command, ConfigCommand};
use laudo_cli::commands::{self, Session};
use laudo_cli::config;
use laudo_export::assemble::ReportFormat;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json);

    let config = config::load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Command::Classify(args) => {
            let session = Session::open(&config, &args)?;
            let case = commands::read_case(args.case.as_deref())?;
            commands::classify_case(&case, &session)?
        }
        Command::Report {
            case: args,
            summary,
            html,
            plain,
        } => {
            let format = match (html, plain) {
                (true, _) => ReportFormat::Html,
                (_, true) => ReportFormat::PlainText,
                _ => config.default_format,
            };
            let session = Session::open(&config, &args)?;
            let case = commands::read_case(args.case.as_deref())?;
            commands::report_case(&case, &session, summary, format)?
        }
        Command::Options {
            scale,
            key,
            catalog,
        } => {
            let catalog_path = catalog.as_deref().or(config.catalog_path.as_deref());
            let catalog = commands::load_catalog(catalog_path)?;
            commands::list_options(catalog.as_ref(), &scale, &key)?
        }
        Command::Config(ConfigCommand::Show) => serde_json::to_string_pretty(&config)?,
        Command::Config(ConfigCommand::Init) => {
            let path = match cli.config {
                Some(path) => path,
                None => config::config_path()?,
            };
            config::save_config_to(&config, &path)?;
            format!("config written to {}", path.display())
        }
    };

    println!("{output}");
    Ok(())
}

/// Logs go to stderr so the report on stdout can be piped.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
