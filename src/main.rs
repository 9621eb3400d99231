use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info };

use poeme_assistant::{ AssistantConfig, AssistantError, DefaultAssistant, Language };

mod cli;
use cli::commands::{ self, Destination };
use cli::{ Commands, OutputFormat, PoemeCli };

fn main() {
    if let Err(e) = run() {
        cli::ui::print_error(&format!("{:#}", e));
        if let Some(inner) = e.downcast_ref::<AssistantError>() {
            if inner.is_user_error() {
                cli::ui::print_info("Run `poeme --help` for the accepted values.");
            }
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse the command line arguments
    let cli = PoemeCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // .env may name the configuration file
    if dotenv::dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }

    let mut config = AssistantConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    apply_target_overrides(&mut config, &cli.command);

    let language = match &cli.lang {
        Some(lang) => lang.parse::<Language>()?,
        None => config.language,
    };
    let format = OutputFormat::parse(&cli.output_format)?;
    info!("Language: {}, output format: {:?}", language, format);

    // Create an instance of the assistant from the merged configuration
    let assistant = DefaultAssistant::new(&config);

    // Handle commands
    match &cli.command {
        Commands::Generate {
            topic,
            keywords,
            scheme,
            stanzas,
            lines,
            mode,
            no_fit,
            seed,
            output,
            save,
            ..
        } => {
            let args = commands::generate::GenerateArgs {
                topic: topic.as_deref(),
                keywords: keywords.as_deref(),
                scheme: scheme.as_deref(),
                stanzas: *stanzas,
                lines: *lines,
                mode: mode.as_deref(),
                no_fit: *no_fit,
                seed: *seed,
            };
            let request = commands::generate::build_request(&config, language, &args)?;
            commands::generate::execute(&assistant, &request, format, &Destination {
                output: output.as_deref(),
                save: *save,
            })?;
        }

        Commands::Analyze { file, text, output, save, .. } => {
            let poem = commands::analyze::load_poem(file.as_deref(), text.as_deref())?;
            commands::analyze::execute(&assistant, &poem, language, format, &Destination {
                output: output.as_deref(),
                save: *save,
            })?;
        }

        Commands::Theme => {
            commands::theme::execute(&assistant, language, format)?;
        }

        Commands::Interactive => {
            commands::interactive::execute(&assistant, &config, language)?;
        }
    }

    Ok(())
}

/// Command-line syllable targets win over the configured ones
fn apply_target_overrides(config: &mut AssistantConfig, command: &Commands) {
    let (min, max) = match command {
        Commands::Generate { target_min, target_max, .. } => (*target_min, *target_max),
        Commands::Analyze { target_min, target_max, .. } => (*target_min, *target_max),
        _ => (None, None),
    };

    if let Some(min) = min {
        config.analysis.min_syllables = min;
    }
    if let Some(max) = max {
        config.analysis.max_syllables = max;
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
