//! Word Dictionary - command-line entrypoint.
//!
//! Loads a word list described by the configuration (and command-line
//! overrides), builds the dictionary and answers a single query.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_dictionary_lib::config::{
    ConfigLoader, ConfigResult, DictionaryConfig, LogConfig, SourceOverrides, Validate, ENV_PREFIX,
};
use word_dictionary_lib::error::{
    report_error, set_error_reporter, DictionaryError, DictionaryResult, ErrorContext,
    TracingErrorReporter,
};
use word_dictionary_lib::Dictionary;

/// Command line arguments for the word dictionary.
#[derive(Parser, Debug)]
#[clap(name = "word-dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    #[clap(flatten)]
    overrides: SourceOverrides,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print whether a word is in the dictionary
    Exists {
        /// Word to look up
        word: String,
    },

    /// List every word starting with a prefix
    StartingWith {
        /// Prefix to expand
        prefix: String,
    },

    /// List every prefix of a string that is a word
    Prefixes {
        /// String whose prefixes are checked
        string: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Args {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut DictionaryConfig) {
        self.overrides.apply(&mut config.source);
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so that query results on stdout stay machine-readable.
fn init_logging(log: &LogConfig) -> DictionaryResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        DictionaryError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Merges the command-line overrides into the loaded configuration and validates
/// the result.
fn resolve_config(
    args: &Args,
    config: ConfigResult<DictionaryConfig>,
) -> DictionaryResult<DictionaryConfig> {
    let mut config = config?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn load_dictionary(args: &Args, config: ConfigResult<DictionaryConfig>) -> DictionaryResult<Dictionary> {
    let config = resolve_config(args, config)?;
    Dictionary::from_config(&config.source)
}

fn print_words(words: &[String]) {
    for word in words {
        println!("{word}");
    }
}

fn run(args: &Args, config: ConfigResult<DictionaryConfig>) -> DictionaryResult<()> {
    match &args.command {
        Command::Exists { word } => {
            let dictionary = load_dictionary(args, config)?;
            println!("{}", dictionary.exists(word));
            Ok(())
        }
        Command::StartingWith { prefix } => {
            let dictionary = load_dictionary(args, config)?;
            print_words(&dictionary.starting_with(prefix));
            Ok(())
        }
        Command::Prefixes { string } => {
            let dictionary = load_dictionary(args, config)?;
            print_words(&dictionary.prefixes(string));
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            resolve_config(args, config)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = DictionaryConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| DictionaryError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log = config
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(error) = run(&args, config) {
        report_error(ErrorContext::new(error, "cli").with_details(format!("{:?}", args.command)));
        process::exit(1);
    }
}
