//! mdhtml - A streaming Markdown heading to HTML translator.
//!
//! This binary provides the CLI interface to the mdhtml library,
//! reading Markdown from files or stdin one byte at a time.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use mdhtml_config::Config;
use mdhtml_core::{Options, Result};
use mdhtml_render::{Document, Translator};

fn main() {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("mdhtml v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        // Syntax errors are already on the diagnostic channel.
        if e.syntax_kind().is_none() {
            error!("{}", e);
        } else {
            debug!("{}", e);
        }
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = create_options(&config);
    debug!("Options: {:?}", options);

    let document = Document::from_config(&config.document);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut translator =
        Translator::new(stdout.lock(), stderr.lock(), options).with_document(document);

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        translator.translate(io::stdin().lock())
    } else {
        translator.translate(open_inputs(&cli.files)?)
    }
}

/// Load configuration, then apply the command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    cli.apply(&mut config);
    debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn create_options(config: &Config) -> Options {
    config.options()
}

/// Open every input file and chain them into one stream.
fn open_inputs(paths: &[PathBuf]) -> Result<Box<dyn Read>> {
    let mut input: Box<dyn Read> = Box::new(io::empty());
    for path in paths {
        info!("Processing file: {}", path.display());
        let file = File::open(path)?;
        input = Box::new(input.chain(file));
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_options_default() {
        let cli = Cli::parse_from(["mdhtml"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        let options = create_options(&config);

        assert!(!options.trace_mode);
        assert!(!options.suppress_document_wrapper);
    }

    #[test]
    fn test_create_options_with_flags() {
        let cli = Cli::parse_from(["mdhtml", "--debug", "--nodoc"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        let options = create_options(&config);

        assert!(options.trace_mode);
        assert!(options.suppress_document_wrapper);
    }

    #[test]
    fn test_open_inputs_chains_files() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("mdhtml-main-{}-a.md", std::process::id()));
        let second = dir.join(format!("mdhtml-main-{}-b.md", std::process::id()));
        std::fs::write(&first, "# One\n").unwrap();
        std::fs::write(&second, "two\n").unwrap();

        let mut text = String::new();
        open_inputs(&[first.clone(), second.clone()])
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        std::fs::remove_file(&first).ok();
        std::fs::remove_file(&second).ok();

        assert_eq!(text, "# One\ntwo\n");
    }

    #[test]
    fn test_open_inputs_missing_file() {
        let missing = PathBuf::from("/nonexistent/mdhtml/input.md");
        assert!(open_inputs(&[missing]).is_err());
    }
}
