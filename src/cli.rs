//! Command-line interface for mdhtml.

use clap::Parser;
use mdhtml_config::Config;
use std::ffi::OsString;
use std::path::PathBuf;

/// mdhtml - Translate Markdown headings to HTML as the input streams in.
///
/// Reads Markdown from files or stdin, writes HTML to stdout and
/// warnings and errors to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "mdhtml",
    author = "mdhtml Contributors",
    version,
    about = "Translate Markdown headings to HTML as the input streams in",
    after_help = "Examples:\n  \
                  cat notes.md | mdhtml\n  \
                  mdhtml --nodoc intro.md body.md\n  \
                  mdhtml --debug notes.md > trace.json"
)]
pub struct Cli {
    /// Input files, read in order as one document (reads stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write a JSON trace of every parser transition instead of HTML
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Omit the HTML document preamble and postamble
    #[arg(short = 'n', long = "nodoc")]
    pub nodoc: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Document title for the preamble
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.debug {
            config.output.trace = true;
        }
        if self.nodoc {
            config.output.no_doc = true;
        }
        if let Some(ref title) = self.title {
            config.document.title = title.clone();
        }
    }
}

/// Accept the single-dash `-debug` and `-nodoc` spellings.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-debug") => OsString::from("--debug"),
            Some("-nodoc") => OsString::from("--nodoc"),
            _ => arg,
        })
        .collect()
}

/// Show paths information.
///
/// The config file is created with defaults if it does not exist yet.
pub fn show_paths() {
    let config_path = match Config::ensure_config_file() {
        Ok(p) => p.display().to_string(),
        Err(e) => format!("(not found: {})", e),
    };

    println!("paths:");
    println!("  config                {}", config_path);
}
