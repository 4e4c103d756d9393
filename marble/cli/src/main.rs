//! CLI for building Markdown snippets from plain text.
//!
//! ## Usage
//!
//! ```bash
//! # Wrap text
//! marble bold "To go boldly"
//!
//! # Escape Markdown syntax before formatting
//! marble --escape link "#RubyGems" https://rubygems.org/
//!
//! # Fenced code block from stdin
//! cat main.rs | marble code --lang rust
//!
//! # Lists
//! marble ol --start 3 one two three
//!
//! # Generate shell completions
//! source <(COMPLETE=bash marble)
//! ```

use std::io::{self, IsTerminal, Read};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use marble::HeaderLevel;

/// Build Markdown snippets: emphasis, code, links, lists, headers and escaping
#[derive(Parser)]
#[command(name = "marble", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Escape Markdown syntax in text arguments before formatting (URLs are left alone)
    #[arg(short, long, global = true)]
    escape: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Escape all Markdown syntax characters
    Escape {
        /// Text to escape ("-" reads stdin)
        text: Option<String>,
    },

    /// Embolden text
    Bold {
        /// Text to format ("-" reads stdin)
        text: Option<String>,
    },

    /// Italicise text
    #[command(visible_alias = "italics")]
    Italic {
        /// Text to format ("-" reads stdin)
        text: Option<String>,
    },

    /// Strike out text
    #[command(visible_alias = "strikethrough")]
    Strike {
        /// Text to format ("-" reads stdin)
        text: Option<String>,
    },

    /// Inline code, or a fenced block when --lang is given
    Code {
        /// Code to format ("-" reads stdin)
        text: Option<String>,

        /// Fence the code with this language tag (an empty tag fences without highlighting)
        #[arg(short, long, value_name = "LANG")]
        lang: Option<String>,
    },

    /// Single-line block quote
    Quote {
        /// Text to quote ("-" reads stdin)
        text: Option<String>,
    },

    /// Link text to a URL
    Link {
        /// Link text
        text: String,

        /// Link target
        url: String,
    },

    /// Image with alt text
    Image {
        /// Alternative text
        alt: String,

        /// Image location
        url: String,
    },

    /// Ordered list, one line per item
    #[command(visible_alias = "ordered-list")]
    Ol {
        /// Number of the first item
        #[arg(short, long, default_value_t = marble::block::DEFAULT_LIST_START)]
        start: usize,

        /// List items
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Unordered list, one line per item
    #[command(visible_alias = "unordered-list")]
    Ul {
        /// List items
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Horizontal rule
    #[command(visible_alias = "horizontal-rule")]
    Hr,

    /// Header of level 1-6
    Header {
        /// Header level (1-6)
        #[arg(short, long, default_value_t = 1)]
        level: u8,

        /// Header title ("-" reads stdin)
        title: Option<String>,
    },
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash marble)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh marble)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish marble | source

EXAMPLES:
  marble bold \"To go boldly\"                 # **To go boldly**
  marble -e italic \"Marble!\"                 # *Marble\\!*
  marble code --lang rust \"fn main() {}\"     # fenced block
  marble ul one two three                    # unordered list
  marble header -l 2 Usage                   # ## Usage
";

/// Initialize tracing subscriber based on verbosity level.
///
/// `RUST_LOG` takes precedence over `-v` when set.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,marble=info".to_string(),
            2 => "info,marble=debug".to_string(),
            _ => "debug,marble=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions(&shell_name);
    }

    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli)?;
    emit(&output);
    Ok(())
}

/// Produces the Markdown for the selected subcommand.
fn run(cli: &Cli) -> Result<String> {
    let prepare = |text: String| -> String {
        if cli.escape {
            marble::escape(&text).into_owned()
        } else {
            text
        }
    };

    let output = match &cli.command {
        Command::Escape { text } => {
            info!("escaping text");
            marble::escape(&read_text(text.as_deref())?).into_owned()
        }
        Command::Bold { text } => marble::bold(&prepare(read_text(text.as_deref())?)),
        Command::Italic { text } => marble::italic(&prepare(read_text(text.as_deref())?)),
        Command::Strike { text } => marble::strikethrough(&prepare(read_text(text.as_deref())?)),
        Command::Code { text, lang } => {
            debug!(lang = ?lang, "formatting code");
            marble::code(&prepare(read_text(text.as_deref())?), lang.as_deref())
        }
        Command::Quote { text } => marble::quote(&prepare(read_text(text.as_deref())?)),
        Command::Link { text, url } => marble::link(&prepare(text.clone()), url),
        Command::Image { alt, url } => marble::image(&prepare(alt.clone()), url),
        Command::Ol { start, items } => {
            debug!(start, count = items.len(), "building ordered list");
            marble::ordered_list_from(items.iter().cloned().map(prepare), *start)
        }
        Command::Ul { items } => {
            debug!(count = items.len(), "building unordered list");
            marble::unordered_list(items.iter().cloned().map(prepare))
        }
        Command::Hr => marble::hr().to_string(),
        Command::Header { level, title } => {
            let level = HeaderLevel::try_from(*level)?;
            marble::header(level, &prepare(read_text(title.as_deref())?))
        }
    };

    Ok(output)
}

/// Writes `output` to stdout, adding a final newline unless it already has one.
fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

/// Gets text from the positional argument or stdin.
fn read_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some("-") => read_from_stdin(),
        Some(text) => Ok(text.to_string()),
        None if !io::stdin().is_terminal() => read_from_stdin(),
        None => Err(eyre!(
            "No text provided. Use a positional argument or pipe to stdin."
        )),
    }
}

/// Reads all of stdin, dropping trailing line endings.
fn read_from_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .wrap_err("Failed to read from stdin")?;

    let content = content.trim_end_matches(['\r', '\n']);
    if content.is_empty() {
        return Err(eyre!("Empty input from stdin"));
    }

    Ok(content.to_string())
}

/// Generate shell completions.
fn generate_completions(shell_name: &str) -> Result<()> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            return Err(eyre!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            ));
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "marble", &mut io::stdout());
    Ok(())
}
