use clap::{Parser, Subcommand};
use encod3r::cli::{
    encode_payload, read_payload, show_all, show_all_json, show_methods, show_methods_json,
    EncodeOptions,
};
use encod3r::config::{CliOverrides, Config, FileConfig};
use encod3r::{CommandClipboard, Method, Result};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ENCOD3R_VERSION");
const PROFILE: &str = env!("ENCOD3R_PROFILE");
const GIT_HASH: &str = env!("ENCOD3R_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "encod3r")]
#[command(author, about = "Encode payloads: URL, HTML, base64, hex, octal, unicode, ROT13, mixed case", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Path to TOML config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payload with one method
    #[command(alias = "e")]
    Encode {
        /// Encoding method (defaults to the configured method, else url)
        #[arg(short, long, value_parser = parse_method)]
        method: Option<Method>,

        /// Also copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Do not print a trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,

        /// Payload (reads stdin when omitted)
        input: Option<String>,
    },

    /// Encode a payload with every method
    #[command(alias = "a")]
    All {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Payload (reads stdin when omitted)
        input: Option<String>,
    },

    /// List the available encoding methods
    #[command(alias = "m")]
    Methods {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn parse_method(s: &str) -> std::result::Result<Method, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logger(level: &str) {
    let _ = env_logger::Builder::new().parse_filters(level).try_init();
}

fn load_config(cli: &Cli, method: Option<Method>, copy: bool) -> Result<Config> {
    let file = match &cli.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let overrides = CliOverrides {
        method,
        copy: copy.then_some(true),
        log_level: cli.log_level.clone(),
    };
    Config::merge(file, overrides)
}

fn run(cli: Cli, command: Commands) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Encode {
            method,
            copy,
            no_newline,
            input,
        } => {
            let config = load_config(&cli, method, copy)?;
            init_logger(&config.log_level);
            debug!("config: {:?}", config);

            let payload = read_payload(input, io::stdin().lock())?;
            let options = EncodeOptions {
                method: config.default_method,
                copy: config.copy,
            };
            let mut clipboard = CommandClipboard::from_argv(&config.clipboard_command)?;
            let output = encode_payload(&payload, &options, &mut clipboard)?;

            stdout.write_all(&output)?;
            if !no_newline {
                stdout.write_all(b"\n")?;
            }
        }

        Commands::All { json, input } => {
            let config = load_config(&cli, None, false)?;
            init_logger(&config.log_level);

            let payload = read_payload(input, io::stdin().lock())?;
            if json {
                writeln!(stdout, "{}", show_all_json(&payload)?)?;
            } else {
                stdout.write_all(&show_all(&payload))?;
            }
        }

        Commands::Methods { json } => {
            let config = load_config(&cli, None, false)?;
            init_logger(&config.log_level);

            if json {
                writeln!(stdout, "{}", show_methods_json()?)?;
            } else {
                write!(stdout, "{}", show_methods())?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("encod3r {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command.take() {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(cli, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
