//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::fetch::{DEFAULT_AMOUNT, DEFAULT_ENDPOINT};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest batch the API serves in one request
pub const MAX_AMOUNT: u32 = 50;

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub endpoint: String,
    pub amount: u32,
    /// Explicit log file; `None` means the default location under the cache dir
    pub log_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            amount: DEFAULT_AMOUNT,
            log_file: None,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Trivia TUI - Chart a batch of trivia questions by category and difficulty");
    eprintln!();
    eprintln!("Usage: trivia-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --amount <N>       Number of questions to fetch, 1-{} (default: {})", MAX_AMOUNT, DEFAULT_AMOUNT);
    eprintln!("  --endpoint <URL>       Question API endpoint (default: {})", DEFAULT_ENDPOINT);
    eprintln!("  --log-file <PATH>      Write logs to PATH (default: <cache dir>/trivia-tui/trivia-tui.log)");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Up/k, Down/j           Move the category filter");
    eprintln!("  Home/g, End/G          Jump to the first or last category");
    eprintln!("  a                      Show all categories");
    eprintln!("  q, Esc                 Quit");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  trivia-tui                     # Fetch 50 questions");
    eprintln!("  trivia-tui -n 20               # Fetch 20 questions");
    eprintln!("  RUST_LOG=debug trivia-tui      # Verbose logging");
}

/// Parse CLI arguments, printing help or version and exiting when asked
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_arg_list(&args) {
        Ok(CliCommand::Run(config)) => Ok(config),
        Ok(CliCommand::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(CliCommand::Version) => {
            println!("trivia-tui {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            Err(e)
        }
    }
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse an argument list (without the program name)
pub fn parse_arg_list(args: &[String]) -> io::Result<CliCommand> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-n" | "--amount" => {
                let value = args.get(i + 1).ok_or_else(|| missing_value(arg))?;
                let amount: u32 = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid amount value: {}", value),
                    )
                })?;
                if !(1..=MAX_AMOUNT).contains(&amount) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Amount must be between 1 and {}: {}", MAX_AMOUNT, amount),
                    ));
                }
                config.amount = amount;
                i += 2;
            }
            "--endpoint" => {
                let value = args.get(i + 1).ok_or_else(|| missing_value(arg))?;
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Endpoint must be an http(s) URL: {}", value),
                    ));
                }
                config.endpoint = value.clone();
                i += 2;
            }
            "--log-file" => {
                let value = args.get(i + 1).ok_or_else(|| missing_value(arg))?;
                config.log_file = Some(PathBuf::from(value));
                i += 2;
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
    }

    Ok(CliCommand::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let command = parse_arg_list(&[]).unwrap();
        assert_eq!(command, CliCommand::Run(CliConfig::default()));

        let CliCommand::Run(config) = command else {
            panic!("expected run");
        };
        assert_eq!(config.amount, 50);
        assert_eq!(config.endpoint, "https://opentdb.com/api.php");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse_arg_list(&args(&[
            "-n",
            "20",
            "--endpoint",
            "http://localhost:8080/api.php",
            "--log-file",
            "/tmp/trivia.log",
        ]))
        .unwrap();

        assert_eq!(
            command,
            CliCommand::Run(CliConfig {
                endpoint: "http://localhost:8080/api.php".to_string(),
                amount: 20,
                log_file: Some(PathBuf::from("/tmp/trivia.log")),
            })
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_arg_list(&args(&["--help"])).unwrap(), CliCommand::Help);
        assert_eq!(parse_arg_list(&args(&["-V"])).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_amount_out_of_range() {
        for value in ["0", "51", "-3", "many"] {
            let err = parse_arg_list(&args(&["--amount", value])).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_parse_missing_value() {
        let err = parse_arg_list(&args(&["--endpoint"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("--endpoint"));
    }

    #[test]
    fn test_parse_rejects_non_http_endpoint() {
        let err = parse_arg_list(&args(&["--endpoint", "ftp://example.com"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_unknown_argument() {
        let err = parse_arg_list(&args(&["--category", "9"])).unwrap_err();
        assert!(err.to_string().contains("Unknown argument"));
    }
}
