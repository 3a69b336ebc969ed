// Server configuration.
//
// Layered in three steps: `ServerConfig::default()`, then environment
// variables (`apply_env`), then command-line flags (`parse_args`). Later
// layers win. The binary does all three; tests usually build a config
// directly.
//
// Environment:
//   PORT                   Listen port
//   FRETBOARD_STATIC_DIR   Directory holding index.html and assets
//   FRETBOARD_DEBUG        "1"/"true"/"yes" enables the /debug endpoint

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Serve `/debug` (environment dump and route table).
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            static_dir: PathBuf::from("static"),
            debug: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run(ServerConfig),
    Help,
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl ServerConfig {
    /// Overlay environment variables read through `lookup`. Unparseable
    /// values are reported, not ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{port}'"))?;
        }
        if let Some(dir) = lookup("FRETBOARD_STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("FRETBOARD_DEBUG") {
            self.debug = is_truthy(&flag);
        }
        Ok(self)
    }
}

/// Parse command-line flags on top of `base`. `args` excludes the program
/// name. Uses plain matching; there are only a handful of flags.
pub fn parse_args(args: &[String], base: ServerConfig) -> Result<CliCommand, String> {
    let mut config = base;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--host" => {
                config.host = iter
                    .next()
                    .cloned()
                    .ok_or_else(|| "--host requires a value".to_string())?;
            }
            "--port" => {
                config.port = iter
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| "--port requires a valid port number".to_string())?;
            }
            "--static-dir" => {
                config.static_dir = iter
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| "--static-dir requires a path".to_string())?;
            }
            "--debug" => config.debug = true,
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(CliCommand::Run(config))
}

pub fn usage() -> &'static str {
    "Usage: fretboard [OPTIONS]

Options:
  --host <HOST>           Bind address (default: 0.0.0.0)
  --port <PORT>           Listen port (default: 8080, or $PORT)
  --static-dir <DIR>      Static file directory (default: static)
  --debug                 Enable the /debug endpoint
  --help, -h              Show this help"
}
