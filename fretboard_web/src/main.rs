// CLI entry point for the fretboard web server.
//
// Serves the fretboard page and the JSON theory API. See `routes.rs` for
// the endpoint list and `config.rs` for the environment variables.
//
// Usage:
//   fretboard [OPTIONS]
//     --host <HOST>        Bind address (default: 0.0.0.0)
//     --port <PORT>        Listen port (default: 8080, or $PORT)
//     --static-dir <DIR>   Static file directory (default: static)
//     --debug              Enable the /debug endpoint
//
// Log verbosity follows RUST_LOG (default "info").

use env_logger::Env;
use fretboard_web::config::{CliCommand, ServerConfig, parse_args, usage};
use fretboard_web::start_server;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::default().apply_env(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args, config) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Help) => {
            println!("{}", usage());
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    if config.debug {
        log::warn!("debug endpoint enabled; /debug exposes the process environment");
    }

    let (handle, _addr) = match start_server(config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to start server: {e}");
            std::process::exit(1);
        }
    };

    // The process exits on SIGINT/SIGTERM; nothing needs flushing.
    handle.wait();
}
