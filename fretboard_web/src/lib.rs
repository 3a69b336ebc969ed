// fretboard_web — JSON API and static page server for the fretboard engine.
//
// A thin layer over `fretboard_theory`: it parses and sanitizes query
// parameters, calls the engine, and serializes the results. No music logic
// lives here.
//
// Module overview:
// - `config.rs`: `ServerConfig` plus environment and command-line layering.
// - `routes.rs`: URL dispatch to engine calls, static files, and the debug
//                endpoint. Pure function from request to `Reply`.
// - `server.rs`: tiny_http listener on a background thread with a stop
//                handle; converts `Reply` into HTTP responses.
//
// The binary (`main.rs`) wires logging and configuration, then blocks on
// the server thread. Tests embed the server via `start_server`.

pub mod config;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{ServerHandle, start_server};
