// Request routing.
//
// `route` maps a method and raw URL to a `Reply` without touching the
// network, so the whole API surface is testable in-process. `server.rs`
// turns the `Reply` into a tiny_http response.
//
// Every API route sanitizes its query through `fretboard_theory::params`
// before calling the engine, so bad or missing parameters produce the
// defaulted result (root C, type major) rather than an error.

use std::collections::BTreeMap;
use std::path::Path;

use fretboard_theory::params::{sanitize_chord_type, sanitize_root, sanitize_scale_type};
use fretboard_theory::{
    ChordType, PitchClass, ScaleType, all_triads, chord, generate_fretboard,
    generate_fretboard_with_intervals, scale, scale_triads,
};
use serde::Serialize;

use crate::config::ServerConfig;

/// Path and description of every route, served by `/debug`.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "index page"),
    ("/static/<file>", "static assets"),
    ("/api/fretboard", "note grid"),
    ("/api/fretboard/intervals", "note grid with intervals (root)"),
    ("/api/scale", "scale (root, type)"),
    ("/api/chord", "chord (root, type)"),
    ("/api/triads", "major/minor/dim/aug triads (root)"),
    ("/api/scale-triads", "triads per scale degree (root, type)"),
    ("/api/options", "valid note, scale, and chord names"),
    ("/debug", "environment and routes (debug mode only)"),
];

/// A fully formed response, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Reply {
                status,
                content_type: "application/json",
                body,
            },
            Err(e) => {
                log::error!("failed to serialize response: {e}");
                Reply::error(500, "internal error")
            }
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Reply {
            status,
            content_type: "application/json",
            body: serde_json::json!({ "error": message }).to_string().into_bytes(),
        }
    }
}

/// Decoded query string. Repeated keys keep the first value.
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Query {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Serialize)]
struct OptionsBody {
    notes: Vec<&'static str>,
    scales: Vec<&'static str>,
    chords: Vec<&'static str>,
}

#[derive(Serialize)]
struct DebugBody {
    env: BTreeMap<String, String>,
    routes: Vec<&'static str>,
}

/// Dispatch one request.
pub fn route(method: &str, url: &str, config: &ServerConfig) -> Reply {
    if method != "GET" {
        return Reply::error(405, "method not allowed");
    }

    let (path, raw_query) = url.split_once('?').unwrap_or((url, ""));
    let query = Query::parse(raw_query);
    let root = || sanitize_root(query.get("root"));

    match path {
        "/" | "/index.html" => static_file(&config.static_dir, "index.html"),
        "/api/fretboard" => Reply::json(200, &generate_fretboard()),
        "/api/fretboard/intervals" => Reply::json(200, &generate_fretboard_with_intervals(root())),
        "/api/scale" => {
            let scale_type = sanitize_scale_type(query.get("type"));
            Reply::json(200, &scale(root(), scale_type))
        }
        "/api/chord" => {
            let chord_type = sanitize_chord_type(query.get("type"));
            Reply::json(200, &chord(root(), chord_type))
        }
        "/api/triads" => Reply::json(200, &all_triads(root())),
        "/api/scale-triads" => {
            let scale_type = sanitize_scale_type(query.get("type"));
            Reply::json(200, &scale_triads(root(), scale_type))
        }
        "/api/options" => Reply::json(
            200,
            &OptionsBody {
                notes: PitchClass::all().map(PitchClass::name).collect(),
                scales: ScaleType::ALL.iter().map(|s| s.name()).collect(),
                chords: ChordType::ALL.iter().map(|c| c.name()).collect(),
            },
        ),
        "/debug" if config.debug => Reply::json(
            200,
            &DebugBody {
                env: std::env::vars_os()
                    .map(|(k, v)| {
                        (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned())
                    })
                    .collect(),
                routes: ROUTES.iter().map(|(p, _)| *p).collect(),
            },
        ),
        _ => match path.strip_prefix("/static/") {
            Some(file) => static_file(&config.static_dir, file),
            None => Reply::error(404, "not found"),
        },
    }
}

fn content_type_for(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

/// Serve `name` from `dir`. Names that could escape the directory are
/// treated as missing.
fn static_file(dir: &Path, name: &str) -> Reply {
    let escapes = name.is_empty()
        || name.starts_with('/')
        || name.contains('\\')
        || name.split('/').any(|part| part == "..");
    if escapes {
        return Reply::error(404, "not found");
    }
    match std::fs::read(dir.join(name)) {
        Ok(body) => Reply {
            status: 200,
            content_type: content_type_for(name),
            body,
        },
        Err(e) => {
            log::debug!("static file {name} unavailable: {e}");
            Reply::error(404, "not found")
        }
    }
}
