//! Opt-in subscriber setup for the crate's `tracing` events.
//!
//! The library only *emits* events (lookup construction, memo hits and
//! misses); it never installs a subscriber on its own, so applications with
//! their own `tracing` setup see sequin's events through whatever they have
//! configured. For quick inspection without that wiring, enable the
//! `tracing-subscriber` cargo feature and call [`init`] once at startup.
//! [`init`] does nothing unless logging is requested through the
//! environment:
//!
//! - `SEQUIN_DEBUG` set to `true`, `1`, or `yes` enables debug-level output
//! - `SEQUIN_LOG_LEVEL` overrides the level (`trace`, `debug`, `info`,
//!   `warn`, `error`)
//! - `SEQUIN_LOG_FORMAT` selects `json` (default), `compact`, or `pretty`
//!
//! ```rust,no_run
//! sequin::logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Output format for the optional subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("compact") => Self::Compact,
            Some("pretty") => Self::Pretty,
            _ => Self::Json,
        }
    }
}

fn debug_enabled(value: Option<&str>) -> bool {
    matches!(
        value.map(str::to_lowercase).as_deref(),
        Some("true" | "1" | "yes")
    )
}

fn level(requested: Option<&str>, debug: bool) -> &'static str {
    if let Some(requested) = requested {
        let requested = requested.to_lowercase();
        for candidate in LEVELS.iter().copied() {
            if requested == candidate {
                return candidate;
            }
        }
    }
    if debug { "debug" } else { "warn" }
}

/// Install a subscriber for sequin's events, if the environment asks for one.
///
/// Call once at startup; later calls are no-ops. Without the
/// `tracing-subscriber` feature, or with neither `SEQUIN_DEBUG` nor
/// `SEQUIN_LOG_LEVEL` set, this does nothing at all, so it is safe to leave
/// in release binaries.
pub fn init() {
    INIT.call_once(|| {
        let debug = debug_enabled(env::var("SEQUIN_DEBUG").ok().as_deref());
        let requested = env::var("SEQUIN_LOG_LEVEL").ok();
        if !debug && requested.is_none() {
            return;
        }
        install(
            level(requested.as_deref(), debug),
            LogFormat::parse(env::var("SEQUIN_LOG_FORMAT").ok().as_deref()),
        );
    });
}

#[cfg(feature = "tracing-subscriber")]
fn install(level: &str, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only this crate's events; the host application's targets are untouched.
    let filter = EnvFilter::try_new(format!("sequin={level}"))
        .unwrap_or_else(|_| EnvFilter::new("sequin=warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
    tracing::debug!(level, ?format, "subscriber installed");
}

#[cfg(not(feature = "tracing-subscriber"))]
fn install(_level: &str, _format: LogFormat) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_accepts_common_truthy_spellings() {
        assert!(debug_enabled(Some("true")));
        assert!(debug_enabled(Some("1")));
        assert!(debug_enabled(Some("YES")));
        assert!(!debug_enabled(Some("0")));
        assert!(!debug_enabled(Some("on")));
        assert!(!debug_enabled(None));
    }

    #[test]
    fn test_level_override_beats_debug_flag() {
        assert_eq!(level(Some("TRACE"), false), "trace");
        assert_eq!(level(Some("error"), true), "error");
    }

    #[test]
    fn test_unrecognized_level_falls_back_by_debug_flag() {
        assert_eq!(level(Some("loud"), true), "debug");
        assert_eq!(level(Some("loud"), false), "warn");
        assert_eq!(level(None, true), "debug");
        assert_eq!(level(None, false), "warn");
    }

    #[test]
    fn test_format_defaults_to_json() {
        assert_eq!(LogFormat::parse(None), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("Pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("compact")), LogFormat::Compact);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Json);
    }
}
