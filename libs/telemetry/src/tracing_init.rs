use std::io::IsTerminal;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_FILTER, LogFormat, TelemetryConfig};
use crate::format::TaggedFormat;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber writing tagged lines to stderr. Later calls
/// are no-ops.
pub fn install(cfg: TelemetryConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_new(&cfg.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let ansi = cfg.format == LogFormat::Text && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer(&cfg, std::io::stderr, ansi))
        .try_init()
        .context("install tracing subscriber")?;

    INIT.set(()).ok();
    tracing::debug!(service = %cfg.service_name, format = ?cfg.format, "telemetry installed");
    Ok(())
}

/// Builds the tagged fmt layer for `cfg`, writing through `make_writer`.
pub fn fmt_layer<S, W>(
    cfg: &TelemetryConfig,
    make_writer: W,
    ansi: bool,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match cfg.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_ansi(ansi)
            .with_writer(make_writer)
            .event_format(TaggedFormat::new(
                cfg.tag.clone(),
                tracing_subscriber::fmt::format().with_target(false),
            ))
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(make_writer)
            .fmt_fields(JsonFields::new())
            .event_format(TaggedFormat::new(
                cfg.tag.clone(),
                tracing_subscriber::fmt::format()
                    .json()
                    .flatten_event(true),
            ))
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(cfg: &TelemetryConfig, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber =
            tracing_subscriber::registry().with(fmt_layer(cfg, captured.clone(), false));
        tracing::subscriber::with_default(subscriber, emit);
        captured.contents()
    }

    #[test]
    fn text_lines_start_with_tag() {
        let cfg = TelemetryConfig::new("mock-discord");
        let out = capture(&cfg, || {
            tracing::info!("Received webhook: hello");
            tracing::warn!("Error: broken");
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with("[MOCK SERVER] ")));
        assert!(lines[0].contains("Received webhook: hello"));
        assert!(lines[1].contains("WARN"));
    }

    #[test]
    fn custom_tag_is_used() {
        let mut cfg = TelemetryConfig::new("mock-discord");
        cfg.tag = "[DISCORD]".into();
        let out = capture(&cfg, || tracing::info!("Starting on port 8080"));
        assert!(out.starts_with("[DISCORD] "));
    }

    #[test]
    fn json_lines_are_tagged_objects() {
        let mut cfg = TelemetryConfig::new("mock-discord");
        cfg.format = LogFormat::Json;
        let out = capture(&cfg, || tracing::info!(port = 9090u16, "Starting on port 9090"));

        let line = out.lines().next().expect("one line");
        let json = line.strip_prefix("[MOCK SERVER] ").expect("tag prefix");
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["message"], "Starting on port 9090");
        assert_eq!(value["port"], 9090);
        assert_eq!(value["level"], "INFO");
    }
}
