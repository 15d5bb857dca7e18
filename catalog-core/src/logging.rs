use std::{
    fs,
    str::FromStr,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::Metadata;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::{config::LoggingConfig, error::AppError};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Keep the returned guard alive
    /// until exit or buffered lines are lost.
    ///
    /// `echo_stderr` adds a second layer on stderr; only safe when the
    /// terminal is not in raw/alternate-screen mode.
    pub fn init_tracing(config: &LoggingConfig, echo_stderr: bool) -> Result<WorkerGuard, AppError> {
        fs::create_dir_all(&config.dir)?;

        // daily rolling file appender → logs/catalog.YYYY-MM-DD
        let file = rolling::daily(&config.dir, config.file_prefix.as_str());
        let (writer, guard) = tracing_appender::non_blocking(file);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(level_filter(&config.level)?);

        let stderr_layer = if echo_stderr {
            Some(
                fmt::layer()
                    .event_format(SeqFileMod)
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_filter(level_filter(&config.level)?),
            )
        } else {
            None
        };

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))?;

        Ok(guard)
    }
}

/// `RUST_LOG` wins; the configured level applies only when it is unset
/// or yields no directives.
fn level_filter(level: &str) -> Result<EnvFilter, AppError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    filter_from(level, &env)
}

fn filter_from(level: &str, env: &str) -> Result<EnvFilter, AppError> {
    let directive = Directive::from_str(level)
        .map_err(|e| AppError::Logging(format!("invalid log level '{level}': {e}")))?;
    Ok(EnvFilter::builder()
        .with_default_directive(directive)
        .parse_lossy(env))
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically‑increasing sequence number
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{Layer, Registry, filter::LevelFilter};

    #[test]
    fn test_level_filter_accepts_plain_level() {
        assert!(level_filter("debug").is_ok());
        assert!(level_filter("catalog_core=trace").is_ok());
    }

    #[test]
    fn test_level_filter_rejects_garbage() {
        let err = level_filter("catalog_core=loud").unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }

    fn debug_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || tracing::enabled!(tracing::Level::DEBUG))
    }

    #[test]
    fn test_env_level_overrides_configured_level() {
        let filter = filter_from("info", "debug").unwrap();
        assert_eq!(
            <EnvFilter as Layer<Registry>>::max_level_hint(&filter),
            Some(LevelFilter::DEBUG)
        );
        assert!(debug_enabled(filter_from("info", "debug").unwrap()));
    }

    #[test]
    fn test_configured_level_applies_without_env() {
        let filter = filter_from("info", "").unwrap();
        assert_eq!(
            <EnvFilter as Layer<Registry>>::max_level_hint(&filter),
            Some(LevelFilter::INFO)
        );
        assert!(!debug_enabled(filter_from("info", "").unwrap()));
    }
}
