use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Event formatter that writes a fixed tag before delegating to `inner`, so
/// every line the subscriber emits starts with the tag.
#[derive(Debug, Clone)]
pub struct TaggedFormat<F> {
    tag: String,
    inner: F,
}

impl<F> TaggedFormat<F> {
    pub fn new(tag: impl Into<String>, inner: F) -> Self {
        Self {
            tag: tag.into(),
            inner,
        }
    }
}

impl<S, N, F> FormatEvent<S, N> for TaggedFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(&mut writer, "{} ", self.tag)?;
        self.inner.format_event(ctx, writer, event)
    }
}
