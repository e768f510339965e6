use std::{fmt, sync::Arc};

use log::{Level, Log, Metadata, Record};

const TARGET: &str = "pointfield_core";

#[derive(Clone, Default)]
enum Sink {
    #[default]
    Disabled,
    Global,
    Injected(Arc<dyn Log>),
}

/// Optional diagnostics sink handed to components that log.
///
/// Logging is best-effort: a disabled logger drops every record and nothing
/// returned by a component depends on whether a record was written.
#[derive(Clone, Default)]
pub struct FieldLogger {
    sink: Sink,
}

impl fmt::Debug for FieldLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink {
            Sink::Disabled => "disabled",
            Sink::Global => "global",
            Sink::Injected(_) => "injected",
        };
        f.debug_struct("FieldLogger").field("sink", &sink).finish()
    }
}

impl FieldLogger {
    pub fn new(sink: Arc<dyn Log>) -> Self {
        FieldLogger {
            sink: Sink::Injected(sink),
        }
    }

    pub fn disabled() -> Self {
        FieldLogger::default()
    }

    /// Forwards to whatever logger the process installed through the `log` facade.
    pub fn global() -> Self {
        FieldLogger { sink: Sink::Global }
    }

    fn sink(&self, level: Level) -> Option<&dyn Log> {
        match &self.sink {
            Sink::Disabled => None,
            Sink::Global if level <= log::max_level() => Some(log::logger()),
            Sink::Global => None,
            Sink::Injected(sink) => Some(sink.as_ref()),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.sink(level).is_some_and(|sink| {
            sink.enabled(&Metadata::builder().level(level).target(TARGET).build())
        })
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink(level) else {
            return;
        };

        let record = Record::builder()
            .args(args)
            .level(level)
            .target(TARGET)
            .module_path_static(Some(module_path!()))
            .build();

        if sink.enabled(record.metadata()) {
            sink.log(&record);
        }
    }

    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }
}
