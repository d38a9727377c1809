//! Structured logging with widget context.

use std::collections::BTreeMap;

use product_list_commerce::LoggingSettings;

/// `tracing` target of every widget log event.
pub const LOG_TARGET: &str = "product_list";

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl LogFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "human" | "text" => Some(Self::Human),
            _ => None,
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Widget that produced the entry, e.g. `quantity-selector`.
    pub widget: String,
    /// Position of the line item in the list.
    pub item_index: Option<usize>,
    /// Additional structured fields.
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format the extra fields as a JSON object.
    pub fn fields_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    /// Format the extra fields as `key=value` pairs.
    pub fn fields_human(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Widget context goes out as `tracing` fields. The free-form fields are
// keyed at runtime, so they travel as one pre-formatted `fields` value.
macro_rules! widget_event {
    ($level:expr, $entry:expr, $fields:expr) => {
        tracing::event!(
            target: LOG_TARGET,
            $level,
            widget = %$entry.widget,
            item_index = ?$entry.item_index,
            fields = %$fields,
            "{}",
            $entry.message
        )
    };
}

/// Structured logger carrying widget context.
#[derive(Debug, Clone)]
pub struct WidgetLogger {
    widget: String,
    item_index: Option<usize>,
    min_level: LogLevel,
    format: LogFormat,
}

impl WidgetLogger {
    /// Create a logger for a widget.
    pub fn new(widget: impl Into<String>) -> Self {
        Self {
            widget: widget.into(),
            item_index: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Create a logger from configuration. Unknown names keep the defaults.
    pub fn from_settings(widget: impl Into<String>, settings: &LoggingSettings) -> Self {
        let mut logger = Self::new(widget);
        if let Some(level) = LogLevel::parse(&settings.level) {
            logger.min_level = level;
        }
        if let Some(format) = LogFormat::parse(&settings.format) {
            logger.format = format;
        }
        logger
    }

    /// Set the line item position.
    pub fn with_item_index(mut self, index: usize) -> Self {
        self.item_index = Some(index);
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Build the entry for a message, or `None` when below the minimum level.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            widget: self.widget.clone(),
            item_index: self.item_index,
            fields,
        })
    }

    /// Format the extra fields of an entry in the configured output format.
    pub fn render_fields(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.fields_json(),
            LogFormat::Human => entry.fields_human(),
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if let Some(entry) = self.entry(level, message, fields) {
            self.dispatch(&entry);
        }
    }

    fn dispatch(&self, entry: &LogEntry) {
        let fields = self.render_fields(entry);

        match entry.level {
            LogLevel::Trace => widget_event!(tracing::Level::TRACE, entry, fields),
            LogLevel::Debug => widget_event!(tracing::Level::DEBUG, entry, fields),
            LogLevel::Info => widget_event!(tracing::Level::INFO, entry, fields),
            LogLevel::Warn => widget_event!(tracing::Level::WARN, entry, fields),
            LogLevel::Error => widget_event!(tracing::Level::ERROR, entry, fields),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a WidgetLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a WidgetLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Build the entry without emitting it.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        let logger = self.logger;
        if let Some(entry) = self.build() {
            logger.dispatch(&entry);
        }
    }
}

impl WidgetLogger {
    pub fn trace_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Trace, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    type Fields = BTreeMap<String, String>;

    /// Records the fields of every event it sees.
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Fields>>>);

    struct FieldVisitor<'a>(&'a mut Fields);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            fields.insert("target".to_string(), event.metadata().target().to_string());
            fields.insert("level".to_string(), event.metadata().level().to_string());
            event.record(&mut FieldVisitor(&mut fields));
            self.0.lock().unwrap().push(fields);
        }
    }

    fn record(emit: impl FnOnce()) -> Vec<Fields> {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        tracing::subscriber::with_default(subscriber, emit);
        let events = recorder.0.lock().unwrap().clone();
        events
    }

    #[test]
    fn test_min_level_filters() {
        let logger = WidgetLogger::new("quantity-selector");
        assert!(logger.entry(LogLevel::Debug, "hidden", BTreeMap::new()).is_none());
        assert!(logger.entry(LogLevel::Warn, "shown", BTreeMap::new()).is_some());
    }

    #[test]
    fn test_json_fields() {
        let mut logger = WidgetLogger::new("quantity-selector").with_item_index(2);
        logger.min_level = LogLevel::Debug;
        let entry = logger
            .debug_builder("quantity committed")
            .field_i64("value", 10)
            .field("modality", "free_text")
            .build()
            .unwrap();

        assert_eq!(entry.level, LogLevel::Debug);
        assert_eq!(entry.widget, "quantity-selector");
        assert_eq!(entry.item_index, Some(2));
        let json: serde_json::Value = serde_json::from_str(&logger.render_fields(&entry)).unwrap();
        assert_eq!(json["value"], 10);
        assert_eq!(json["modality"], "free_text");
    }

    #[test]
    fn test_human_fields() {
        let mut logger = WidgetLogger::new("manual-price");
        logger.format = LogFormat::Human;
        let entry = logger
            .info_builder("price submitted")
            .field_bool("changed", true)
            .field_i64("amount_cents", 990)
            .build()
            .unwrap();

        assert_eq!(logger.render_fields(&entry), "amount_cents=990 changed=true");
    }

    #[test]
    fn test_emit_records_tracing_fields() {
        let mut logger = WidgetLogger::new("quantity-selector").with_item_index(2);
        logger.min_level = LogLevel::Debug;

        let events = record(|| {
            logger
                .debug_builder("quantity committed")
                .field_i64("value", 10)
                .emit();
            logger.trace_builder("display resynchronized").emit();
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event["target"], LOG_TARGET);
        assert_eq!(event["level"], "DEBUG");
        assert_eq!(event["message"], "quantity committed");
        assert_eq!(event["widget"], "quantity-selector");
        assert_eq!(event["item_index"], "Some(2)");
        assert_eq!(event["fields"], r#"{"value":10}"#);
    }

    #[test]
    fn test_from_settings() {
        let settings = LoggingSettings {
            level: "TRACE".to_string(),
            format: "human".to_string(),
        };
        let logger = WidgetLogger::from_settings("quantity-selector", &settings);
        assert!(logger.entry(LogLevel::Trace, "x", BTreeMap::new()).is_some());
        assert_eq!(logger.format, LogFormat::Human);

        let bogus = LoggingSettings {
            level: "loud".to_string(),
            format: "xml".to_string(),
        };
        let logger = WidgetLogger::from_settings("quantity-selector", &bogus);
        assert!(logger.entry(LogLevel::Debug, "x", BTreeMap::new()).is_none());
        assert_eq!(logger.format, LogFormat::Json);
    }
}
