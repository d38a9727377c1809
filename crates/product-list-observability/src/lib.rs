//! Observability for the product list widgets.
//!
//! This crate provides:
//! - `WidgetLogger` - Structured logging with widget and line item context
//! - `LogEntry` / `LogBuilder` - Entries and fluent construction
//!
//! Entries are emitted as `tracing` events under the `product_list` target;
//! the host application installs whatever subscriber it uses.

mod logging;

pub use logging::*;
