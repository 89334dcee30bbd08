//! CLI presentation layer.
//!
//! Two sinks implement the deploy event port: `HumanEventSink` for
//! interactive use and `JsonEventSink` for CI pipelines (`--json`).

pub mod glyphs;
pub mod human;
pub mod json;

pub use human::HumanEventSink;
pub use json::JsonEventSink;
