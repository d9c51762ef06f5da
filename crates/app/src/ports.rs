//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the engine and the outside world.
//! They are defined here (in `app`) so that both the engine and whatever
//! renders its output can depend on them without circular dependencies.

pub mod log_sink;

pub use log_sink::LogSink;
