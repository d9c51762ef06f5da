//! Device observers: subsystems that react to device changes.
//!
//! Wire them through [`Registry::observe_all`](crate::registry::Registry::observe_all)
//! or [`Registry::observe_kind`](crate::registry::Registry::observe_kind).

pub mod activity;
pub mod heating;

pub use activity::ActivityLogger;
pub use heating::HeatingStrategySelector;
