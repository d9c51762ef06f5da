//! # homesim-app
//!
//! Application layer: the home registry, commands and their decorators, the
//! invoker, device observers, message routing and scenarios.
//!
//! ## Responsibilities
//! - Define the **port trait** adapters and renderers plug into:
//!   - `LogSink`: receives `system` and `chat` log entries
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `Journal`: append-only log store with a broadcast feed
//! - Orchestrate domain objects:
//!   - `Registry`: devices and users, unique by name
//!   - `Command` / `Invoker`: reversible operations with undo history
//!   - `AuthorizationWrapper` / `AuditWrapper`: command decorators
//!   - `HeatingStrategySelector` / `ActivityLogger`: device observers
//!   - `MessageRouter`: broadcast and direct chat delivery
//!   - `ScenarioOrchestrator`: "arrive home" and "leave home"
//!
//! ## Dependency rule
//! Depends on `homesim-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod invoker;
pub mod journal;
pub mod messaging;
pub mod observers;
pub mod ports;
pub mod registry;
pub mod scenario;
