//! # homesimd: home simulation daemon
//!
//! Composition root that wires the home together and runs the demo.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the journal, registry, observers, invoker and orchestrator
//! - Register the configured devices (virtual hardware for legacy devices)
//!   and users
//! - Drive the demo and render the journal as text or JSON lines
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

pub mod config;
pub mod demo;
pub mod home;
pub mod render;
