//! # homesim-domain
//!
//! Pure domain model for the homesim device control engine.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (lights, locks, temperature sensors, adapted legacy
//!   hardware) and their transition contract
//! - Define the **Observer** capability devices notify on every change
//! - Define **Heating strategies** and how a reading selects one
//! - Define **Users**, **chat records** and **log entries**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Outbound boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod chat;
pub mod device;
pub mod event;
pub mod heating;
pub mod user;
