//! WearShop Core — navigation and state-passing for the store demo.
//!
//! This crate contains everything with structure in the app:
//! - Typed route table with a percent-encoded path codec
//! - Navigation controller (current route + back-stack + transition gate)
//! - Modal dialog state machine with ok/cancel callback wiring
//! - Transient notice types
//! - Download service boundary (trait + structured errors)
//! - The static demo catalog the screens consume
//!
//! No terminal, file, or network I/O lives here; the TUI shell owns all of
//! that.

pub mod catalog;
pub mod dialog;
pub mod download;
pub mod nav;
pub mod notice;
pub mod route;
