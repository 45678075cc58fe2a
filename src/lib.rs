//! Reactive presenter pipeline for a keyword search screen.
//!
//! A view sends events into its presenter's bus, the presenter drives an
//! asynchronous use case and publishes `items` / `error` state fields, and a
//! router turns navigation intents into screens presented on the host.

pub mod cli;
pub mod config;
pub mod contracts;
pub mod data;
pub mod logging;
pub mod reactive;
pub mod search;
pub mod ui;
