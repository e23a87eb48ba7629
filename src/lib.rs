//! CardStyler — configuration-driven suppression of canvas embed-card chrome.
//!
//! Maintains a persisted selection of embed kinds (image, canvas, markdown)
//! and derives the set of style targets whose background/border treatment
//! should be suppressed on the document canvas.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
