//! # cv-site
//!
//! Leptos + WASM résumé site with a language (en/ru) switcher and a
//! light/dark theme toggle. Both preferences persist to `localStorage`; the
//! theme follows the OS color scheme until the user picks one.
//!
//! Browser glue sits behind the `csr` feature. Without it the crate builds
//! natively with in-memory storage so the preference logic can be tested.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod controller;
pub mod state;
pub mod util;
