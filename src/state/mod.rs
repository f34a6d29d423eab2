//! Client-side state owned by the site shell.
//!
//! DESIGN
//! ======
//! State structs are plain data; the controller mutates them and components
//! read them through Leptos signals.

pub mod prefs;
