#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Pakapaka page behaviors.
//!
//! The server renders every page; this crate wires the handful of click
//! reactions the templates expect (navbar burger, flash dismissal, card
//! collapse, likes, password visibility). Everything DOM-free lives in
//! `core`, `config` and `i18n` so it can be tested natively; the wasm
//! layer binds it to the document.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod behaviors;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::{PageBindings, init_page_behaviors, run_app};
