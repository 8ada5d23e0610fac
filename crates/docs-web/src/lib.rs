//! Browser enhancements for the LifePlus API documentation site
//!
//! This crate augments the rendered API-docs page (Swagger UI) with:
//! - environment switching persisted to local storage
//! - per-endpoint SDK code samples in several languages
//! - a floating scroll-to-top control
//! - an auth-token quick-entry prompt
//! - a `fetch` timing logger
//!
//! Sample generation and environment classification are plain Rust and run
//! anywhere; the DOM wiring lives behind the `wasm` feature and is compiled
//! to WebAssembly for the docs page. None of the DOM code assumes the
//! expected elements exist.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod environment;
pub mod samples;

#[cfg(feature = "wasm")]
mod wasm;

pub use environment::{DocsEnvironment, DEFAULT_SERVER, STORAGE_KEY};
pub use samples::{generate_sample, SampleLanguage};
