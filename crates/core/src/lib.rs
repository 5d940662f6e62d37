//! Core library for intellidb
//!
//! This crate implements the **Functional Core** of the intellidb
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! - **`intellidb_core`** (this crate): pure transformation functions with
//!   zero I/O
//! - **`intellidb`**: terminal prompting, schema probing, the network call
//!   to the generation service, filesystem writes, and orchestration (the
//!   Imperative Shell)
//!
//! All functions here are deterministic: same input always produces the
//! same output, with no side effects. They can be tested with simple
//! fixture data, no mocking required.
//!
//! # Module Organization
//!
//! - [`generate`]: request and prompt types, name normalization, prompt
//!   rendering, artifact file-name derivation, and the fallback rule stub

pub mod generate;
