//! studydrill-core — document parsing, question generation, and the quiz
//! session engine.
//!
//! This crate defines the fundamental data model and pipeline that the
//! entire studydrill system builds on: parse study documents into concepts,
//! generate question batches, drive quiz sessions, and aggregate reports.

pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod shuffle;
pub mod statistics;
pub mod traits;
