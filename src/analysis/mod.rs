//! # Interview Analysis Module
//!
//! Turns a reference to a recorded interview artifact into an analysis report:
//! scoring metrics, a written summary, coaching recommendations and a transcript.
//!
//! ## Key Components:
//! - **Models**: wire types for `POST /api/process` (request, response, transcript)
//! - **Pipeline**: the processing steps that produce a report
//!
//! ## Current behaviour:
//! The artifact is never downloaded and no signal processing or speech-to-text
//! runs. Every step yields the same fixed values, so identical requests always
//! get identical reports and only the log lines reflect the input.

pub mod models;      // Request/response data structures
pub mod pipeline;    // Report-building steps

pub use models::ProcessRequest;
pub use pipeline::AnalysisPipeline;
