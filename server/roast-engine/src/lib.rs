//! PushLog Roast Engine: deterministic heuristics with optional Gemini enrichment.
//!
//! Ingests one GitHub account (profile, repos, commits, public events), runs
//! four independent analyzers, merges their counters into `AggregateStats`,
//! and returns a `RoastBundle` of 1..=5 roasts. Generative enrichment is tried
//! only when configured and always falls back to the deterministic roasts.
//!
//! No DB, no ambient configuration; "now" and credentials are passed in.

pub mod activity;
pub mod aggregate;
pub mod commits;
pub mod config;
pub mod emoji;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod gemini;
pub mod normalize;
pub mod profile;
pub mod prompt;
pub mod repos;
pub mod types;

pub use config::{Config, GeminiConfig};
pub use engine::{Analysis, RoastEngine};
pub use enrichment::{Enricher, Enrichment, NoEnricher, RoastContext};
pub use error::{EngineError, EnrichError};
pub use gemini::GeminiClient;
pub use types::{AggregateStats, InboundPayload, RoastBundle, RoastInput};
