//! Jobmatch engine: backend client, canned matcher, and catalog data.
mod canned;
mod catalog;
mod client;
mod types;

pub use canned::{CannedMatchProvider, MatchProvider};
pub use catalog::{CatalogProvider, JobPosting, StaticCatalog};
pub use client::{AnalyzeBackend, AnalyzeRequest, BackendSettings, HttpAnalyzeBackend};
pub use types::{AnalysisReport, AnalyzeError};
