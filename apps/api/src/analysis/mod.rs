//! Resume analysis: normalization, formatting checks, keyword scoring and the
//! HTTP surface that ties them to uploaded documents.

pub mod ai;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod linguistics;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod tfidf;
pub mod upload;
