//! Errors raised at the host-facing edges (rule entry, preset loading).
//!
//! Rewriting and interpretation themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule key {0:?} must be a single symbol")]
    InvalidKey(String),

    #[error("rule body {body:?} for {key:?} may only contain letters, '+' and '-'")]
    InvalidBody { key: char, body: String },
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("preset rule error: {0}")]
    Rule(#[from] RuleError),
}
