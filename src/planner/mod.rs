// src/planner/mod.rs

//! Regex-based schedule extraction. Known-weak heuristics kept behind this
//! module boundary so a structured time parser could replace them without
//! touching the request handler.

mod tasks;
mod time;

pub use tasks::{Task, build_tasks};
pub use time::extract_times;

use serde::Serialize;
use std::fmt;

/// Binary derived classification, computed from sentiment polarity and the
/// task-count threshold. Score magnitude plays no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emotion {
    Stressed,
    Balanced,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Stressed => write!(f, "Stressed"),
            Emotion::Balanced => write!(f, "Balanced"),
        }
    }
}
