//! Problem model

use serde::{Deserialize, Serialize};

use crate::constants::difficulties;

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label; unrecognized labels yield `None`
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            difficulties::EASY => Some(Self::Easy),
            difficulties::MEDIUM => Some(Self::Medium),
            difficulties::HARD => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "{}", difficulties::EASY),
            Self::Medium => write!(f, "{}", difficulties::MEDIUM),
            Self::Hard => write!(f, "{}", difficulties::HARD),
        }
    }
}
