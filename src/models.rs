//! Frontend Models
//!
//! Data structures matching the remote character API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Life status of a character, as returned by the API (case-sensitive).
/// A value outside these three fails decoding of the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Alive")]
    Alive,
    #[serde(rename = "Dead")]
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    /// Display text, exactly as the API spells it
    pub fn label(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }

    /// Lower-cased label, used as the indicator's CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Dead => "dead",
            Status::Unknown => "unknown",
        }
    }
}

/// Character data structure (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub status: Status,
    pub species: String,
    /// Every other field the API returned, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the list endpoint. Only `results` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}

/// A delete that can still be undone: which character, and where it was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionRecord {
    pub id: u32,
    pub index: usize,
}
