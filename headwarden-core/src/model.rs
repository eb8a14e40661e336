use crate::catalog::HeaderSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Grade::A,
            65..=79 => Grade::B,
            45..=64 => Grade::C,
            25..=44 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-header line of an analysis, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSummary {
    pub name: String,
    pub present: bool,
    pub description: String,
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl HeaderSummary {
    pub fn from_spec(spec: &HeaderSpec, present: bool) -> Self {
        Self {
            name: spec.name.to_string(),
            present,
            description: spec.description.to_string(),
            weight: spec.weight,
            aliases: spec.aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Presence by canonical header name. Ordered so serialization is stable.
    pub headers: BTreeMap<String, bool>,
    pub score: u8,
    pub grade: Grade,
    pub summary: Vec<HeaderSummary>,
    pub url: String,
}

impl AnalysisResult {
    pub fn missing(&self) -> impl Iterator<Item = &HeaderSummary> {
        self.summary.iter().filter(|h| !h.present)
    }

    pub fn present_count(&self) -> usize {
        self.summary.iter().filter(|h| h.present).count()
    }
}
