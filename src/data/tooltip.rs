//! Hover tooltip content.
//!
//! The content never depends on which axis attributes are selected: it is
//! always the observation's name followed by a fixed list of reference
//! attributes (poverty and obesity by default).

use serde::{Deserialize, Serialize};

use crate::data::attributes::AttributeKey;
use crate::data::dataset::{Dataset, Observation};

/// Text shown when hovering one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl TooltipContent {
    /// All lines joined with newlines, title first.
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Which attributes a tooltip lists under the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipFormat {
    pub reference_attributes: Vec<AttributeKey>,
}

impl Default for TooltipFormat {
    fn default() -> Self {
        Self {
            reference_attributes: vec![AttributeKey::PovertyRate, AttributeKey::ObesityRate],
        }
    }
}

impl TooltipFormat {
    pub fn content(&self, observation: &Observation) -> TooltipContent {
        TooltipContent {
            title: observation.name.clone(),
            lines: self
                .reference_attributes
                .iter()
                .map(|&key| {
                    format!(
                        "{}: {}",
                        key.info().short_name,
                        key.format_value(observation.value(key))
                    )
                })
                .collect(),
        }
    }

    /// One entry per observation, in dataset order.
    pub fn contents(&self, dataset: &Dataset) -> Vec<TooltipContent> {
        dataset.iter().map(|o| self.content(o)).collect()
    }
}
