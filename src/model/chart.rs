//! Chart entity: an ordered set of buttons that may point at ranges

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::RangeStatsError;

/// `linkedItem` sentinel for a button that only shows a label
pub const LABEL_ONLY: &str = "label-only";
/// `linkedItem` sentinel for a button that leaves the chart
pub const EXIT: &str = "exit";

const NORMAL_KIND: &str = "normal";

/// Target of a normal button's `linkedItem`
///
/// The two sentinels are kept as their own variants so they can never be
/// mistaken for range identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkedItem {
    LabelOnly,
    Exit,
    Range(String),
}

impl LinkedItem {
    /// Parse a raw `linkedItem` value. Blank values are not a link at all.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            LABEL_ONLY => Some(LinkedItem::LabelOnly),
            EXIT => Some(LinkedItem::Exit),
            id => Some(LinkedItem::Range(id.to_string())),
        }
    }

    /// Range identifier, or `None` for the sentinels
    pub fn range_id(&self) -> Option<&str> {
        match self {
            LinkedItem::Range(id) => Some(id),
            LinkedItem::LabelOnly | LinkedItem::Exit => None,
        }
    }
}

/// Secondary link attached to a button
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkButton {
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(default)]
    pub target_range_id: Option<String>,
}

impl LinkButton {
    pub fn new(enabled: bool, target_range_id: impl Into<String>) -> Self {
        Self {
            enabled,
            target_range_id: Some(target_range_id.into()),
        }
    }

    /// Range this link contributes, if it is enabled and has a target
    pub fn target(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.target_range_id.as_deref().filter(|id| !id.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List where `null` entries are dropped and a `null` list is empty
fn skip_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}

/// Button kinds. Only normal buttons carry a `linkedItem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonKind {
    Normal { linked_item: Option<LinkedItem> },
    Other { kind: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawButton")]
pub struct Button {
    pub kind: ButtonKind,
    pub link_buttons: Vec<LinkButton>,
}

impl Button {
    /// Normal button linked to `linked_item` (a range id or a sentinel)
    pub fn normal(linked_item: &str) -> Self {
        Self {
            kind: ButtonKind::Normal {
                linked_item: LinkedItem::parse(linked_item),
            },
            link_buttons: Vec::new(),
        }
    }

    pub fn unlinked() -> Self {
        Self {
            kind: ButtonKind::Normal { linked_item: None },
            link_buttons: Vec::new(),
        }
    }

    pub fn other(kind: &str) -> Self {
        Self {
            kind: ButtonKind::Other {
                kind: Some(kind.to_string()),
            },
            link_buttons: Vec::new(),
        }
    }

    pub fn with_links(mut self, link_buttons: Vec<LinkButton>) -> Self {
        self.link_buttons = link_buttons;
        self
    }
}

/// Wire shape of a button before the kind is resolved
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawButton {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    linked_item: Option<String>,
    #[serde(default, deserialize_with = "skip_null_entries")]
    link_buttons: Vec<LinkButton>,
}

impl From<RawButton> for Button {
    fn from(raw: RawButton) -> Self {
        let kind = match raw.kind.as_deref() {
            Some(NORMAL_KIND) => ButtonKind::Normal {
                linked_item: raw.linked_item.as_deref().and_then(LinkedItem::parse),
            },
            _ => ButtonKind::Other { kind: raw.kind },
        };

        Button {
            kind,
            link_buttons: raw.link_buttons,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chart {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub buttons: Vec<Button>,
}

impl Chart {
    pub fn new(name: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            name: name.into(),
            buttons,
        }
    }

    /// Parse a chart document, rejecting anything that is not chart-shaped
    pub fn from_json(content: &str) -> Result<Self, RangeStatsError> {
        let invalid = |e: serde_json::Error| RangeStatsError::InvalidChart(e.to_string());

        // Derived struct visitors also accept the array form
        let value: Value = serde_json::from_str(content).map_err(invalid)?;
        if !value.is_object() {
            return Err(RangeStatsError::InvalidChart(
                "expected a chart object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(invalid)
    }

    pub fn load(path: &Path) -> Result<Self, RangeStatsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;
