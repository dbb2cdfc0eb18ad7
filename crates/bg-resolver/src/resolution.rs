//! Result snapshots handed to the presentation layer.

use serde::Serialize;

/// The router half of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Primary {
    /// The router roll.
    pub roll: u32,
    /// The category the roll selected.
    pub category: String,
}

/// The extra roll pair added when an apprenticeship entry comes up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apprenticeship {
    /// Fresh router roll.
    pub router_roll: u32,
    /// Category selected by that roll.
    pub category_name: String,
    /// Fresh roll on that category's table.
    pub category_roll: u32,
    /// Profession that roll selected.
    pub profession_text: String,
}

/// A complete generated background.
///
/// Serializes with camelCase keys in declaration order; `apprenticeship`
/// is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Router roll.
    pub primary_roll: u32,
    /// Category from the router.
    pub category: String,
    /// Roll on the category table that produced `profession`.
    pub secondary_roll: u32,
    /// Profession text.
    pub profession: String,
    /// Extra roll pair, present only for apprenticeship entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apprenticeship: Option<Apprenticeship>,
}

impl Resolution {
    /// The router half of this resolution.
    pub fn primary(&self) -> Primary {
        Primary {
            roll: self.primary_roll,
            category: self.category.clone(),
        }
    }

    /// Pretty JSON for diagnostic display.
    pub fn to_debug_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
