//! # Armor Definitions

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::slot::ArmorSlot;

/// Mechanical consequence of wearing rival-team gear.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTeamEffect {
    /// `condition` or `penalty`.
    pub kind: String,
    /// Condition id or penalty magnitude.
    pub value: String,
}

/// Static properties of an armor piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorDef {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// The only slot this piece can be worn in.
    pub slot: ArmorSlot,
    /// Armor class bonus, non-negative.
    #[serde(default)]
    pub ac_bonus: i32,
    /// Maximum dexterity modifier allowed while worn. `None` imposes no cap.
    #[serde(default)]
    pub dex_cap: Option<i32>,
    /// Skill check penalty, non-positive.
    #[serde(default)]
    pub check_penalty: i32,
    /// Speed reduction in feet, non-negative.
    #[serde(default)]
    pub speed_penalty: i32,
    /// Minimum strength score to avoid penalties.
    #[serde(default)]
    pub strength_req: i32,
    /// Encumbrance.
    #[serde(default)]
    pub bulk: i32,
    /// Armor group, e.g. `leather`.
    pub group: String,
    /// Free-form traits.
    #[serde(default)]
    pub traits: Vec<String>,
    /// `gun`, `machete`, or empty.
    #[serde(default)]
    pub team_affinity: String,
    /// Effect applied when worn by the other team.
    #[serde(default)]
    pub cross_team_effect: Option<CrossTeamEffect>,
}

impl ArmorDef {
    /// Creates an armor piece with no penalties and no dex cap.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, slot: ArmorSlot, ac_bonus: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            slot,
            ac_bonus,
            dex_cap: None,
            check_penalty: 0,
            speed_penalty: 0,
            strength_req: 0,
            bulk: 0,
            group: "composite".to_string(),
            traits: Vec::new(),
            team_affinity: String::new(),
            cross_team_effect: None,
        }
    }

    /// Sets the dexterity cap.
    #[must_use]
    pub fn with_dex_cap(mut self, cap: i32) -> Self {
        self.dex_cap = Some(cap);
        self
    }

    /// Sets check and speed penalties.
    #[must_use]
    pub fn with_penalties(mut self, check_penalty: i32, speed_penalty: i32) -> Self {
        self.check_penalty = check_penalty;
        self.speed_penalty = speed_penalty;
        self
    }

    /// Sets the strength requirement.
    #[must_use]
    pub fn with_strength_req(mut self, strength_req: i32) -> Self {
        self.strength_req = strength_req;
        self
    }

    /// Checks every field rule and reports all violations at once.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` listing each failed rule.
    pub fn validate(&self) -> ContentResult<()> {
        let mut reasons = Vec::new();
        if self.id.is_empty() {
            reasons.push("id must not be empty".to_string());
        }
        if self.name.is_empty() {
            reasons.push("name must not be empty".to_string());
        }
        if self.ac_bonus < 0 {
            reasons.push("ac_bonus must be >= 0".to_string());
        }
        if self.check_penalty > 0 {
            reasons.push("check_penalty must be <= 0".to_string());
        }
        if self.speed_penalty < 0 {
            reasons.push("speed_penalty must be >= 0".to_string());
        }
        if self.group.is_empty() {
            reasons.push("group must not be empty".to_string());
        }
        if let Some(effect) = &self.cross_team_effect {
            if effect.kind != "condition" && effect.kind != "penalty" {
                reasons.push(format!(
                    "cross_team_effect.kind {:?} must be \"condition\" or \"penalty\"",
                    effect.kind
                ));
            }
            if effect.value.is_empty() {
                reasons.push("cross_team_effect.value must not be empty".to_string());
            }
        }
        ContentError::check("armor", &self.id, reasons)
    }
}
