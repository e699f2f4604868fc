//! # Starting Loadouts
//!
//! New characters receive a kit assembled from `<dir>/<archetype>.toml`:
//!
//! ```toml
//! [base]
//! weapon = "machete_item"
//! currency = 50
//! consumables = [{ item = "bandage", quantity = 2 }]
//!
//! [base.armor]
//! torso = "leather_jacket"
//!
//! [team_gun]
//! weapon = "pistol_item"
//!
//! [team_machete]
//! currency = 75
//! ```
//!
//! Blocks are merged base -> team -> job override. A non-empty field replaces
//! the earlier value; armor maps merge per slot. All ids are item ids.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContentError, ContentResult};
use crate::loader::read_toml;
use crate::slot::ArmorSlot;

/// The two factions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Team Gun.
    Gun,
    /// Team Machete.
    Machete,
}

impl Team {
    /// Content identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Gun => "gun",
            Self::Machete => "machete",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Team {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gun" => Ok(Self::Gun),
            "machete" => Ok(Self::Machete),
            other => Err(ContentError::UnknownTeam(other.to_string())),
        }
    }
}

/// An item id plus quantity granted at character creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableGrant {
    /// Item definition id.
    #[serde(rename = "item")]
    pub item_id: String,
    /// Units granted.
    pub quantity: u32,
}

/// One block of a loadout file; also the shape of a job's override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutBlock {
    /// Weapon item id, empty for none.
    pub weapon: String,
    /// Armor item ids by slot.
    pub armor: BTreeMap<ArmorSlot, String>,
    /// Consumables; a non-empty list replaces the earlier one.
    pub consumables: Vec<ConsumableGrant>,
    /// Starting rounds; non-zero replaces the earlier value.
    pub currency: u32,
}

/// A job's `starting_inventory` override.
pub type StartingLoadoutOverride = LoadoutBlock;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArchetypeLoadoutFile {
    base: LoadoutBlock,
    team_gun: LoadoutBlock,
    team_machete: LoadoutBlock,
}

/// The fully merged starting kit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartingLoadout {
    /// Main-hand weapon item id.
    pub weapon: Option<String>,
    /// Armor item ids by slot.
    pub armor: BTreeMap<ArmorSlot, String>,
    /// Consumables to add to the backpack.
    pub consumables: Vec<ConsumableGrant>,
    /// Starting rounds.
    pub currency: u32,
}

impl StartingLoadout {
    /// Overlays `block` onto this loadout.
    pub fn apply(&mut self, block: &LoadoutBlock) {
        if !block.weapon.is_empty() {
            self.weapon = Some(block.weapon.clone());
        }
        for (slot, item_id) in &block.armor {
            self.armor.insert(*slot, item_id.clone());
        }
        if !block.consumables.is_empty() {
            self.consumables = block.consumables.clone();
        }
        if block.currency != 0 {
            self.currency = block.currency;
        }
    }
}

/// Loads `<dir>/<archetype>.toml` and merges base, team and override blocks.
///
/// # Arguments
///
/// * `dir` - Directory holding archetype loadout files
/// * `archetype` - Archetype id, also the file stem
/// * `team` - Team section to apply, if any
/// * `job_override` - Job-specific overrides applied last
///
/// # Errors
///
/// Returns `Io` if the archetype file is missing, `Parse` if it is malformed.
pub fn load_starting_loadout(
    dir: impl AsRef<Path>,
    archetype: &str,
    team: Option<Team>,
    job_override: Option<&StartingLoadoutOverride>,
) -> ContentResult<StartingLoadout> {
    let path = dir.as_ref().join(format!("{archetype}.toml"));
    let file: ArchetypeLoadoutFile = read_toml(&path)?;

    let mut loadout = StartingLoadout::default();
    loadout.apply(&file.base);
    match team {
        Some(Team::Gun) => loadout.apply(&file.team_gun),
        Some(Team::Machete) => loadout.apply(&file.team_machete),
        None => {}
    }
    if let Some(job) = job_override {
        loadout.apply(job);
    }

    debug!(archetype, team = ?team, weapon = ?loadout.weapon, "starting loadout merged");
    Ok(loadout)
}
