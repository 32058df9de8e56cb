//! Token records: identity, combat attributes, and scene position.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BmError, BmResult};
use crate::geometry::ScenePoint;

/// Smallest allowed hit point total.
pub const HIT_POINTS_MIN: i32 = 0;
/// Largest allowed hit point total.
pub const HIT_POINTS_MAX: i32 = 1000;
/// Smallest allowed armor class.
pub const ARMOR_CLASS_MIN: i32 = 0;
/// Largest allowed armor class.
pub const ARMOR_CLASS_MAX: i32 = 100;
/// Hit points a shell should offer for a freshly placed token.
pub const DEFAULT_HIT_POINTS: i32 = 100;
/// Armor class a shell should offer for a freshly placed token.
pub const DEFAULT_ARMOR_CLASS: i32 = 10;

/// Unique identifier for every token in a session.
///
/// Assigned at creation, stable for the token's lifetime, and never reused:
/// an id the shell kept after a deletion stays unambiguously dead instead
/// of aliasing a later token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub Uuid);

impl TokenId {
    /// Generate a new random token ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A movable, attributed entity placed on the map.
///
/// Tokens are independent of fog state: a token on a hidden cell exists all
/// the same. The sprite path references an image asset owned by the shell;
/// the engine never loads or validates the bytes behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique, never-reused identifier.
    pub id: TokenId,
    /// Path to the token's image asset, owned by the shell.
    pub sprite_path: PathBuf,
    /// Display name, free text.
    pub name: String,
    /// Current hit points, in `HIT_POINTS_MIN..=HIT_POINTS_MAX`.
    pub hit_points: i32,
    /// Armor class, in `ARMOR_CLASS_MIN..=ARMOR_CLASS_MAX`.
    pub armor_class: i32,
    /// Scene-space position of the token's anchor point.
    pub position: ScenePoint,
}

/// Check a hit point total against its declared range.
///
/// Out-of-range values are rejected with [`BmError::InvalidAttribute`],
/// never clamped on the caller's behalf.
pub fn validate_hit_points(value: i32) -> BmResult<()> {
    if (HIT_POINTS_MIN..=HIT_POINTS_MAX).contains(&value) {
        Ok(())
    } else {
        Err(BmError::InvalidAttribute {
            attribute: "hit points",
            value,
            min: HIT_POINTS_MIN,
            max: HIT_POINTS_MAX,
        })
    }
}

/// Check an armor class against its declared range.
///
/// Out-of-range values are rejected with [`BmError::InvalidAttribute`],
/// never clamped on the caller's behalf.
pub fn validate_armor_class(value: i32) -> BmResult<()> {
    if (ARMOR_CLASS_MIN..=ARMOR_CLASS_MAX).contains(&value) {
        Ok(())
    } else {
        Err(BmError::InvalidAttribute {
            attribute: "armor class",
            value,
            min: ARMOR_CLASS_MIN,
            max: ARMOR_CLASS_MAX,
        })
    }
}
