//! Asset handles.
//!
//! The core never sees asset bytes. An `Asset` is an identity, a display
//! name, and the bounds of the sprite it stands for. Face assets double as
//! pair keys: the two cards of a pair carry the same face `AssetId`.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Unique identifier for an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u32);

impl AssetId {
    /// Create a new asset ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self.0)
    }
}

/// A face or back asset as seen by the core.
///
/// ## Example
///
/// ```
/// use memory_pairs::assets::{Asset, AssetId};
/// use memory_pairs::core::Vec2;
///
/// let fox = Asset::new(AssetId::new(3), "fox").with_size(Vec2::new(1.0, 1.4));
/// assert_eq!(fox.name, "fox");
/// assert_eq!(fox.size.y, 1.4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Identity; equal ids mean the same asset.
    pub id: AssetId,

    /// Human-readable name (cards take the name of their face asset).
    pub name: String,

    /// Bounds of the sprite in world units.
    pub size: Vec2,
}

impl Asset {
    /// Create an asset with unit bounds.
    pub fn new(id: AssetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size: Vec2::new(1.0, 1.0),
        }
    }

    /// Set the sprite bounds.
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}
