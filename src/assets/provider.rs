//! Asset provider seam.
//!
//! Loading sprites from disk or a resource bundle is the host's job. The
//! board builder only asks for the two lists below.

use rustc_hash::FxHashSet;

use super::asset::{Asset, AssetId};

/// Source of face and back assets.
pub trait AssetProvider {
    /// All face assets available for pairs.
    fn face_assets(&self) -> Vec<Asset>;

    /// All back assets; one is picked and shared by every card.
    fn back_assets(&self) -> Vec<Asset>;
}

/// In-memory asset lists.
///
/// Duplicate ids are dropped on insert, so the pool always holds distinct
/// assets and the builder can rely on the pool size when checking for a
/// shortage.
///
/// ## Example
///
/// ```
/// use memory_pairs::assets::{AssetPool, AssetProvider};
///
/// let pool = AssetPool::numbered(10, 1);
/// assert_eq!(pool.face_assets().len(), 10);
/// assert_eq!(pool.back_assets().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetPool {
    faces: Vec<Asset>,
    backs: Vec<Asset>,
    ids: FxHashSet<AssetId>,
}

impl AssetPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with `faces` face assets named `face_N` followed by `backs`
    /// back assets named `back_N`, with sequential ids starting at 0.
    #[must_use]
    pub fn numbered(faces: u32, backs: u32) -> Self {
        let mut pool = Self::new();
        for i in 0..faces {
            pool.add_face(Asset::new(AssetId::new(i), format!("face_{i}")));
        }
        for i in 0..backs {
            pool.add_back(Asset::new(AssetId::new(faces + i), format!("back_{i}")));
        }
        pool
    }

    /// Add a face asset. Returns false if the id is already in the pool.
    pub fn add_face(&mut self, asset: Asset) -> bool {
        if !self.ids.insert(asset.id) {
            return false;
        }
        self.faces.push(asset);
        true
    }

    /// Add a back asset. Returns false if the id is already in the pool.
    pub fn add_back(&mut self, asset: Asset) -> bool {
        if !self.ids.insert(asset.id) {
            return false;
        }
        self.backs.push(asset);
        true
    }

    /// Add a face asset (builder pattern).
    #[must_use]
    pub fn with_face(mut self, asset: Asset) -> Self {
        self.add_face(asset);
        self
    }

    /// Add a back asset (builder pattern).
    #[must_use]
    pub fn with_back(mut self, asset: Asset) -> Self {
        self.add_back(asset);
        self
    }
}

impl AssetProvider for AssetPool {
    fn face_assets(&self) -> Vec<Asset> {
        self.faces.clone()
    }

    fn back_assets(&self) -> Vec<Asset> {
        self.backs.clone()
    }
}
