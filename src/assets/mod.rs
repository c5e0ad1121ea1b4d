//! Face and back assets.
//!
//! ## Key Types
//!
//! - `AssetId`: Asset identity; face asset ids are the pair keys
//! - `Asset`: Identity, name and sprite bounds
//! - `AssetProvider`: Where the board builder gets its assets
//! - `AssetPool`: In-memory provider

pub mod asset;
pub mod provider;

pub use asset::{Asset, AssetId};
pub use provider::{AssetPool, AssetProvider};
