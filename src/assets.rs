//! Visual and sound asset lookup
//!
//! Missing assets never fail a match: visuals fall back to a flat colour and
//! sounds become silent no-ops.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Opaque handle to a located asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHandle {
    pub id: u32,
    pub path: PathBuf,
}

/// Something that can locate named assets
pub trait AssetLoader {
    /// Returns None when the asset is absent
    fn load(&mut self, name: &str) -> Option<AssetHandle>;
}

/// Assets resolved against a directory on disk, with a lookup cache
#[derive(Debug)]
pub struct FsAssets {
    root: PathBuf,
    cache: HashMap<String, Option<AssetHandle>>,
    next_id: u32,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLoader for FsAssets {
    fn load(&mut self, name: &str) -> Option<AssetHandle> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        let path = self.root.join(name);
        let handle = if path.is_file() {
            let id = self.next_id;
            self.next_id += 1;
            log::debug!("Asset {} -> {}", name, path.display());
            Some(AssetHandle { id, path })
        } else {
            log::warn!("Asset missing: {}", path.display());
            None
        };
        self.cache.insert(name.to_string(), handle.clone());
        handle
    }
}

/// A drawable surface: a texture when available, otherwise a flat colour
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Texture(AssetHandle),
    Flat([f32; 3]),
}

impl Visual {
    pub fn resolve(loader: &mut dyn AssetLoader, name: &str, fallback: [f32; 3]) -> Self {
        match loader.load(name) {
            Some(handle) => Visual::Texture(handle),
            None => Visual::Flat(fallback),
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, Visual::Texture(_))
    }
}

/// Every visual the game scene uses
#[derive(Debug, Clone, PartialEq)]
pub struct SceneVisuals {
    pub earth: Visual,
    pub life_icon: Visual,
    pub galaxy: Visual,
    pub hazard: Visual,
    pub sun: Visual,
}

impl SceneVisuals {
    pub fn load(loader: &mut dyn AssetLoader) -> Self {
        let visuals = Self {
            earth: Visual::resolve(loader, "images/earth.jpg", [0.2, 0.4, 0.9]),
            life_icon: Visual::resolve(loader, "images/life_icon.png", [1.0, 0.2, 0.2]),
            galaxy: Visual::resolve(loader, "images/galaxy.jpg", [0.02, 0.02, 0.08]),
            hazard: Visual::resolve(loader, "images/alien.jpg", [0.3, 0.9, 0.3]),
            sun: Visual::resolve(loader, "images/sun.jpg", [1.0, 0.8, 0.2]),
        };
        log::info!("Scene visuals: {}/5 textured", visuals.textured_count());
        visuals
    }

    pub fn textured_count(&self) -> usize {
        [&self.earth, &self.life_icon, &self.galaxy, &self.hazard, &self.sun]
            .iter()
            .filter(|v| v.is_textured())
            .count()
    }
}
