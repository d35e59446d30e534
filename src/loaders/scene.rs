use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::bitmap::BitmapData;
use crate::core::canvas::BlitMode;
use crate::math::Point;

/// On-disk scene description.
///
/// Bitmaps are inline `.`/`#` row art keyed by name; sprites reference them
/// by name and carry an optional velocity (pixels per frame, used by the
/// demo runner) and blit mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub bitmaps: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub sprites: Vec<SpriteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub bitmap: String,
    pub pos: [i32; 2],
    #[serde(default)]
    pub velocity: [i32; 2],
    #[serde(default)]
    pub mode: SpriteMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteMode {
    #[default]
    Opaque,
    Masked,
    Xor,
}

impl From<SpriteMode> for BlitMode {
    fn from(mode: SpriteMode) -> Self {
        match mode {
            SpriteMode::Opaque => BlitMode::Opaque,
            SpriteMode::Masked => BlitMode::Masked,
            SpriteMode::Xor => BlitMode::Xor,
        }
    }
}

/// One sprite placement, resolved against `SceneData::bitmaps`.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSpec {
    /// Index into `SceneData::bitmaps`.
    pub bitmap: usize,
    pub pos: Point,
    pub velocity: Point,
    pub mode: BlitMode,
}

/// Compiled scene: owned bitmap storage plus placements. Sprites built
/// from the specs borrow their pixel data from `bitmaps`.
#[derive(Debug, Clone)]
pub struct SceneData {
    pub width: u32,
    pub height: u32,
    pub bitmaps: Vec<BitmapData>,
    pub sprites: Vec<SpriteSpec>,
}

impl SceneData {
    pub fn bitmap(&self, spec: &SpriteSpec) -> &BitmapData {
        &self.bitmaps[spec.bitmap]
    }
}

/// Loads and compiles a JSON scene file.
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<SceneData> {
    let path = path.as_ref();
    println!("Loading scene: {:?}", path);

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;
    let scene =
        parse_scene(&source).with_context(|| format!("Failed to parse scene file: {:?}", path))?;

    println!(
        "Scene loaded: {}x{} px, {} bitmaps, {} sprites",
        scene.width,
        scene.height,
        scene.bitmaps.len(),
        scene.sprites.len()
    );
    Ok(scene)
}

/// Parses and compiles JSON scene source.
pub fn parse_scene(source: &str) -> Result<SceneData> {
    let file: SceneFile = serde_json::from_str(source).context("invalid scene JSON")?;
    ensure!(
        file.width > 0 && file.height > 0,
        "scene canvas must have non-zero extents"
    );

    let mut bitmaps = Vec::with_capacity(file.bitmaps.len());
    let mut indices = BTreeMap::new();

    for (name, rows) in &file.bitmaps {
        let data = BitmapData::from_rows(rows)
            .with_context(|| format!("invalid art for bitmap {name:?}"))?;
        indices.insert(name.as_str(), bitmaps.len());
        bitmaps.push(data);
    }

    let mut sprites = Vec::with_capacity(file.sprites.len());
    for entry in &file.sprites {
        let bitmap = *indices
            .get(entry.bitmap.as_str())
            .with_context(|| format!("sprite references unknown bitmap {:?}", entry.bitmap))?;

        sprites.push(SpriteSpec {
            bitmap,
            pos: Point::new(entry.pos[0], entry.pos[1]),
            velocity: Point::new(entry.velocity[0], entry.velocity[1]),
            mode: entry.mode.into(),
        });
    }

    Ok(SceneData {
        width: file.width,
        height: file.height,
        bitmaps,
        sprites,
    })
}
