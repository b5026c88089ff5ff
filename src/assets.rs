//! Asset catalog and loader.
//!
//! The [`SpriteCatalog`] names every image the game uses, the file it comes
//! from and, for sprite sheets, the grid and the direction the art faces. A
//! built-in catalog matches the shipped art; dropping a `catalog.json` into
//! the asset directory replaces it.
//!
//! [`load_assets`] decodes every entry once before the game loop starts. Each
//! image is uploaded as a texture and, for sheets, reduced to an
//! [`AlphaMask`] kept in the [`SheetStore`]. Any failure is fatal.

use std::path::{Path, PathBuf};

use log::{debug, info};
use raylib::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::facing::Facing;
use crate::error::AssetError;
use crate::resources::sheetstore::{AlphaMask, SheetStore, SpriteSheet};
use crate::resources::texturestore::TextureStore;

/// File name of the optional catalog override inside the asset directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Texture and sheet keys used by the game code.
pub mod keys {
    pub const PLAYER: &str = "player";
    pub const PLAYER_ATTACK: &str = "player_attack";
    pub const RATATOUILLE: &str = "ratatouille";
    pub const RATATOUILLE_ATTACK: &str = "ratatouille_attack";
    pub const SKELETON: &str = "skeleton";
    pub const SKELETON_ATTACK: &str = "skeleton_attack";
    pub const ZOMBIE: &str = "zombie";
    pub const ZOMBIE_ATTACK: &str = "zombie_attack";
    pub const BOSS: &str = "boss";
    pub const BOSS_ATTACK: &str = "boss_attack";
    pub const MAP: &str = "map";
    pub const TITLE_BACKDROP: &str = "title_backdrop";
    pub const LOGO: &str = "logo";
    pub const HEART: &str = "heart";
    pub const HEART_BROKEN: &str = "heart_broken";
    pub const BUTTON: &str = "button";
    pub const BUTTON_PRESSED: &str = "button_pressed";
    pub const GAME_OVER: &str = "game_over";
    pub const VICTORY: &str = "victory";
}

fn default_colorkey() -> bool {
    true
}

/// An animated sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub key: String,
    pub file: String,
    pub columns: u32,
    pub rows: u32,
    /// Direction the unflipped art looks.
    #[serde(default)]
    pub facing: Facing,
    /// Make the colour of the top-left pixel transparent.
    #[serde(default = "default_colorkey")]
    pub colorkey: bool,
}

/// A whole-texture image: backdrops, HUD and buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub key: String,
    pub file: String,
    #[serde(default = "default_colorkey")]
    pub colorkey: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteCatalog {
    pub sheets: Vec<SheetEntry>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

fn sheet(key: &str, file: &str, columns: u32, facing: Facing) -> SheetEntry {
    SheetEntry {
        key: key.to_string(),
        file: file.to_string(),
        columns,
        rows: 1,
        facing,
        colorkey: true,
    }
}

fn image(key: &str, file: &str, colorkey: bool) -> ImageEntry {
    ImageEntry {
        key: key.to_string(),
        file: file.to_string(),
        colorkey,
    }
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            sheets: vec![
                sheet(keys::PLAYER, "Slime.png", 4, Facing::Left),
                sheet(keys::PLAYER_ATTACK, "slime_attack.png", 6, Facing::Right),
                sheet(keys::RATATOUILLE, "ratatuy.png", 4, Facing::Left),
                sheet(keys::RATATOUILLE_ATTACK, "ratatuy_attack.png", 4, Facing::Left),
                sheet(keys::SKELETON, "Skeleton.png", 4, Facing::Left),
                sheet(keys::SKELETON_ATTACK, "Skeleton_attack.png", 4, Facing::Left),
                sheet(keys::ZOMBIE, "Zombie.png", 4, Facing::Left),
                sheet(keys::ZOMBIE_ATTACK, "Zombie_attack.png", 5, Facing::Left),
                sheet(keys::BOSS, "Boss_slime.png", 4, Facing::Left),
                sheet(keys::BOSS_ATTACK, "Boss_slime_attack.png", 6, Facing::Left),
            ],
            images: vec![
                image(keys::MAP, "map.png", false),
                image(keys::TITLE_BACKDROP, "start_image.png", false),
                image(keys::LOGO, "Slime_rush.png", true),
                image(keys::HEART, "heart.png", true),
                image(keys::HEART_BROKEN, "heart_broken.png", true),
                image(keys::BUTTON, "not_pressed_button.png", true),
                image(keys::BUTTON_PRESSED, "pressed_button.png", true),
                image(keys::GAME_OVER, "Game_over.png", true),
                image(keys::VICTORY, "Win.png", true),
            ],
        }
    }
}

impl SpriteCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, AssetError> {
        serde_json::from_str(text).map_err(|source| AssetError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Catalog for `dir`: its `catalog.json` when present, the built-in one
/// otherwise.
pub fn load_catalog(dir: &Path) -> Result<SpriteCatalog, AssetError> {
    let path = dir.join(CATALOG_FILE);
    if !path.exists() {
        debug!("No {} in {:?}, using built-in catalog", CATALOG_FILE, dir);
        return Ok(SpriteCatalog::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|source| AssetError::CatalogRead {
        path: path.clone(),
        source,
    })?;
    let catalog = SpriteCatalog::from_json(&text, &path)?;
    info!("Loaded sprite catalog from {:?}", path);
    Ok(catalog)
}

/// Decode one image, applying the top-left colour key when asked.
fn read_image(name: &str, path: PathBuf, colorkey: bool) -> Result<Image, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            name: name.to_string(),
            path,
        });
    }
    let path_str = path.to_string_lossy().into_owned();
    let mut image = Image::load_image(&path_str).map_err(|e| AssetError::Decode {
        name: name.to_string(),
        path: path.clone(),
        details: e.to_string(),
    })?;
    if image.width <= 0 || image.height <= 0 {
        return Err(AssetError::Decode {
            name: name.to_string(),
            path,
            details: "image is empty".to_string(),
        });
    }
    if colorkey {
        let key = image.get_color(0, 0);
        image.color_replace(key, Color::BLANK);
    }
    Ok(image)
}

fn upload(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    name: &str,
    path: &Path,
    image: &Image,
) -> Result<Texture2D, AssetError> {
    rl.load_texture_from_image(thread, image)
        .map_err(|e| AssetError::Decode {
            name: name.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        })
}

/// Load every catalog entry from `dir`.
pub fn load_assets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    catalog: &SpriteCatalog,
) -> Result<(TextureStore, SheetStore), AssetError> {
    let mut textures = TextureStore::new();
    let mut sheets = SheetStore::new();

    for entry in &catalog.sheets {
        let path = dir.join(&entry.file);
        let image = read_image(&entry.key, path.clone(), entry.colorkey)?;
        let mask = AlphaMask::from_alpha(
            image.width as u32,
            image.height as u32,
            image.get_image_data().iter().map(|c| c.a),
        );
        let sheet = SpriteSheet::new(
            entry.key.as_str(),
            entry.columns,
            entry.rows,
            entry.facing,
            mask,
        )?;
        let texture = upload(rl, thread, &entry.key, &path, &image)?;
        textures.insert(sheet.key().clone(), texture);
        sheets.insert(sheet);
        debug!("Loaded sheet '{}' from {:?}", entry.key, path);
    }

    for entry in &catalog.images {
        let path = dir.join(&entry.file);
        let image = read_image(&entry.key, path.clone(), entry.colorkey)?;
        let texture = upload(rl, thread, &entry.key, &path, &image)?;
        textures.insert(entry.key.as_str(), texture);
        debug!("Loaded image '{}' from {:?}", entry.key, path);
    }

    info!(
        "Loaded {} sheets and {} textures from {:?}",
        sheets.len(),
        textures.map.len(),
        dir
    );
    Ok((textures, sheets))
}
