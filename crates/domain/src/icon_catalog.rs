//! Icon catalog - the selectable display icons for warps, grouped by category.
//!
//! The catalog is built once at startup and shared by reference. Entry 0 is the
//! universal fallback: lookups that find nothing answer with entry 0 instead of
//! failing, so a typo or a removed icon still renders something.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One selectable icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconEntry {
    pub name: String,
    pub translation_key: String,
    pub path: String,
    pub category: String,
}

impl IconEntry {
    pub fn new(name: &str, path: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            translation_key: format!("warps.icon.{}", name),
            path: path.to_string(),
            category: category.to_string(),
        }
    }

    fn text(&self, key: IconKey) -> &str {
        match key {
            IconKey::Name => &self.name,
            IconKey::TranslationKey => &self.translation_key,
            IconKey::Path => &self.path,
            IconKey::Category => &self.category,
        }
    }
}

/// Field an icon is looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    Name,
    TranslationKey,
    Path,
    Category,
}

/// Field returned by [`IconCatalog::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconField {
    Index,
    Name,
    TranslationKey,
    Path,
    Category,
}

/// Value of a resolved field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconValue<'a> {
    Index(usize),
    Text(&'a str),
}

/// Ordered, immutable icon table. Never empty.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    entries: Vec<IconEntry>,
}

impl IconCatalog {
    /// Build a catalog from entries in display order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `entries` is empty, since the first
    /// entry is the fallback for every failed lookup.
    pub fn new(entries: Vec<IconEntry>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::validation("Icon catalog needs at least one entry"));
        }
        Ok(Self { entries })
    }

    /// The icon set shipped with the warps pack.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn fallback(&self) -> &IconEntry {
        &self.entries[0]
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    /// Entries of one category, in catalog order.
    pub fn icons_in_category(&self, category: &str) -> Vec<&IconEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Index of the first entry whose `key` matches `value` case-insensitively,
    /// or 0 when none does.
    pub fn index_of(&self, key: IconKey, value: &str) -> usize {
        let wanted = value.to_lowercase();
        self.entries
            .iter()
            .position(|entry| entry.text(key).to_lowercase() == wanted)
            .unwrap_or(0)
    }

    /// Look up the entry whose `key` matches `value` (case-insensitive) and
    /// return its `field`. Falls back to entry 0 when nothing matches.
    pub fn resolve(&self, field: IconField, key: IconKey, value: &str) -> IconValue<'_> {
        let index = self.index_of(key, value);
        let entry = &self.entries[index];
        match field {
            IconField::Index => IconValue::Index(index),
            IconField::Name => IconValue::Text(&entry.name),
            IconField::TranslationKey => IconValue::Text(&entry.translation_key),
            IconField::Path => IconValue::Text(&entry.path),
            IconField::Category => IconValue::Text(&entry.category),
        }
    }

    /// Display path for a warp's stored icon, falling back to entry 0's path.
    pub fn path_for(&self, icon: Option<&str>) -> &str {
        match icon {
            Some(path) => &self.entries[self.index_of(IconKey::Path, path)].path,
            None => &self.fallback().path,
        }
    }

    /// Catalog entry for a name or a path, if one matches exactly (ignoring case).
    pub fn find(&self, name_or_path: &str) -> Option<&IconEntry> {
        let wanted = name_or_path.to_lowercase();
        self.entries.iter().find(|entry| {
            entry.name.to_lowercase() == wanted || entry.path.to_lowercase() == wanted
        })
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entries() -> Vec<IconEntry> {
    const TABLE: &[(&str, &str, &str)] = &[
        // Places
        ("bed", "textures/items/bed_red", "places"),
        ("door", "textures/items/door_wood", "places"),
        ("campfire", "textures/items/campfire", "places"),
        ("bell", "textures/items/villagebell", "places"),
        ("lantern", "textures/items/lantern", "places"),
        ("chest", "textures/blocks/chest_front", "places"),
        ("crafting_table", "textures/blocks/crafting_table_front", "places"),
        ("furnace", "textures/blocks/furnace_front_off", "places"),
        ("enchanting_table", "textures/blocks/enchanting_table_top", "places"),
        ("beacon", "textures/blocks/beacon", "places"),
        // Nature
        ("grass", "textures/blocks/grass_side_carried", "nature"),
        ("oak_sapling", "textures/blocks/sapling_oak", "nature"),
        ("flower", "textures/blocks/flower_rose", "nature"),
        ("cactus", "textures/blocks/cactus_side", "nature"),
        ("snow", "textures/blocks/snow", "nature"),
        ("sand", "textures/blocks/sand", "nature"),
        ("water", "textures/items/bucket_water", "nature"),
        ("lava", "textures/items/bucket_lava", "nature"),
        // Ores
        ("coal", "textures/items/coal", "ores"),
        ("iron", "textures/items/iron_ingot", "ores"),
        ("gold", "textures/items/gold_ingot", "ores"),
        ("diamond", "textures/items/diamond", "ores"),
        ("emerald", "textures/items/emerald", "ores"),
        ("redstone", "textures/items/redstone_dust", "ores"),
        ("lapis", "textures/items/dye_powder_blue", "ores"),
        ("netherite", "textures/items/netherite_ingot", "ores"),
        ("amethyst", "textures/items/amethyst_shard", "ores"),
        // Tools
        ("pickaxe", "textures/items/diamond_pickaxe", "tools"),
        ("axe", "textures/items/iron_axe", "tools"),
        ("sword", "textures/items/iron_sword", "tools"),
        ("bow", "textures/items/bow_standby", "tools"),
        ("fishing_rod", "textures/items/fishing_rod_uncast", "tools"),
        ("compass", "textures/items/compass_item", "tools"),
        ("map", "textures/items/map_filled", "tools"),
        // Dimensions
        ("ender_pearl", "textures/items/ender_pearl", "dimensions"),
        ("ender_eye", "textures/items/ender_eye", "dimensions"),
        ("obsidian", "textures/blocks/obsidian", "dimensions"),
        ("netherrack", "textures/blocks/netherrack", "dimensions"),
        ("end_stone", "textures/blocks/end_stone", "dimensions"),
        ("nether_star", "textures/items/nether_star", "dimensions"),
    ];

    TABLE
        .iter()
        .map(|(name, path, category)| IconEntry::new(name, path, category))
        .collect()
}
