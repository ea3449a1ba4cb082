//! Engine settings, read from the environment.
//!
//! | Variable             | Default                 |
//! |----------------------|-------------------------|
//! | `WARPS_STORE_PATH`   | `world_properties.json` |
//! | `WARPS_PROPERTY_KEY` | `warps`                 |
//! | `WARPS_TICK_MS`      | `50`                    |
//! | `WARPS_ITEM_ID`      | `warps:warp_stone`      |

use std::path::PathBuf;

use chrono::Duration;

pub const DEFAULT_STORE_PATH: &str = "world_properties.json";
pub const DEFAULT_PROPERTY_KEY: &str = "warps";
pub const DEFAULT_TICK_MS: i64 = 50;
pub const DEFAULT_ITEM_ID: &str = "warps:warp_stone";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// File backing the world-scoped property store.
    pub store_path: PathBuf,
    /// Property key holding the warp list.
    pub property_key: String,
    /// Length of one scheduling tick; the item debounce lasts one tick.
    pub tick: Duration,
    /// Item type that opens the warp menus.
    pub item_id: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            property_key: DEFAULT_PROPERTY_KEY.to_string(),
            tick: Duration::milliseconds(DEFAULT_TICK_MS),
            item_id: DEFAULT_ITEM_ID.to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = match lookup("WARPS_TICK_MS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(value = %raw, "Invalid WARPS_TICK_MS, using default");
                    DEFAULT_TICK_MS
                }
            },
            None => DEFAULT_TICK_MS,
        };

        Self {
            store_path: lookup("WARPS_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            property_key: lookup("WARPS_PROPERTY_KEY")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.property_key),
            tick: Duration::milliseconds(tick_ms),
            item_id: lookup("WARPS_ITEM_ID").unwrap_or(defaults.item_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppSettings::from_lookup(lookup(&[])), AppSettings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = AppSettings::from_lookup(lookup(&[
            ("WARPS_STORE_PATH", "/srv/world/props.json"),
            ("WARPS_PROPERTY_KEY", "server_warps"),
            ("WARPS_TICK_MS", "100"),
            ("WARPS_ITEM_ID", "custom:stone"),
        ]));
        assert_eq!(settings.store_path, PathBuf::from("/srv/world/props.json"));
        assert_eq!(settings.property_key, "server_warps");
        assert_eq!(settings.tick, Duration::milliseconds(100));
        assert_eq!(settings.item_id, "custom:stone");
    }

    #[test]
    fn bad_tick_falls_back() {
        let settings = AppSettings::from_lookup(lookup(&[("WARPS_TICK_MS", "soon")]));
        assert_eq!(settings.tick, Duration::milliseconds(DEFAULT_TICK_MS));
        let settings = AppSettings::from_lookup(lookup(&[("WARPS_TICK_MS", "-5")]));
        assert_eq!(settings.tick, Duration::milliseconds(DEFAULT_TICK_MS));
    }

    #[test]
    fn blank_property_key_falls_back() {
        let settings = AppSettings::from_lookup(lookup(&[("WARPS_PROPERTY_KEY", "  ")]));
        assert_eq!(settings.property_key, DEFAULT_PROPERTY_KEY);
    }
}
