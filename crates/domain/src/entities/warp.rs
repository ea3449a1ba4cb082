//! Warp records: the typed record players see and the stored shape it is read from.
//!
//! The persisted list is untyped JSON. Every entry is read into a [`StoredWarp`]
//! without loss (unknown fields and non-object values survive a rewrite), and
//! [`Warp::try_from`] is the single boundary that turns a stored entry into a
//! valid record or a [`WarpRejection`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;
use crate::value_objects::{DimensionId, Position, WarpName};

/// A valid, named teleport target.
#[derive(Debug, Clone, PartialEq)]
pub struct Warp {
    pub name: WarpName,
    pub position: Position,
    pub dimension: DimensionId,
    /// Icon path into the icon catalog, if one was chosen.
    pub icon: Option<String>,
}

impl Warp {
    pub fn new(name: WarpName, position: Position, dimension: DimensionId) -> Self {
        Self {
            name,
            position,
            dimension,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Why a stored entry is not a valid warp.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WarpRejection {
    #[error("entry is not a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` has the wrong type")]
    WrongType(&'static str),
    #[error("invalid name: {0}")]
    InvalidName(DomainError),
}

/// One entry of the persisted warp list, exactly as stored.
///
/// Every JSON object is a `Record`, whatever its field types; fields are read
/// leniently through the accessors. Unknown fields survive a rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredWarp {
    Record(Map<String, Value>),
    /// Anything that is not an object. Kept so a rewrite of the list does not
    /// drop it.
    Opaque(Value),
}

impl StoredWarp {
    fn fields(&self) -> Option<&Map<String, Value>> {
        match self {
            StoredWarp::Record(fields) => Some(fields),
            StoredWarp::Opaque(_) => None,
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields()?.get(key)?.as_str()
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.fields()?.get(key)?.as_f64()
    }

    /// The stored name, valid or not. `None` when absent or not a string.
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// The stored icon path; a non-string icon counts as no icon.
    pub fn icon(&self) -> Option<&str> {
        self.text("icon")
    }

    /// Exact `(name, x, y, z, dimension)` match against a valid warp.
    pub fn matches_target(&self, warp: &Warp) -> bool {
        self.name() == Some(warp.name.as_str())
            && self.number("x") == Some(warp.position.x)
            && self.number("y") == Some(warp.position.y)
            && self.number("z") == Some(warp.position.z)
            && self.text("dimension") == Some(warp.dimension.as_str())
    }

    fn required_text(&self, key: &'static str) -> Result<&str, WarpRejection> {
        let value = self.required(key)?;
        value.as_str().ok_or(WarpRejection::WrongType(key))
    }

    fn required_number(&self, key: &'static str) -> Result<f64, WarpRejection> {
        let value = self.required(key)?;
        value.as_f64().ok_or(WarpRejection::WrongType(key))
    }

    fn required(&self, key: &'static str) -> Result<&Value, WarpRejection> {
        let fields = self.fields().ok_or(WarpRejection::NotAnObject)?;
        match fields.get(key) {
            None | Some(Value::Null) => Err(WarpRejection::MissingField(key)),
            Some(value) => Ok(value),
        }
    }
}

impl TryFrom<&StoredWarp> for Warp {
    type Error = WarpRejection;

    fn try_from(stored: &StoredWarp) -> Result<Self, Self::Error> {
        let name = stored.required_text("name")?;
        let x = stored.required_number("x")?;
        let y = stored.required_number("y")?;
        let z = stored.required_number("z")?;
        let dimension = stored.required_text("dimension")?;
        let name = WarpName::new(name).map_err(WarpRejection::InvalidName)?;

        Ok(Warp {
            name,
            position: Position::new(x, y, z),
            dimension: DimensionId::new(dimension),
            icon: stored.icon().map(str::to_string),
        })
    }
}

impl From<&Warp> for StoredWarp {
    fn from(warp: &Warp) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::from(warp.name.as_str()));
        fields.insert("x".into(), coordinate(warp.position.x));
        fields.insert("y".into(), coordinate(warp.position.y));
        fields.insert("z".into(), coordinate(warp.position.z));
        fields.insert("dimension".into(), Value::from(warp.dimension.as_str()));
        if let Some(icon) = &warp.icon {
            fields.insert("icon".into(), Value::from(icon.as_str()));
        }
        StoredWarp::Record(fields)
    }
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole coordinates are written as JSON integers, so rounded positions stay
/// `10` rather than `10.0` on disk.
fn coordinate(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn home() -> Warp {
        Warp::new(
            WarpName::new("Home").unwrap(),
            Position::new(10.0, 64.0, -5.0),
            DimensionId::overworld(),
        )
        .with_icon("textures/blocks/bed_red")
    }

    #[test]
    fn stored_object_parses_as_record() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": "Home", "x": 10, "y": 64, "z": -5,
            "dimension": "minecraft:overworld", "icon": "textures/blocks/bed_red"
        }))
        .unwrap();
        assert_eq!(Warp::try_from(&stored).unwrap(), home());
    }

    #[test]
    fn missing_field_is_rejected() {
        let stored: StoredWarp =
            serde_json::from_value(json!({ "name": "Home", "x": 1, "y": 2 })).unwrap();
        assert_eq!(
            Warp::try_from(&stored),
            Err(WarpRejection::MissingField("z"))
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": " ", "x": 1, "y": 2, "z": 3, "dimension": "minecraft:overworld"
        }))
        .unwrap();
        assert!(matches!(
            Warp::try_from(&stored),
            Err(WarpRejection::InvalidName(_))
        ));
    }

    #[test]
    fn non_objects_are_kept_opaque() {
        let stored: StoredWarp = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(stored, StoredWarp::Opaque(json!(42)));
        assert_eq!(stored.name(), None);
        assert_eq!(Warp::try_from(&stored), Err(WarpRejection::NotAnObject));
    }

    #[test]
    fn non_string_icon_counts_as_absent() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": "Home", "x": 10, "y": 64, "z": -5,
            "dimension": "minecraft:overworld", "icon": 5
        }))
        .unwrap();
        assert!(matches!(stored, StoredWarp::Record(_)));

        let warp = Warp::try_from(&stored).unwrap();
        assert_eq!(warp.icon, None);
        assert!(stored.matches_target(&warp));
        assert_eq!(serde_json::to_value(&stored).unwrap()["icon"], json!(5));
    }

    #[test]
    fn wrongly_typed_coordinate_keeps_the_name_visible() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": "A", "x": "ten", "y": 0, "z": 0, "dimension": "minecraft:overworld"
        }))
        .unwrap();
        assert!(matches!(stored, StoredWarp::Record(_)));
        assert_eq!(stored.name(), Some("A"));
        assert_eq!(Warp::try_from(&stored), Err(WarpRejection::WrongType("x")));
    }

    #[test]
    fn null_field_counts_as_missing() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": "A", "x": 1, "y": 2, "z": 3, "dimension": null
        }))
        .unwrap();
        assert_eq!(
            Warp::try_from(&stored),
            Err(WarpRejection::MissingField("dimension"))
        );
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let original = json!({
            "name": "Home", "x": 1, "y": 2, "z": 3,
            "dimension": "minecraft:overworld", "color": "red"
        });
        let stored: StoredWarp = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&stored).unwrap(), original);
    }

    #[test]
    fn whole_coordinates_serialize_as_integers() {
        let stored = StoredWarp::from(&home());
        let text = serde_json::to_string(&stored).unwrap();
        assert!(text.contains("\"x\":10"));
        assert!(text.contains("\"z\":-5"));
        assert!(!text.contains("10.0"));
    }

    #[test]
    fn fractional_coordinates_keep_their_fraction() {
        let stored: StoredWarp = serde_json::from_value(json!({
            "name": "Legacy", "x": 1.5, "y": 2, "z": 3, "dimension": "minecraft:nether"
        }))
        .unwrap();
        let text = serde_json::to_string(&stored).unwrap();
        assert!(text.contains("\"x\":1.5"));
    }

    #[test]
    fn matches_target_requires_full_tuple() {
        let warp = home();
        let stored = StoredWarp::from(&warp);
        assert!(stored.matches_target(&warp));

        let mut moved = warp.clone();
        moved.position.x = 11.0;
        assert!(!stored.matches_target(&moved));

        let mut elsewhere = warp.clone();
        elsewhere.dimension = DimensionId::from(DimensionId::NETHER);
        assert!(!stored.matches_target(&elsewhere));

        let different_icon = warp.clone().with_icon("textures/items/apple");
        assert!(stored.matches_target(&different_icon));
    }
}
