// src/codec/mod.rs
//
// Serializes the draft configuration to and from the settings document: a
// JSON object with exactly four required top-level sections. Extra keys
// are ignored; a missing section rejects the whole document, and an
// import only ever replaces the draft as a whole.

use thiserror::Error;

use crate::config::DungeonConfig;

/// The four top-level sections a settings document must carry.
pub const REQUIRED_SECTIONS: [&str; 4] = [
    "floor_props",
    "dungeon_props",
    "generation_constants",
    "advanced_settings",
];

/// File extension settings documents are expected to use.
pub const SETTINGS_EXTENSION: &str = "json";

/// Everything that can go wrong on the import path, from file selection
/// down to schema checking. Only the most recent error is ever shown.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("only one settings file can be imported at a time")]
    MultipleFilesSelected,
    #[error("no settings file was selected")]
    NoFileSelected,
    #[error("settings files must end in .{SETTINGS_EXTENSION}")]
    WrongExtension,
    #[error("the file read was aborted")]
    ReadAborted,
    #[error("the file could not be read: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("the settings file could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("the settings file is missing its \"{0}\" section")]
    MissingSection(&'static str),
}

/// Serialize the draft configuration to a pretty-printed settings
/// document. Section order follows the struct; readers must not rely on
/// key order.
pub fn export_draft(draft: &DungeonConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(draft)
}

/// Parse a settings document into a complete configuration.
///
/// Fails with [`ImportError::Malformed`] when the content is not valid
/// JSON, and with [`ImportError::MissingSection`] when any of the four
/// required sections is absent. Unknown keys anywhere in the document are
/// ignored, and leaf fields missing from a present section fall back to
/// their defaults. On error the caller's draft is untouched; on success
/// the returned configuration replaces it wholesale.
pub fn import_draft(raw: &str) -> Result<DungeonConfig, ImportError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    for section in REQUIRED_SECTIONS {
        if value.get(section).is_none() {
            return Err(ImportError::MissingSection(section));
        }
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChallengeSubtype, FloorLayout, HiddenStairsType, MissionType};

    fn exotic_config() -> DungeonConfig {
        let mut config = DungeonConfig::default();
        config.floor_props.layout = FloorLayout::Beetle;
        config.floor_props.room_density = -12;
        config.floor_props.hidden_stairs_type = HiddenStairsType::SecretRoom;
        config.floor_props.room_flags.room_imperfections = true;
        config.dungeon_props.mission_destination.is_destination_floor = true;
        config.dungeon_props.mission_destination.mission =
            MissionType::ChallengeRequest(ChallengeSubtype::Suicune);
        config.generation_constants.merge_rooms_chance = 42;
        config.advanced_settings.fix_dead_end_validation_error = true;
        config
    }

    #[test]
    fn export_then_import_round_trips_field_for_field() {
        let config = exotic_config();
        let document = export_draft(&config).unwrap();
        let back = import_draft(&document).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn importing_the_same_document_twice_is_idempotent() {
        let document = export_draft(&exotic_config()).unwrap();
        let first = import_draft(&document).unwrap();
        let second = import_draft(&document).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = import_draft("not json at all {").unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
    }

    #[test]
    fn missing_section_is_a_schema_error() {
        let document = export_draft(&DungeonConfig::default()).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&document).unwrap();
        value.as_object_mut().unwrap().remove("generation_constants");

        let err = import_draft(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingSection("generation_constants")
        ));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let document = export_draft(&DungeonConfig::default()).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&document).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("color_scheme".into(), serde_json::json!("dusk"));

        let imported = import_draft(&value.to_string()).unwrap();
        assert_eq!(imported, DungeonConfig::default());
    }

    #[test]
    fn absent_leaf_fields_take_defaults() {
        let document = r#"{
            "floor_props": { "room_density": 2 },
            "dungeon_props": {},
            "generation_constants": {},
            "advanced_settings": {}
        }"#;

        let imported = import_draft(document).unwrap();
        assert_eq!(imported.floor_props.room_density, 2);
        assert_eq!(imported.floor_props.trap_density, 5);
        assert_eq!(imported.dungeon_props.n_floors_plus_one, 5);
    }
}
