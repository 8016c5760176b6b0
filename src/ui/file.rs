// src/ui/file.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use rfd::FileDialog;

use crate::codec::{self, ImportError, SETTINGS_EXTENSION};
use crate::config::DungeonConfig;

/// Default name offered when exporting a settings file.
const EXPORT_FILE_NAME: &str = "dungeoneer-settings.json";

/// Present the file picker and import the selected settings file.
///
/// The picker allows multi-select so that selecting more than one file
/// surfaces as its own error instead of silently taking the first.
pub fn import_settings_dialog() -> Result<DungeonConfig, ImportError> {
    let paths: Vec<PathBuf> = FileDialog::new()
        .add_filter("Settings Files", &[SETTINGS_EXTENSION])
        .pick_files()
        .ok_or(ImportError::NoFileSelected)?;

    match paths.as_slice() {
        [] => Err(ImportError::NoFileSelected),
        [path] => read_settings_file(path),
        _ => Err(ImportError::MultipleFilesSelected),
    }
}

/// Read and parse one settings file from disk.
pub fn read_settings_file(path: &Path) -> Result<DungeonConfig, ImportError> {
    let extension_ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SETTINGS_EXTENSION))
        .unwrap_or(false);
    if !extension_ok {
        return Err(ImportError::WrongExtension);
    }

    info!("Importing settings from {:?}", path);
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::Interrupted => ImportError::ReadAborted,
        _ => ImportError::ReadFailed(err),
    })?;

    codec::import_draft(&raw)
}

/// Present the save dialog and write the draft as a settings file.
/// Returns the chosen path, or `None` when the user cancelled.
pub fn export_settings_dialog(draft: &DungeonConfig) -> Result<Option<PathBuf>, String> {
    let Some(path) = FileDialog::new()
        .add_filter("Settings Files", &[SETTINGS_EXTENSION])
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
    else {
        info!("Settings export cancelled.");
        return Ok(None);
    };

    let document = codec::export_draft(draft)
        .map_err(|err| format!("Failed to serialize settings: {}", err))?;
    fs::write(&path, document)
        .map_err(|err| format!("Failed to write {}: {}", path.display(), err))?;

    info!("Exported settings to {:?}", path);
    Ok(Some(path))
}

/// Log an import failure the same way everywhere.
pub fn log_import_error(err: &ImportError) {
    error!("Settings import failed: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_extension_is_rejected_before_reading() {
        let err = read_settings_file(Path::new("floor-settings.toml")).unwrap_err();
        assert!(matches!(err, ImportError::WrongExtension));

        let err = read_settings_file(Path::new("no-extension")).unwrap_err();
        assert!(matches!(err, ImportError::WrongExtension));
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let path = std::env::temp_dir().join("dungeoneer-definitely-missing.json");
        let err = read_settings_file(&path).unwrap_err();
        assert!(matches!(err, ImportError::ReadFailed(_)));
    }

    #[test]
    fn valid_file_round_trips_through_disk() {
        let path = std::env::temp_dir().join("dungeoneer-settings-roundtrip.json");
        let config = DungeonConfig::default();
        fs::write(&path, codec::export_draft(&config).unwrap()).unwrap();

        let imported = read_settings_file(&path).unwrap();
        assert_eq!(imported, config);

        let _ = fs::remove_file(&path);
    }
}
