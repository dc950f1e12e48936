use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Practitioner preferences persisted between sessions.
///
/// The JSON keys keep the historical French names so existing settings
/// files keep loading. The record is read once at session start and
/// overwritten wholesale on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PractitionerSettings {
    /// Default starch portion, grams.
    #[serde(rename = "Féculents")]
    pub starches_portion_g: f64,

    /// Default meat portion, grams.
    #[serde(rename = "Viande")]
    pub meat_portion_g: f64,

    /// Default fish portion, grams.
    #[serde(rename = "Poisson")]
    pub fish_portion_g: f64,

    /// Daily hydration target, litres.
    #[serde(rename = "Eau")]
    pub water_litres: f64,

    /// Free-form advice appended to every exported plan.
    #[serde(rename = "conseils_generaux")]
    pub general_advice: String,
}

impl Default for PractitionerSettings {
    fn default() -> Self {
        Self {
            starches_portion_g: 150.0,
            meat_portion_g: 125.0,
            fish_portion_g: 150.0,
            water_litres: 1.5,
            general_advice: String::new(),
        }
    }
}

/// Load settings, falling back to defaults when the file is absent or
/// corrupt. Corruption is logged, never fatal.
pub fn load_settings<P: AsRef<Path>>(path: P) -> PractitionerSettings {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return PractitionerSettings::default(),
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("settings file {} is corrupt ({}), using defaults", path.display(), e);
            PractitionerSettings::default()
        }
    }
}

/// Overwrite the settings file with the given record.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &PractitionerSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = PractitionerSettings::default();
        assert_eq!(settings.starches_portion_g, 150.0);
        assert_eq!(settings.meat_portion_g, 125.0);
        assert_eq!(settings.fish_portion_g, 150.0);
        assert_eq!(settings.water_litres, 1.5);
        assert!(settings.general_advice.is_empty());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = load_settings("no_such_settings.json");
        assert_eq!(settings.meat_portion_g, 125.0);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json at all").unwrap();

        let settings = load_settings(file.path());
        assert_eq!(settings.starches_portion_g, 150.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"Viande": 140}"#).unwrap();

        let settings = load_settings(file.path());
        assert_eq!(settings.meat_portion_g, 140.0);
        assert_eq!(settings.fish_portion_g, 150.0);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let file = NamedTempFile::new().unwrap();

        let settings = PractitionerSettings {
            water_litres: 2.0,
            general_advice: "Boire avant chaque repas.".to_string(),
            ..Default::default()
        };

        save_settings(file.path(), &settings).unwrap();
        let reloaded = load_settings(file.path());

        assert_eq!(reloaded.water_litres, 2.0);
        assert_eq!(reloaded.general_advice, "Boire avant chaque repas.");
    }

    #[test]
    fn test_french_keys_on_disk() {
        let file = NamedTempFile::new().unwrap();
        save_settings(file.path(), &PractitionerSettings::default()).unwrap();

        let raw = std::fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("\"Féculents\""));
        assert!(raw.contains("\"Eau\""));
    }
}
