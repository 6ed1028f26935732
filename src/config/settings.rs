//! Configuration settings for Nevn.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default keyword list tracked across episodes.
///
/// Keywords are matched as literal case-insensitive substrings, so entries
/// with punctuation ("62%", "$13 Vol.") must appear verbatim in a transcript.
pub(crate) const DEFAULT_KEYWORDS: &[&str] = &[
    "Data Center",
    "$13 Vol.",
    "62%",
    "Buy Yes",
    "78¢",
    "Buy No",
    "55¢",
    "Audit",
    "$0 Vol.",
    "43%",
    "Sanders",
    "Trump",
    "Biden",
    "Kamala",
    "Elon",
    "Musk",
    "Gavin",
    "Newsom",
    "Epstein",
    "Tesla",
    "SpaceX",
    "Nvidia",
    "DeepSeek",
    "Microsoft",
    "Google",
    "Gemini",
    "California",
    "New York",
    "China",
    "Iran",
    "Israel",
    "Nuclear",
    "Tariff",
    "Supreme Court",
    "Bitcoin",
    "Crypto",
];

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub keywords: KeywordSettings,
    pub transcript: TranscriptSettings,
    pub report: ReportSettings,
    pub chart: ChartSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory where reports and charts are written.
    pub output_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// The keyword list tracked for a run.
///
/// Fixed at startup and never mutated during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Keywords to track, in priority order (order is used for tie-breaking
    /// in the summary and for chart row ordering).
    pub track: Vec<String>,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            track: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Transcript fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Caption language to fetch.
    pub language: String,
    /// Prefer manually created subtitles over automatic captions.
    pub prefer_manual: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            prefer_manual: true,
        }
    }
}

/// JSON report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// File name for the JSON results.
    pub results_file: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            results_file: "analysis_results.json".to_string(),
        }
    }
}

/// Chart output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Whether charts are rendered at all.
    pub enabled: bool,
    /// File name for the mention timeline chart.
    pub timeline_file: String,
    /// File name for the keyword frequency chart.
    pub frequency_file: String,
    /// Number of keywords shown in the frequency chart.
    pub top_keywords: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            timeline_file: "keyword_timeline.svg".to_string(),
            frequency_file: "keyword_frequency.svg".to_string(),
            top_keywords: 20,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::NevnError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nevn")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded output directory path.
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.output_dir)
    }

    /// Path for the JSON results file.
    pub fn results_path(&self) -> PathBuf {
        self.output_dir().join(&self.report.results_file)
    }

    /// Path for the timeline chart.
    pub fn timeline_path(&self) -> PathBuf {
        self.output_dir().join(&self.chart.timeline_file)
    }

    /// Path for the frequency chart.
    pub fn frequency_path(&self) -> PathBuf {
        self.output_dir().join(&self.chart.frequency_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_track_full_keyword_list() {
        let settings = Settings::default();
        assert_eq!(settings.keywords.track.len(), 36);
        assert_eq!(settings.keywords.track[0], "Data Center");
        assert!(settings.keywords.track.contains(&"62%".to_string()));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
            [transcript]
            language = "de"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.transcript.language, "de");
        assert!(settings.transcript.prefer_manual);
        assert_eq!(settings.chart.top_keywords, 20);
        assert_eq!(settings.report.results_file, "analysis_results.json");
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings::default();
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.keywords.track, settings.keywords.track);
        assert_eq!(parsed.chart.timeline_file, settings.chart.timeline_file);
    }
}
