//! Configuration module for Nevn.

mod settings;

pub use settings::{
    ChartSettings, GeneralSettings, KeywordSettings, ReportSettings, Settings, TranscriptSettings,
};
