//! Subcommand implementations and the shared roster-document loader.

pub mod days;
pub mod init;
pub mod plan;

use std::path::Path;

use serde::Deserialize;

use phaseshift_core::{resolve_shifts, Preferences, PreferencesRecord, ShiftRecord, ShiftSpec};

/// On-disk roster document: a preferences table plus the shift list.
#[derive(Deserialize)]
struct RosterDocument {
    preferences: PreferencesRecord,
    #[serde(default)]
    shifts: Vec<ShiftRecord>,
}

/// Load and resolve a roster document, failing on the first malformed
/// record.
fn load(path: &Path) -> Result<(Preferences, Vec<ShiftSpec>), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let document: RosterDocument = toml::from_str(&text)?;
    let preferences = document.preferences.resolve()?;
    let shifts = resolve_shifts(&document.shifts)?;
    Ok((preferences, shifts))
}
