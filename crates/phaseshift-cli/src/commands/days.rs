use std::path::Path;

use phaseshift_core::classify_roster;

/// Print the classification array driving the schedule: date, day type,
/// and the lookahead distance to the next night shift.
pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (_, shifts) = super::load(file)?;
    let days = classify_roster(&shifts)?;
    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}
