use std::path::Path;

use phaseshift_core::{build_schedule, render_schedule};

pub fn run(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (preferences, shifts) = super::load(file)?;
    let plans = build_schedule(&preferences, &shifts)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        println!("{}", render_schedule(&plans));
    }
    Ok(())
}
