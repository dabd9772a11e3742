use std::path::Path;

const SAMPLE: &str = r#"# Phaseshift roster document.
#
# [preferences] describes the worker's baseline; [[shifts]] lists the
# roster. Days without a shift are treated as days off.

[preferences]
chronotype = "early bird"        # or "night owl"
sleep_pattern = "23:00-08:00"    # bedtime-wake on days off
sex = "male"
age = 30
caffeine_advice = true
use_melatonin = false
get_ready_minutes = 30

[[shifts]]
date = "2025-07-25"
start_time = "09:00"
end_time = "17:00"
travel_minutes = 30

[[shifts]]
date = "2025-07-26"
start_time = "09:00"
end_time = "17:00"
travel_minutes = 30

[[shifts]]
date = "2025-07-27"
start_time = "09:00"
end_time = "17:00"
travel_minutes = 30

# 2025-07-28 is a day off.

[[shifts]]
date = "2025-07-29"
start_time = "23:00"
end_time = "7:00"
travel_minutes = 30
"#;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if file.exists() {
        return Err(format!("refusing to overwrite {}", file.display()).into());
    }
    std::fs::write(file, SAMPLE)?;
    println!("wrote sample roster to {}", file.display());
    Ok(())
}
