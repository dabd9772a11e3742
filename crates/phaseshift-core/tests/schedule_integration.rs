//! End-to-end tests: roster records in, rendered schedule text out.

use phaseshift_core::{
    build_schedule, render_schedule, resolve_shifts, Preferences, PreferencesRecord, ShiftRecord,
    ShiftSpec,
};

fn preferences() -> Preferences {
    let record: PreferencesRecord = toml::from_str(
        r#"
        chronotype = "early bird"
        sleep_pattern = "23:00-8:00"
        sex = "male"
        age = 18
        caffeine_advice = true
        use_melatonin = true
        get_ready_minutes = 30
        "#,
    )
    .unwrap();
    record.resolve().unwrap()
}

fn shift(date: &str, start: &str, end: &str) -> ShiftRecord {
    ShiftRecord {
        date: date.into(),
        start_time: start.into(),
        end_time: end.into(),
        travel_minutes: 30,
    }
}

/// Three day shifts, a day off, then a night shift.
fn mixed_roster(night_start: &str, night_end: &str) -> Vec<ShiftSpec> {
    resolve_shifts(&[
        shift("2025-07-25", "9:00", "17:00"),
        shift("2025-07-26", "9:00", "17:00"),
        shift("2025-07-27", "9:00", "17:00"),
        shift("2025-07-29", night_start, night_end),
    ])
    .unwrap()
}

#[test]
fn mixed_roster_renders_the_full_schedule() {
    let plans = build_schedule(&preferences(), &mixed_roster("23:00", "7:00")).unwrap();
    let text = render_schedule(&plans);

    let expected = indoc::indoc! {"
        caffeine: 08:00 - 14:00
        see bright light: 08:30 - 17:30
        to work: 08:30 - 09:00
        work: 09:00 - 17:00
        no caffeine: 14:00 - 23:00
        from work: 17:00 - 17:30
        avoid bright light: 22:00 - 23:00
        sleep: 23:00 - 08:00 jul 26

        caffeine: 08:00 - 14:00
        see bright light: 08:30 - 17:30
        to work: 08:30 - 09:00
        work: 09:00 - 17:00
        no caffeine: 14:00 - 23:00
        from work: 17:00 - 17:30
        avoid bright light: 22:00 - 23:00
        sleep: 23:00 - 08:00 jul 27

        caffeine: 08:00 - 19:00
        see bright light: 08:30 - 17:30
        to work: 08:30 - 09:00
        work: 09:00 - 17:00
        no caffeine: 19:00 - 01:00 jul 28
        from work: 17:00 - 17:30
        sleep: 01:00 - 10:00 jul 28

        caffeine: 10:00 - 18:00
        see bright light: 12:30 - 17:30
        no caffeine: 18:00 - 03:00 jul 29
        avoid bright light: 02:00 - 03:00 jul 29
        sleep: 03:00 - 12:00 jul 29

        no caffeine: 12:00 - 21:00
        nap: 19:00 - 22:00
        caffeine: 22:00 - 01:30 jul 30
        see bright light: 22:30 - 23:30
        to work: 22:30 - 23:00
        work: 23:00 - 07:00 jul 30
        no caffeine: 01:30 - 07:30 jul 30
        from work: 07:00 - 07:30 jul 30
        sleep: 07:30 - 16:30 jul 30

        no caffeine: 15:30 - 23:00
        avoid bright light: 22:00 - 23:00
        sleep: 23:00 - 08:00 jul 31"};

    assert_eq!(text, expected);
}

#[test]
fn night_shift_at_22_uses_the_fixed_pre_nap_cutoff() {
    let plans = build_schedule(&preferences(), &mixed_roster("22:00", "6:00")).unwrap();
    let text = render_schedule(&plans);
    let night_block = text
        .split("\n\n")
        .find(|block| block.contains("nap:"))
        .unwrap();

    assert_eq!(
        night_block,
        indoc::indoc! {"
            no caffeine: 12:00 - 20:00
            nap: 18:00 - 21:00
            caffeine: 21:00 - 00:30 jul 30
            see bright light: 21:30 - 22:30
            to work: 21:30 - 22:00
            work: 22:00 - 06:00 jul 30
            no caffeine: 00:30 - 06:30 jul 30
            from work: 06:00 - 06:30 jul 30
            sleep: 06:30 - 15:30 jul 30"}
    );
}

#[test]
fn roster_without_nights_stays_on_the_baseline() {
    let shifts = resolve_shifts(&[
        shift("2025-07-25", "9:00", "17:00"),
        shift("2025-07-26", "10:00", "18:00"),
        shift("2025-07-28", "9:00", "17:00"),
    ])
    .unwrap();
    let plans = build_schedule(&preferences(), &shifts).unwrap();
    let text = render_schedule(&plans);

    assert!(!text.contains("nap:"));
    // The noon abstention and during-shift caffeine exist only around a
    // night shift, as does the pre-shift light pulse.
    assert!(!text.contains("no caffeine: 12:00"));
    assert!(!text.contains("see bright light: 21:"));
    // Every day keeps the baseline sleep pattern.
    for block in text.split("\n\n") {
        assert!(block.contains("sleep: 23:00 - 08:00"), "block: {block}");
    }
}

#[test]
fn identical_inputs_render_byte_identical_output() {
    let first = render_schedule(&build_schedule(&preferences(), &mixed_roster("23:00", "7:00")).unwrap());
    let second = render_schedule(&build_schedule(&preferences(), &mixed_roster("23:00", "7:00")).unwrap());
    assert_eq!(first, second);
}

#[test]
fn plans_serialize_with_clock_times_as_strings() {
    let plans = build_schedule(&preferences(), &mixed_roster("23:00", "7:00")).unwrap();
    let json = serde_json::to_value(&plans).unwrap();

    let night = json
        .as_array()
        .unwrap()
        .iter()
        .find(|day| day["day_type"] == "night")
        .unwrap();
    assert_eq!(night["date"], "2025-07-29");
    assert_eq!(night["sleep"]["start"], "07:30");
    assert_eq!(night["sleep"]["ends_next_day"], true);
    assert_eq!(night["nap"]["start"], "19:00");
    // Absent windows are omitted, not null.
    assert!(night.get("avoid_light").is_none());
}
