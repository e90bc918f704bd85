use glambatch::{group_by_clan, load_editable_values, scan_designs};
use pretty_assertions::assert_eq;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<()> {
    std::fs::write(dir.join(name), contents.as_bytes())?;
    Ok(())
}

#[test]
fn missing_directory_is_a_hard_error() {
    let err = scan_designs(Path::new("/definitely/not/a/designs/folder")).unwrap_err();
    assert!(err.to_string().contains("designs folder not found"));
}

#[test]
fn scan_collects_named_and_unnamed_designs_and_skips_bad_files() -> Result<()> {
    let dir = tempfile::tempdir()?;

    write_file(
        dir.path(),
        "a.json",
        r#"{"Name": "Sunseeker", "Customize": {"Clan": 7, "Face": 3}}"#,
    )?;
    // No Name member: display name falls back to the file stem.
    write_file(dir.path(), "b.json", r#"{"Customize": {"Clan": {"Value": 2}}}"#)?;
    // Unparsable: silently skipped.
    write_file(dir.path(), "broken.json", "{ not json at all")?;
    // Wrong extension: not scanned.
    write_file(dir.path(), "notes.txt", r#"{"Name": "ignored"}"#)?;
    // No Customize section: clan defaults to 0.
    write_file(dir.path(), "c.json", r#"{"Name": "Plain"}"#)?;

    let records = scan_designs(dir.path())?;
    let summary: Vec<(&str, i64)> = records
        .iter()
        .map(|r| (r.display_name.as_str(), r.clan_id))
        .collect();

    assert_eq!(
        summary,
        vec![("Sunseeker", 7), ("b", 2), ("Plain", 0)]
    );
    Ok(())
}

#[test]
fn editable_values_are_read_fresh_and_clamped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_file(
        dir.path(),
        "d.json",
        r#"{
            "Name": "Clampy",
            "Customize": {
                "Clan": 7,
                "Face": 9999,
                "Hairstyle": {"Value": 1500, "Apply": true},
                "TailShape": 0,
                "Tail": 12,
                "FacePaint": -5
            }
        }"#,
    )?;

    let records = scan_designs(dir.path())?;
    let record = &records[0];

    let values = load_editable_values(record);
    assert_eq!(values.face, 255);
    assert_eq!(values.hair, 1500);
    assert_eq!(values.tail, 12);
    assert_eq!(values.face_paint, 0);

    // Values are never cached on the record: an external rewrite is observed
    // by the next read.
    write_file(
        dir.path(),
        "d.json",
        r#"{"Name": "Clampy", "Customize": {"Clan": 7, "Face": 42}}"#,
    )?;
    let values = load_editable_values(record);
    assert_eq!(values.face, 42);
    assert_eq!(values.tail, 0);
    Ok(())
}

#[test]
fn unreadable_design_yields_all_zero_values() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_file(
        dir.path(),
        "e.json",
        r#"{"Name": "Gone", "Customize": {"Clan": 7, "Face": 3}}"#,
    )?;

    let records = scan_designs(dir.path())?;
    let record = records[0].clone();
    std::fs::remove_file(&record.source_path)?;

    let values = load_editable_values(&record);
    assert_eq!(values, Default::default());
    Ok(())
}

#[test]
fn grouping_preserves_first_occurrence_and_discovery_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_file(dir.path(), "1.json", r#"{"Name": "A", "Customize": {"Clan": 7}}"#)?;
    write_file(dir.path(), "2.json", r#"{"Name": "B", "Customize": {"Clan": 2}}"#)?;
    write_file(dir.path(), "3.json", r#"{"Name": "C", "Customize": {"Clan": 7}}"#)?;

    let records = scan_designs(dir.path())?;
    let groups = group_by_clan(&records);

    let clans: Vec<i64> = groups.keys().copied().collect();
    assert_eq!(clans, vec![7, 2]);

    let clan7: Vec<&str> = groups[&7].iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(clan7, vec!["A", "C"]);
    Ok(())
}
