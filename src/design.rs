use crate::field::{self, FieldSpec};
use crate::statics;
use crate::value::DesignValue;
use anyhow::Context;
use indexmap::IndexMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One design document found in the designs folder.
/// Identity (path, clan) is fixed at scan time; editable field values are read
/// fresh from disk on demand and never cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRecord {
    pub display_name: String,
    pub source_path: PathBuf,
    pub clan_id: i64,
}

/// Current values of the four editable fields, clamped to their ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditableValues {
    pub face: i64,
    pub hair: i64,
    pub tail: i64,
    pub face_paint: i64,
}

/// The well-known designs folder under the user's application-data area, when
/// the environment provides one.
pub fn default_designs_dir() -> Option<PathBuf> {
    let appdata = std::env::var_os("APPDATA")?;
    Some(
        PathBuf::from(appdata)
            .join(statics::DIR_LAUNCHER)
            .join(statics::DIR_PLUGIN_CONFIGS)
            .join(statics::DIR_PLUGIN)
            .join(statics::DIR_DESIGNS),
    )
}

/// List and parse every `.json` design in `dir` (non-recursive). A missing
/// directory is a hard error; an individual file that fails to read or parse is
/// silently skipped. Files are visited in sorted order so the result is stable.
pub fn scan_designs(dir: &Path) -> anyhow::Result<Vec<DesignRecord>> {
    if !dir.is_dir() {
        anyhow::bail!("designs folder not found at {dir:?}");
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("listing {dir:?}"))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    paths.sort();

    Ok(paths.iter().filter_map(|path| parse_record(path)).collect())
}

fn parse_record(path: &Path) -> Option<DesignRecord> {
    let text = fs::read_to_string(path).ok()?;
    let root = DesignValue::parse(&text).ok()?;

    let display_name = root
        .get(statics::GD_NAME)
        .and_then(DesignValue::as_str)
        .map(str::to_owned)
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))?;

    let clan_id = root
        .get(statics::GD_CUSTOMIZE)
        .map(|customize| field::read_key(customize, statics::GD_CLAN))
        .unwrap_or(0);

    Some(DesignRecord {
        display_name,
        source_path: path.to_path_buf(),
        clan_id,
    })
}

/// Re-open and re-parse the record's file and read the four editable fields.
/// Any failure (unreadable, unparsable, no customization section) yields all
/// zeros rather than an error.
pub fn load_editable_values(record: &DesignRecord) -> EditableValues {
    let Ok(text) = fs::read_to_string(&record.source_path) else {
        return EditableValues::default();
    };
    let Ok(root) = DesignValue::parse(&text) else {
        return EditableValues::default();
    };
    let Some(customize) = root.get(statics::GD_CUSTOMIZE) else {
        return EditableValues::default();
    };

    EditableValues {
        face: FieldSpec::FACE.read(customize),
        hair: FieldSpec::HAIR.read(customize),
        tail: FieldSpec::TAIL.read(customize),
        face_paint: FieldSpec::FACE_PAINT.read(customize),
    }
}

/// Group records by clan for display: clans in first-occurrence order, records
/// in discovery order within each clan.
pub fn group_by_clan(records: &[DesignRecord]) -> IndexMap<i64, Vec<&DesignRecord>> {
    let mut groups: IndexMap<i64, Vec<&DesignRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.clan_id).or_default().push(record);
    }
    groups
}
