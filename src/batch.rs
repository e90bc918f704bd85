use crate::design::DesignRecord;
use crate::field::FieldSpec;
use crate::statics;
use crate::value::DesignValue;
use std::fs;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("selection mixes clans: expected {expected}, found {found}")]
    MixedClans { expected: i64, found: i64 },
    #[error("no fields selected for editing")]
    EmptyEdit,
}

/// Outcome of validating the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected; editing stays disabled, but this is not an error.
    Empty,
    /// All selected records share this clan.
    Uniform(i64),
}

/// Check that every selected record shares one clan. The first record's clan is
/// canonical. Must be re-run whenever the selection changes; the result gates
/// whether editing and applying are enabled.
pub fn validate_selection(selection: &[&DesignRecord]) -> Result<Selection, BatchError> {
    let Some(first) = selection.first() else {
        return Ok(Selection::Empty);
    };
    let expected = first.clan_id;
    for record in &selection[1..] {
        if record.clan_id != expected {
            return Err(BatchError::MixedClans {
                expected,
                found: record.clan_id,
            });
        }
    }
    Ok(Selection::Uniform(expected))
}

/// The four fields a batch may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    Face,
    Hair,
    Tail,
    FacePaint,
}

impl EditableField {
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            EditableField::Face => &FieldSpec::FACE,
            EditableField::Hair => &FieldSpec::HAIR,
            EditableField::Tail => &FieldSpec::TAIL,
            EditableField::FacePaint => &FieldSpec::FACE_PAINT,
        }
    }
}

/// One requested field overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub field: EditableField,
    pub value: i64,
}

/// Counts of per-record outcomes from one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub skipped: usize,
}

/// Apply `edits` to every selected record's backing file.
///
/// Validation precedes mutation: a mixed-clan selection or an empty edit set
/// errors out before any file is touched. After that, records are processed
/// independently and sequentially in selection order; a record whose file is
/// unreadable, unparsable, or missing its customization section is skipped
/// without aborting the batch.
pub fn apply_batch(selection: &[&DesignRecord], edits: &[Edit]) -> Result<BatchReport, BatchError> {
    apply_batch_with_progress(selection, edits, |_, _| {})
}

/// [`apply_batch`] with a per-record callback `(record, written)` so a progress
/// surface can advance. Pacing and threading are the caller's concern.
pub fn apply_batch_with_progress(
    selection: &[&DesignRecord],
    edits: &[Edit],
    mut on_record: impl FnMut(&DesignRecord, bool),
) -> Result<BatchReport, BatchError> {
    validate_selection(selection)?;
    if edits.is_empty() {
        return Err(BatchError::EmptyEdit);
    }

    let mut report = BatchReport::default();
    for record in selection {
        let written = apply_to_record(record, edits);
        if written {
            report.written += 1;
        } else {
            report.skipped += 1;
        }
        on_record(record, written);
    }
    Ok(report)
}

fn apply_to_record(record: &DesignRecord, edits: &[Edit]) -> bool {
    let Ok(text) = fs::read_to_string(&record.source_path) else {
        return false;
    };
    let Ok(mut root) = DesignValue::parse(&text) else {
        return false;
    };
    let Some(customize) = root.get_mut(statics::GD_CUSTOMIZE) else {
        return false;
    };
    if customize.as_object().is_none() {
        return false;
    }

    for edit in edits {
        edit.field.spec().write(customize, edit.value);
    }

    fs::write(&record.source_path, root.to_design_pretty()).is_ok()
}
