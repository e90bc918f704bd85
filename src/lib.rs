//! Core library for GlamBatch, a batch editor for Glamourer design files.
//! Provides schema-tolerant reads and writes of the numeric customization
//! fields while preserving everything else in each document byte-for-byte in
//! structure, plus the clan rules that gate which designs may be edited
//! together.

mod batch;
mod clan;
mod design;
mod field;
pub mod statics;
mod value;

pub use batch::{
    BatchError, BatchReport, Edit, EditableField, Selection, apply_batch,
    apply_batch_with_progress, validate_selection,
};
pub use clan::{clan_label, tail_editable};
pub use design::{
    DesignRecord, EditableValues, default_designs_dir, group_by_clan, load_editable_values,
    scan_designs,
};
pub use field::{FieldShape, FieldSpec};
pub use value::{DesignNumber, DesignValue};
