use crate::statics;
use crate::value::DesignValue;
use indexmap::IndexMap;

/// Storage shape of one customization field inside a design document.
/// The same semantic field may be stored three ways across documents of
/// different vintages, so reads and writes branch exhaustively on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Key missing, or present but malformed (non-integer scalar, or an
    /// object without an integer `Value` member).
    Absent,
    /// Bare integer scalar.
    Scalar(i64),
    /// Object wrapping the scalar under `Value`, with an optional `Apply` flag.
    Wrapped { value: i64, apply: Option<bool> },
}

impl FieldShape {
    pub fn classify(node: Option<&DesignValue>) -> FieldShape {
        match node {
            None => FieldShape::Absent,
            Some(DesignValue::Number(n)) => match n.as_i64() {
                Some(v) => FieldShape::Scalar(v),
                None => FieldShape::Absent,
            },
            Some(DesignValue::Object(map)) => match map.get(statics::GD_VALUE) {
                Some(DesignValue::Number(n)) => match n.as_i64() {
                    Some(value) => FieldShape::Wrapped {
                        value,
                        apply: map.get(statics::GD_APPLY).and_then(DesignValue::as_bool),
                    },
                    None => FieldShape::Absent,
                },
                _ => FieldShape::Absent,
            },
            Some(_) => FieldShape::Absent,
        }
    }
}

/// One editable numeric attribute: its JSON key(s) and inclusive clamp range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub canonical: &'static str,
    pub fallback: Option<&'static str>,
    pub min: i64,
    pub max: i64,
}

impl FieldSpec {
    pub const FACE: FieldSpec = FieldSpec {
        canonical: statics::GD_FACE,
        fallback: None,
        min: 0,
        max: 255,
    };

    pub const HAIR: FieldSpec = FieldSpec {
        canonical: statics::GD_HAIRSTYLE,
        fallback: None,
        min: 0,
        max: 2000,
    };

    // "Tail" is the historical key; newer documents use "TailShape".
    pub const TAIL: FieldSpec = FieldSpec {
        canonical: statics::GD_TAIL_SHAPE,
        fallback: Some(statics::GD_TAIL),
        min: 0,
        max: 255,
    };

    pub const FACE_PAINT: FieldSpec = FieldSpec {
        canonical: statics::GD_FACE_PAINT,
        fallback: None,
        min: 0,
        max: 255,
    };

    pub fn clamp(&self, v: i64) -> i64 {
        v.clamp(self.min, self.max)
    }

    /// Read the field from a customization object, clamped to the field's range.
    /// The canonical key is tried first; a zero result falls back to the
    /// historical key when one exists.
    pub fn read(&self, customize: &DesignValue) -> i64 {
        let mut v = read_key(customize, self.canonical);
        if v == 0 {
            if let Some(fallback) = self.fallback {
                v = read_key(customize, fallback);
            }
        }
        self.clamp(v)
    }

    /// Write the field into a customization object, clamped.
    ///
    /// The target key is chosen by presence: if the fallback key already exists
    /// on the object it is written, otherwise the canonical key is. This is
    /// independent of which key a read would have used; preserved as-is from
    /// the consuming application's behavior so existing documents keep the key
    /// they already have.
    pub fn write(&self, customize: &mut DesignValue, new_value: i64) {
        let new_value = self.clamp(new_value);
        let key = match self.fallback {
            Some(fallback) if customize.get(fallback).is_some() => fallback,
            _ => self.canonical,
        };
        write_key(customize, key, new_value);
    }
}

/// Shape-tolerant unclamped read of a single key. Used directly for the clan
/// key, and by [`FieldSpec::read`] for the editable fields.
pub fn read_key(customize: &DesignValue, key: &str) -> i64 {
    match FieldShape::classify(customize.get(key)) {
        FieldShape::Absent => 0,
        FieldShape::Scalar(v) => v,
        FieldShape::Wrapped { value, .. } => value,
    }
}

fn write_key(customize: &mut DesignValue, key: &str, new_value: i64) {
    let Some(map) = customize.as_object_mut() else {
        return;
    };
    match FieldShape::classify(map.get(key)) {
        FieldShape::Wrapped { .. } => {
            if let Some(obj) = map.get_mut(key).and_then(DesignValue::as_object_mut) {
                obj.insert(statics::GD_VALUE.to_string(), DesignValue::int(new_value));
                // The Apply flag marks the field as active for the consumer;
                // we set it, never read it for logic.
                if obj.contains_key(statics::GD_APPLY) {
                    obj.insert(statics::GD_APPLY.to_string(), DesignValue::Bool(true));
                }
            }
        }
        FieldShape::Scalar(_) => {
            // IndexMap::insert on an existing key keeps its position.
            map.insert(key.to_string(), DesignValue::int(new_value));
        }
        FieldShape::Absent => {
            map.insert(key.to_string(), wrapped_field(new_value));
        }
    }
}

fn wrapped_field(value: i64) -> DesignValue {
    let mut obj = IndexMap::new();
    obj.insert(statics::GD_VALUE.to_string(), DesignValue::int(value));
    obj.insert(statics::GD_APPLY.to_string(), DesignValue::Bool(true));
    DesignValue::Object(obj)
}
