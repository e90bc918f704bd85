use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de};

/// Represents a number that preserves the distinction between I64, U64, and F64.
/// Design files mix integer customization fields with float fields we must not
/// reformat when writing the document back.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl DesignNumber {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DesignNumber::I64(v) => Some(*v),
            DesignNumber::U64(v) => i64::try_from(*v).ok(),
            DesignNumber::F64(_) => None,
        }
    }

    fn write_json(&self, out: &mut String) {
        match self {
            DesignNumber::I64(v) => out.push_str(&v.to_string()),
            DesignNumber::U64(v) => out.push_str(&v.to_string()),
            DesignNumber::F64(v) => {
                if v.is_finite() {
                    let mut buf = ryu::Buffer::new();
                    out.push_str(buf.format(*v));
                } else {
                    // Strict JSON has no NaN/Infinity.
                    out.push_str("null");
                }
            }
        }
    }
}

/// Represents one JSON value of a design document.
/// Objects use an insertion-ordered map so unknown members keep their position
/// through parse, mutation, and serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignValue {
    Null,
    Bool(bool),
    Number(DesignNumber),
    String(String),
    Array(Vec<DesignValue>),
    Object(IndexMap<String, DesignValue>),
}

impl DesignValue {
    pub fn int(v: i64) -> DesignValue {
        DesignValue::Number(DesignNumber::I64(v))
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, DesignValue>> {
        match self {
            DesignValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, DesignValue>> {
        match self {
            DesignValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DesignValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DesignValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&DesignValue> {
        self.as_object().and_then(|m| m.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DesignValue> {
        self.as_object_mut().and_then(|m| m.get_mut(key))
    }

    pub fn parse(text: &str) -> anyhow::Result<DesignValue> {
        Ok(serde_json::from_str::<DesignValue>(text)?)
    }

    /// Serialize in the style the design-writing application uses:
    /// - 2-space indentation
    /// - keys always quoted, `": "` separators
    /// - non-ASCII escaped as `\uXXXX` (surrogate pairs beyond the BMP)
    pub fn to_design_pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, indent: usize) {
        match self {
            DesignValue::Null => out.push_str("null"),
            DesignValue::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
            DesignValue::Number(n) => n.write_json(out),
            DesignValue::String(s) => write_escaped_string(out, s),
            DesignValue::Array(values) => {
                out.push('[');
                if !values.is_empty() {
                    out.push('\n');
                    for (i, v) in values.iter().enumerate() {
                        out.push_str(&" ".repeat(indent + 2));
                        v.write_pretty(out, indent + 2);
                        if i + 1 != values.len() {
                            out.push(',');
                        }
                        out.push('\n');
                    }
                    out.push_str(&" ".repeat(indent));
                }
                out.push(']');
            }
            DesignValue::Object(map) => {
                out.push('{');
                if !map.is_empty() {
                    out.push('\n');
                    for (i, (k, v)) in map.iter().enumerate() {
                        out.push_str(&" ".repeat(indent + 2));
                        write_escaped_string(out, k);
                        out.push_str(": ");
                        v.write_pretty(out, indent + 2);
                        if i + 1 != map.len() {
                            out.push(',');
                        }
                        out.push('\n');
                    }
                    out.push_str(&" ".repeat(indent));
                }
                out.push('}');
            }
        }
    }
}

fn write_escaped_string(out: &mut String, s: &str) {
    use std::fmt::Write as _;

    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                write!(out, "\\u{:04x}", c as u32).ok();
            }
            c if (c as u32) > 0x7F => {
                let cp = c as u32;
                if cp <= 0xFFFF {
                    write!(out, "\\u{:04x}", cp).ok();
                } else {
                    // Encode as UTF-16 surrogate pair.
                    let u = cp - 0x1_0000;
                    let high = 0xD800 + ((u >> 10) & 0x3FF);
                    let low = 0xDC00 + (u & 0x3FF);
                    write!(out, "\\u{:04x}\\u{:04x}", high, low).ok();
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

impl<'de> Deserialize<'de> for DesignNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl<'de> de::Visitor<'de> for NumberVisitor {
            type Value = DesignNumber;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a JSON number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DesignNumber::I64(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(DesignNumber::U64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(DesignNumber::F64(v))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

impl<'de> Deserialize<'de> for DesignValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> de::Visitor<'de> for ValueVisitor {
            type Value = DesignValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a JSON value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DesignValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DesignValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(DesignValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DesignValue::Number(DesignNumber::I64(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(DesignValue::Number(DesignNumber::U64(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(DesignValue::Number(DesignNumber::F64(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DesignValue::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(DesignValue::String(v))
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<DesignValue>()? {
                    values.push(value);
                }
                Ok(DesignValue::Array(values))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut values = IndexMap::new();
                while let Some((key, value)) = map.next_entry::<String, DesignValue>()? {
                    values.insert(key, value);
                }
                Ok(DesignValue::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
