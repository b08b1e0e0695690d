//! Conversion of single DICOM values into their DICOMweb JSON form.
use dcmkit_core::{Tag, VR};
use serde_json::{Map, Number, Value as JsonValue};

/// Format a binary integer.
///
/// Negative values are emitted as signed 32-bit integers,
/// others as unsigned 32-bit integers.
pub(crate) fn format_integer(value: i64) -> JsonValue {
    if value < 0 {
        JsonValue::from(value as i32)
    } else {
        JsonValue::from(value as u32)
    }
}

/// Format a floating point number,
/// collapsing it to an integer when it is one up to rounding noise.
pub(crate) fn format_double(value: f64) -> JsonValue {
    if value.is_finite() {
        let rounded = value.round();
        if rounded >= i64::MIN as f64
            && rounded <= i64::MAX as f64
            && (value - rounded).abs() <= f64::EPSILON * 100.
        {
            return format_integer(rounded as i64);
        }
    }
    // non-finite numbers have no JSON representation and become null
    Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

/// Format an attribute tag as 8 hexadecimal digits.
pub(crate) fn format_tag(tag: Tag, lowercase: bool) -> String {
    if lowercase {
        format!("{:04x}{:04x}", tag.group(), tag.element())
    } else {
        format!("{:04X}{:04X}", tag.group(), tag.element())
    }
}

/// Whether backslashes in values of this VR separate multiple values.
pub(crate) fn is_multi_valued(vr: VR) -> bool {
    !matches!(vr, VR::LT | VR::ST | VR::UT | VR::UR)
}

/// Decompose a person name into its component groups.
pub(crate) fn person_name(value: &str) -> JsonValue {
    let mut name = Map::new();
    if !value.is_empty() {
        for (key, group) in ["Alphabetic", "Ideographic", "Phonetic"]
            .into_iter()
            .zip(value.split('='))
        {
            name.insert(key.to_string(), JsonValue::from(group));
        }
    }
    JsonValue::Object(name)
}

/// The outcome of converting one component of a text value.
#[derive(Debug, PartialEq)]
pub(crate) enum Component {
    Value(JsonValue),
    Invalid,
}

/// Convert one component of a text value, according to its VR.
pub(crate) fn text_component(vr: VR, token: &str) -> Component {
    match vr {
        VR::PN => Component::Value(person_name(token)),
        VR::IS => {
            let token = token.trim_matches(' ');
            if token.is_empty() {
                Component::Value(JsonValue::Null)
            } else {
                match token.parse::<i64>() {
                    Ok(v) => Component::Value(format_integer(v)),
                    Err(_) => Component::Invalid,
                }
            }
        }
        VR::DS => {
            let token = token.trim_matches(' ');
            if token.is_empty() {
                Component::Value(JsonValue::Null)
            } else {
                match token.parse::<f64>() {
                    Ok(v) => Component::Value(format_double(v)),
                    Err(_) => Component::Invalid,
                }
            }
        }
        _ if token.is_empty() => Component::Value(JsonValue::Null),
        _ => Component::Value(JsonValue::from(token)),
    }
}
