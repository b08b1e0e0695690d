//! Conversion of JSON replacement values into attribute values.
//!
//! A replacement is one of:
//!
//! - a string, encoded in the character set of the target data set,
//!   parsed into numbers for binary numeric value representations,
//!   or decoded if it is a base64 `data:` URI;
//! - `null`, for an empty value;
//! - an array of objects, for a sequence whose items map
//!   attribute names (or tags) to further replacements.
use crate::{BadReplacementSnafu, Result};
use base64::Engine;
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{Tag, VR};
use dcmkit_object::visitor::TextEncoding;
use dcmkit_object::{InMemDicomObject, InMemElement, StandardDataDictionary, Value};
use serde_json::Value as JsonValue;
use snafu::OptionExt;
use std::str::FromStr;

/// The value representation given to an inserted attribute.
pub fn replacement_vr(tag: Tag, json: &JsonValue) -> VR {
    StandardDataDictionary.vr_of(tag).unwrap_or(match json {
        JsonValue::Array(_) => VR::SQ,
        _ if tag.private_creator().is_none() && tag.is_private() => VR::LO,
        _ => VR::UN,
    })
}

/// Turn a JSON replacement into the value of an attribute
/// with the given value representation.
pub fn json_to_value(tag: Tag, vr: VR, json: &JsonValue, encoding: TextEncoding) -> Result<Value> {
    match json {
        JsonValue::Null => Ok(match vr {
            VR::SQ => Value::Sequence(Vec::new()),
            _ => Value::empty(),
        }),
        JsonValue::String(text) => string_to_value(tag, vr, text, encoding),
        JsonValue::Array(items) => {
            if vr != VR::SQ {
                return BadReplacementSnafu {
                    tag,
                    reason: format!("an array requires a sequence, not {}", vr),
                }
                .fail();
            }
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(json_to_item(tag, item, encoding)?);
            }
            Ok(Value::Sequence(out))
        }
        _ => BadReplacementSnafu {
            tag,
            reason: "expected a string, null or an array",
        }
        .fail(),
    }
}

fn json_to_item(tag: Tag, item: &JsonValue, encoding: TextEncoding) -> Result<InMemDicomObject> {
    let members = match item {
        JsonValue::Object(members) => members,
        // an empty array stands for an empty item
        JsonValue::Array(a) if a.is_empty() => return Ok(InMemDicomObject::new_empty()),
        _ => {
            return BadReplacementSnafu {
                tag,
                reason: "sequence items must be objects",
            }
            .fail()
        }
    };
    let mut obj = InMemDicomObject::new_empty();
    for (name, value) in members {
        let child = match StandardDataDictionary.parse_tag(name) {
            Some(t) => t,
            None => {
                return BadReplacementSnafu {
                    tag,
                    reason: format!("unknown attribute `{}`", name),
                }
                .fail()
            }
        };
        let vr = replacement_vr(child, value);
        let value = json_to_value(child, vr, value, encoding)?;
        obj.put(InMemElement::new(child, vr, value));
    }
    Ok(obj)
}

fn string_to_value(tag: Tag, vr: VR, text: &str, encoding: TextEncoding) -> Result<Value> {
    if let Some(bytes) = decode_data_uri(text) {
        return Ok(Value::Primitive(bytes));
    }
    let value = match vr {
        VR::US => Value::from_u16s(&parse_all(tag, vr, text)?),
        VR::SS => Value::from_i16s(&parse_all(tag, vr, text)?),
        VR::UL => Value::from_u32s(&parse_all(tag, vr, text)?),
        VR::SL => Value::from_i32s(&parse_all(tag, vr, text)?),
        VR::FL => Value::from_f32s(&parse_all(tag, vr, text)?),
        VR::FD => Value::from_f64s(&parse_all(tag, vr, text)?),
        VR::AT => {
            let tags = text
                .split('\\')
                .filter(|s| !s.trim().is_empty())
                .map(|s| StandardDataDictionary.parse_tag(s))
                .collect::<Option<Vec<Tag>>>()
                .with_context(|| BadReplacementSnafu {
                    tag,
                    reason: format!("`{}` is not a list of tags", text),
                })?;
            Value::from_tags(&tags)
        }
        VR::SQ => {
            return BadReplacementSnafu {
                tag,
                reason: "a sequence requires an array",
            }
            .fail()
        }
        _ => Value::Primitive(encoding.encode(text)),
    };
    Ok(value)
}

fn parse_all<T: FromStr>(tag: Tag, vr: VR, text: &str) -> Result<Vec<T>> {
    text.split('\\')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().ok())
        .collect::<Option<Vec<T>>>()
        .with_context(|| BadReplacementSnafu {
            tag,
            reason: format!("`{}` is not a valid {} value", text, vr),
        })
}

/// Decode a `data:<mime>;base64,<payload>` URI.
fn decode_data_uri(text: &str) -> Option<Vec<u8>> {
    let rest = text.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;
    use dcmkit_dictionary_std::tags;
    use serde_json::json;

    #[test]
    fn strings_follow_the_value_representation() {
        let v = json_to_value(tags::PATIENT_NAME, VR::PN, &json!("Jér^Ôme"), TextEncoding::Latin1)
            .unwrap();
        assert_eq!(v.as_bytes(), Some(&b"J\xE9r^\xD4me"[..]));

        let v = json_to_value(tags::ROWS, VR::US, &json!("512"), TextEncoding::Utf8).unwrap();
        assert_eq!(v, Value::from_u16(512));

        let err = json_to_value(tags::ROWS, VR::US, &json!("abc"), TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn null_is_empty() {
        let v = json_to_value(tags::PATIENT_ID, VR::LO, &JsonValue::Null, TextEncoding::Utf8).unwrap();
        assert_eq!(v, Value::empty());
    }

    #[test]
    fn data_uri_is_decoded() {
        let v = json_to_value(
            Tag(0x0009, 0x1001),
            VR::OB,
            &json!("data:application/octet-stream;base64,AQID"),
            TextEncoding::Utf8,
        )
        .unwrap();
        assert_eq!(v.as_bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn arrays_become_sequences() {
        let json = json!([
            { "ReferencedSOPInstanceUID": "1.2.3", "0008,1150": "1.2.840.10008.5.1.4.1.1.2" },
            {},
            [],
        ]);
        let v = json_to_value(tags::REFERENCED_IMAGE_SEQUENCE, VR::SQ, &json, TextEncoding::Utf8)
            .unwrap();
        let items = v.items().unwrap();
        assert_eq!(items.len(), 3);
        let uid = items[0].get(tags::REFERENCED_SOP_INSTANCE_UID).unwrap();
        assert_eq!(uid.vr(), VR::UI);
        assert_eq!(uid.to_str().as_deref(), Some("1.2.3"));
        assert!(items[1].is_empty());

        let err = json_to_value(tags::PATIENT_ID, VR::LO, &json!([]), TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        let err = json_to_value(tags::PATIENT_ID, VR::LO, &json!(5), TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
