//! DICOMweb XML ("native DICOM model") serialization.
//!
//! The XML document is written from the DICOMweb JSON tree,
//! so both representations always carry the same attributes.
use std::io::Write;

use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::Tag;
use dcmkit_dictionary_std::StandardDataDictionary;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::{Map, Value as JsonValue};
use snafu::{OptionExt, ResultExt};

use crate::ser::{DicomJsonOptions, DicomWebJsonVisitor, JsonSource};
use crate::{InvalidTreeSnafu, Result, Utf8Snafu, WriteXmlSnafu};

/// The namespace of the native DICOM model.
pub const NATIVE_DICOM_MODEL_NAMESPACE: &str = "http://dicom.nema.org/PS3.19/models/NativeDICOM";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

const NAME_COMPONENTS: [&str; 5] = [
    "FamilyName",
    "GivenName",
    "MiddleName",
    "NamePrefix",
    "NameSuffix",
];

struct XmlWriter<W: Write> {
    writer: Writer<W>,
    dict: StandardDataDictionary,
}

impl<W: Write> XmlWriter<W> {
    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.writer
            .write_event(Event::Start(element))
            .context(WriteXmlSnafu)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .context(WriteXmlSnafu)
    }

    fn empty(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.writer
            .write_event(Event::Empty(element))
            .context(WriteXmlSnafu)
    }

    /// Write an element holding only text.
    fn text_element(&mut self, element: BytesStart<'_>, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.empty(element);
        }
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        self.start(element)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .context(WriteXmlSnafu)?;
        self.end(&name)
    }

    fn document(&mut self, tree: &Map<String, JsonValue>) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .context(WriteXmlSnafu)?;

        let mut root = BytesStart::new("NativeDicomModel");
        root.push_attribute(("xmlns", NATIVE_DICOM_MODEL_NAMESPACE));
        root.push_attribute(("xsi:schemaLocation", NATIVE_DICOM_MODEL_NAMESPACE));
        root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        self.start(root)?;
        self.dataset(tree)?;
        self.end("NativeDicomModel")
    }

    fn dataset(&mut self, tree: &Map<String, JsonValue>) -> Result<()> {
        for (key, node) in tree {
            self.attribute(key, node)?;
        }
        Ok(())
    }

    fn attribute(&mut self, key: &str, node: &JsonValue) -> Result<()> {
        let node = node.as_object().context(InvalidTreeSnafu {
            reason: format!("attribute {} is not an object", key),
        })?;
        let vr = node.get("vr").and_then(JsonValue::as_str).context(InvalidTreeSnafu {
            reason: format!("attribute {} has no VR", key),
        })?;

        let tag = u32::from_str_radix(key, 16).ok().filter(|_| key.len() == 8).context(
            InvalidTreeSnafu {
                reason: format!("`{}` is not a tag", key),
            },
        )?;
        let tag = Tag((tag >> 16) as u16, (tag & 0xFFFF) as u16);

        let mut element = BytesStart::new("DicomAttribute");
        element.push_attribute(("tag", key.to_ascii_uppercase().as_str()));
        element.push_attribute(("vr", vr));
        if let Some(keyword) = self.dict.alias_of(tag) {
            element.push_attribute(("keyword", keyword));
        }

        let values = node.get("Value").and_then(JsonValue::as_array);
        let bulk_data = node.get("BulkDataURI").and_then(JsonValue::as_str);
        let inline = node.get("InlineBinary").and_then(JsonValue::as_str);
        if values.is_none() && bulk_data.is_none() && inline.is_none() {
            return self.empty(element);
        }

        self.start(element)?;
        for (i, value) in values.into_iter().flatten().enumerate() {
            let number = (i + 1).to_string();
            match vr {
                "SQ" => {
                    let mut item = BytesStart::new("Item");
                    item.push_attribute(("number", number.as_str()));
                    self.start(item)?;
                    if let Some(tree) = value.as_object() {
                        self.dataset(tree)?;
                    }
                    self.end("Item")?;
                }
                "PN" => self.person_name(&number, value)?,
                _ => {
                    let mut element = BytesStart::new("Value");
                    element.push_attribute(("number", number.as_str()));
                    let text = match value {
                        JsonValue::String(s) => s.clone(),
                        JsonValue::Number(n) => n.to_string(),
                        _ => String::new(),
                    };
                    self.text_element(element, &text)?;
                }
            }
        }
        if let Some(uri) = bulk_data {
            let mut element = BytesStart::new("BulkData");
            element.push_attribute(("URI", uri));
            self.empty(element)?;
        }
        if let Some(data) = inline {
            self.text_element(BytesStart::new("InlineBinary"), data)?;
        }
        self.end("DicomAttribute")
    }

    fn person_name(&mut self, number: &str, value: &JsonValue) -> Result<()> {
        let mut element = BytesStart::new("PersonName");
        element.push_attribute(("number", number));
        let groups = match value.as_object() {
            Some(groups) if !groups.is_empty() => groups,
            _ => return self.empty(element),
        };

        self.start(element)?;
        for group in ["Alphabetic", "Ideographic", "Phonetic"] {
            let Some(name) = groups.get(group).and_then(JsonValue::as_str) else {
                continue;
            };
            self.start(BytesStart::new(group))?;
            for (component, text) in NAME_COMPONENTS.into_iter().zip(name.split('^')) {
                self.text_element(BytesStart::new(component), text)?;
            }
            self.end(group)?;
        }
        self.end("PersonName")
    }
}

/// Write a DICOMweb JSON tree as a native DICOM model XML document.
pub fn json_to_xml_writer<W>(writer: W, tree: &Map<String, JsonValue>) -> Result<()>
where
    W: Write,
{
    let mut xml = XmlWriter {
        writer: Writer::new_with_indent(writer, b' ', 2),
        dict: StandardDataDictionary,
    };
    xml.document(tree)
}

/// Convert a DICOMweb JSON tree into a native DICOM model XML document.
pub fn json_to_xml(tree: &Map<String, JsonValue>) -> Result<String> {
    let mut out = Vec::new();
    json_to_xml_writer(&mut out, tree)?;
    String::from_utf8(out).context(Utf8Snafu)
}

/// Serialize a piece of DICOM data as a native DICOM model XML document.
pub fn to_xml_string<T>(data: &T) -> Result<String>
where
    T: JsonSource + ?Sized,
{
    to_xml_string_with(data, DicomJsonOptions::default())
}

/// Serialize a piece of DICOM data as a native DICOM model XML document,
/// with the given options.
pub fn to_xml_string_with<T>(data: &T, options: DicomJsonOptions) -> Result<String>
where
    T: JsonSource + ?Sized,
{
    let mut visitor = DicomWebJsonVisitor::with_options(options);
    data.visit_with(&mut visitor);
    json_to_xml(visitor.result())
}

/// Serialize a piece of DICOM data as XML to a byte writer.
pub fn to_xml_writer<W, T>(writer: W, data: &T) -> Result<()>
where
    W: Write,
    T: JsonSource + ?Sized,
{
    let mut visitor = DicomWebJsonVisitor::new();
    data.visit_with(&mut visitor);
    json_to_xml_writer(writer, visitor.result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;
    use dcmkit_dictionary_std::tags;
    use dcmkit_object::{InMemDicomObject, InMemElement, Value};
    use serde_json::json;

    #[test]
    fn write_native_dicom_model() {
        let obj = InMemDicomObject::from_element_iter(vec![
            InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John^^Dr=ドウ^ジョン"),
            InMemElement::new(tags::PIXEL_SPACING, VR::DS, "0.5\\\\0.5"),
            InMemElement::new(
                tags::REFERENCED_IMAGE_SEQUENCE,
                VR::SQ,
                vec![InMemDicomObject::from_element_iter(vec![InMemElement::new(
                    tags::REFERENCED_SOP_INSTANCE_UID,
                    VR::UI,
                    "1.2.3",
                )])],
            ),
            InMemElement::new(tags::PIXEL_DATA, VR::OB, Value::from(vec![1u8, 2])),
        ]);

        let xml = to_xml_string(&obj).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(xml.contains(
            r#"<NativeDicomModel xmlns="http://dicom.nema.org/PS3.19/models/NativeDICOM" xsi:schemaLocation="http://dicom.nema.org/PS3.19/models/NativeDICOM" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));
        assert!(xml.contains(r#"<DicomAttribute tag="00100010" vr="PN" keyword="PatientName">"#));
        assert!(xml.contains("<FamilyName>Doe</FamilyName>"));
        assert!(xml.contains("<GivenName>John</GivenName>"));
        assert!(xml.contains("<MiddleName/>"));
        assert!(xml.contains("<NamePrefix>Dr</NamePrefix>"));
        assert!(xml.contains("<Ideographic>"));
        assert!(xml.contains("<FamilyName>ドウ</FamilyName>"));
        assert!(xml.contains(r#"<Value number="1">0.5</Value>"#));
        assert!(xml.contains(r#"<Value number="2"/>"#));
        assert!(xml.contains(r#"<Value number="3">0.5</Value>"#));
        assert!(xml.contains(r#"<Item number="1">"#));
        assert!(xml.contains(r#"<Value number="1">1.2.3</Value>"#));
        assert!(xml.contains("<InlineBinary>AQI=</InlineBinary>"));
        assert!(xml.trim_end().ends_with("</NativeDicomModel>"));
    }

    #[test]
    fn bulk_data_and_escaping() {
        let tree = json!({
            "00081030": { "vr": "LO", "Value": ["R&D <test>"] },
            "7FE00010": { "vr": "OW", "BulkDataURI": "http://host/bulk?a=1&b=2" },
            "00100020": { "vr": "LO" },
        });
        let xml = json_to_xml(tree.as_object().unwrap()).unwrap();
        assert!(xml.contains("R&amp;D &lt;test&gt;"));
        assert!(xml.contains(r#"<BulkData URI="http://host/bulk?a=1&amp;b=2"/>"#));
        assert!(xml.contains(r#"<DicomAttribute tag="00100020" vr="LO" keyword="PatientID"/>"#));
    }

    #[test]
    fn malformed_trees_are_refused() {
        let tree = json!({ "0010": { "vr": "LO" } });
        let err = json_to_xml(tree.as_object().unwrap()).unwrap_err();
        assert_eq!(err.kind(), dcmkit_core::ErrorKind::InternalError);

        let tree = json!({ "00100020": { "Value": ["x"] } });
        assert!(json_to_xml(tree.as_object().unwrap()).is_err());
    }
}
