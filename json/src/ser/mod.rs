//! DICOMweb JSON serialization module
//!
//! The JSON tree is built by [`DicomWebJsonVisitor`],
//! a [`TagVisitor`] fed through a read-only walk of the data set.

use std::fmt;
use std::io::Write;

use base64::Engine;
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_object::{walk, Action, DefaultDicomObject, InMemDicomObject, InMemElement, TagVisitor};
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value as JsonValue};
use tracing::warn;

use self::value::{format_double, format_integer, format_tag, is_multi_valued, text_component, Component};

pub(crate) mod value;

/// How a binary value is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryMode {
    /// leave the attribute out
    Ignore,
    /// refer to the value through this URI
    BulkDataUri(String),
    /// embed the value in base64
    InlineBinary,
}

/// Decides how each binary attribute (OB, OD, OF, OL, OV, OW, UN)
/// is presented.
///
/// Closures with the same signature as [`format`](BinaryFormatter::format)
/// are binary formatters.
pub trait BinaryFormatter {
    fn format(&mut self, parent_tags: &[Tag], parent_indexes: &[usize], tag: Tag, vr: VR)
        -> BinaryMode;
}

impl<F> BinaryFormatter for F
where
    F: FnMut(&[Tag], &[usize], Tag, VR) -> BinaryMode,
{
    fn format(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
    ) -> BinaryMode {
        self(parent_tags, parent_indexes, tag, vr)
    }
}

/// Refers to every binary attribute by a URI
/// made of a base URI followed by the path to the attribute,
/// as in `{base}/00081140/0/00281201`.
#[derive(Debug, Clone)]
pub struct BulkDataUriFormatter {
    base: String,
}

impl BulkDataUriFormatter {
    pub fn new(base: impl Into<String>) -> Self {
        BulkDataUriFormatter { base: base.into() }
    }
}

impl BinaryFormatter for BulkDataUriFormatter {
    fn format(&mut self, parent_tags: &[Tag], parent_indexes: &[usize], tag: Tag, _: VR) -> BinaryMode {
        let mut uri = self.base.trim_end_matches('/').to_string();
        for (t, i) in parent_tags.iter().zip(parent_indexes) {
            uri.push_str(&format!("/{}/{}", format_tag(*t, false), i));
        }
        uri.push('/');
        uri.push_str(&format_tag(tag, false));
        BinaryMode::BulkDataUri(uri)
    }
}

/// Options of the DICOMweb JSON conversion.
///
/// By default binary values are inlined in base64
/// and tags are written in upper case hexadecimal.
#[derive(Default)]
#[non_exhaustive]
pub struct DicomJsonOptions {
    /// decides how binary values are presented
    pub binary_formatter: Option<Box<dyn BinaryFormatter>>,
    /// write the tag keys in lower case hexadecimal
    pub lowercase_keys: bool,
}

impl fmt::Debug for DicomJsonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DicomJsonOptions")
            .field("binary_formatter", &self.binary_formatter.is_some())
            .field("lowercase_keys", &self.lowercase_keys)
            .finish()
    }
}

impl DicomJsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binary formatter.
    pub fn binary_formatter<F>(mut self, formatter: F) -> Self
    where
        F: BinaryFormatter + 'static,
    {
        self.binary_formatter = Some(Box::new(formatter));
        self
    }

    /// Write the tag keys in lower case.
    pub fn lowercase_keys(mut self, lowercase: bool) -> Self {
        self.lowercase_keys = lowercase;
        self
    }
}

/// Builds the DICOMweb JSON tree of the data sets it visits.
///
/// Several data sets can be visited in a row,
/// their attributes then end up in the same JSON object.
#[derive(Debug, Default)]
pub struct DicomWebJsonVisitor {
    result: Map<String, JsonValue>,
    options: DicomJsonOptions,
}

/// Get the item at the end of the given sequence steps,
/// creating the missing sequences and items along the way.
fn item_mut<'a>(
    mut node: &'a mut Map<String, JsonValue>,
    parent_tags: &[Tag],
    parent_indexes: &[usize],
    lowercase: bool,
) -> Option<&'a mut Map<String, JsonValue>> {
    for (&tag, &index) in parent_tags.iter().zip(parent_indexes) {
        let sequence = node
            .entry(format_tag(tag, lowercase))
            .or_insert_with(|| json!({ "vr": "SQ" }));
        let items = sequence
            .as_object_mut()?
            .entry("Value")
            .or_insert_with(|| JsonValue::Array(Vec::new()))
            .as_array_mut()?;
        while items.len() <= index {
            items.push(JsonValue::Object(Map::new()));
        }
        node = items[index].as_object_mut()?;
    }
    Some(node)
}

impl DicomWebJsonVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DicomJsonOptions) -> Self {
        DicomWebJsonVisitor {
            result: Map::new(),
            options,
        }
    }

    /// Add the attributes of a data set.
    pub fn visit(&mut self, obj: &InMemDicomObject) {
        walk(obj, self);
    }

    /// Add the attributes of a file,
    /// starting with those of its file meta group.
    pub fn visit_file(&mut self, obj: &DefaultDicomObject) {
        let meta = InMemDicomObject::from_element_iter(
            obj.meta()
                .elements()
                .iter()
                .map(|e| InMemElement::new(e.tag, e.vr, e.value.clone())),
        );
        walk(&meta, self);
        walk(&**obj, self);
    }

    /// The JSON tree built so far.
    pub fn result(&self) -> &Map<String, JsonValue> {
        &self.result
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.result)
    }

    /// Forget the attributes visited so far.
    pub fn clear(&mut self) {
        self.result.clear();
    }

    fn binary_mode(&mut self, parent_tags: &[Tag], parent_indexes: &[usize], tag: Tag, vr: VR) -> BinaryMode {
        match &mut self.options.binary_formatter {
            Some(formatter) => formatter.format(parent_tags, parent_indexes, tag, vr),
            None => BinaryMode::InlineBinary,
        }
    }

    /// Create the node of an attribute, holding only its VR.
    fn create_node(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
    ) -> Option<&mut Map<String, JsonValue>> {
        let lowercase = self.options.lowercase_keys;
        let Some(parent) = item_mut(&mut self.result, parent_tags, parent_indexes, lowercase)
        else {
            warn!("Cannot place DICOM tag {} in the JSON tree", tag);
            return None;
        };
        let key = format_tag(tag, lowercase);
        let mut node = Map::new();
        node.insert("vr".to_string(), JsonValue::from(vr.to_string()));
        parent.insert(key.clone(), JsonValue::Object(node));
        parent.get_mut(&key).and_then(JsonValue::as_object_mut)
    }

    fn add_values(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        values: Vec<JsonValue>,
    ) {
        if let Some(node) = self.create_node(parent_tags, parent_indexes, tag, vr) {
            if !values.is_empty() {
                node.insert("Value".to_string(), JsonValue::Array(values));
            }
        }
    }
}

fn is_group_length(tag: Tag) -> bool {
    tag.element() == 0x0000
}

impl TagVisitor for DicomWebJsonVisitor {
    fn visit_not_supported(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
    ) -> Action {
        // encapsulated pixel data can only be referred to
        if let BinaryMode::BulkDataUri(uri) = self.binary_mode(parent_tags, parent_indexes, tag, vr) {
            if let Some(node) = self.create_node(parent_tags, parent_indexes, tag, vr) {
                node.insert("BulkDataURI".to_string(), JsonValue::from(uri));
            }
        }
        Action::None
    }

    fn visit_sequence(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        count_items: usize,
    ) -> Action {
        if is_group_length(tag) {
            return Action::None;
        }
        if let Some(node) = self.create_node(parent_tags, parent_indexes, tag, VR::SQ) {
            if count_items > 0 {
                let items = vec![JsonValue::Object(Map::new()); count_items];
                node.insert("Value".to_string(), JsonValue::Array(items));
            }
        }
        Action::None
    }

    fn visit_binary(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        data: &[u8],
    ) -> Action {
        if is_group_length(tag) {
            return Action::None;
        }
        let mode = self.binary_mode(parent_tags, parent_indexes, tag, vr);
        if mode == BinaryMode::Ignore {
            return Action::None;
        }
        if let Some(node) = self.create_node(parent_tags, parent_indexes, tag, vr) {
            if !data.is_empty() || tag == tags::PIXEL_DATA {
                match mode {
                    BinaryMode::BulkDataUri(uri) => {
                        node.insert("BulkDataURI".to_string(), JsonValue::from(uri));
                    }
                    BinaryMode::InlineBinary => {
                        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
                        node.insert("InlineBinary".to_string(), JsonValue::from(encoded));
                    }
                    BinaryMode::Ignore => {}
                }
            }
        }
        Action::None
    }

    fn visit_integers(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        values: &[i64],
    ) -> Action {
        if !is_group_length(tag) {
            let values = values.iter().copied().map(format_integer).collect();
            self.add_values(parent_tags, parent_indexes, tag, vr, values);
        }
        Action::None
    }

    fn visit_doubles(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        values: &[f64],
    ) -> Action {
        if !is_group_length(tag) {
            let values = values.iter().copied().map(format_double).collect();
            self.add_values(parent_tags, parent_indexes, tag, vr, values);
        }
        Action::None
    }

    fn visit_attributes(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        values: &[Tag],
    ) -> Action {
        if !is_group_length(tag) {
            let values = values
                .iter()
                .map(|t| JsonValue::from(format_tag(*t, false)))
                .collect();
            self.add_values(parent_tags, parent_indexes, tag, VR::AT, values);
        }
        Action::None
    }

    fn visit_string(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        vr: VR,
        value: &str,
    ) -> Action {
        if is_group_length(tag) {
            return Action::None;
        }

        let value = value.trim_end_matches(|c| c == '\0' || c == ' ');
        let mut values = Vec::new();
        if !value.is_empty() {
            let mut tokens: Vec<&str> = if is_multi_valued(vr) {
                value.split('\\').collect()
            } else {
                vec![value]
            };
            // code extensions leave the default repertoire unnamed
            if tag == tags::SPECIFIC_CHARACTER_SET && tokens.len() > 1 && tokens[0].is_empty() {
                tokens.remove(0);
            }
            for token in tokens {
                match text_component(vr, token) {
                    Component::Value(v) => values.push(v),
                    Component::Invalid => warn!(
                        "Ignoring DICOM tag {} with invalid content for VR {}: {}",
                        tag, vr, token
                    ),
                }
            }
        }
        self.add_values(parent_tags, parent_indexes, tag, vr, values);
        Action::None
    }
}

/// A DICOM data set or file which can be presented as DICOMweb JSON.
pub trait JsonSource {
    /// Hand the attributes over to the visitor.
    fn visit_with(&self, visitor: &mut DicomWebJsonVisitor);
}

impl JsonSource for InMemDicomObject {
    fn visit_with(&self, visitor: &mut DicomWebJsonVisitor) {
        visitor.visit(self);
    }
}

/// Files include the attributes of their file meta group.
/// To exclude them, dereference the file into its data set
/// (e.g. via `&*obj`).
impl JsonSource for DefaultDicomObject {
    fn visit_with(&self, visitor: &mut DicomWebJsonVisitor) {
        visitor.visit_file(self);
    }
}

impl<T> JsonSource for &T
where
    T: JsonSource + ?Sized,
{
    fn visit_with(&self, visitor: &mut DicomWebJsonVisitor) {
        (**self).visit_with(visitor);
    }
}

/// A wrapper type for DICOM data
/// which serializes it as DICOMweb JSON through [Serde](serde).
#[derive(Debug, Clone, PartialEq)]
pub struct DicomJson<T>(T);

impl<T> DicomJson<T> {
    /// Unwrap the DICOM JSON wrapper,
    /// returning the underlying value.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Obtain a reference to the underlying value.
    pub fn inner(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for DicomJson<T>
where
    T: JsonSource,
{
    fn from(value: T) -> Self {
        DicomJson(value)
    }
}

impl<T> Serialize for DicomJson<T>
where
    T: JsonSource,
{
    /// Serializes the DICOM data as a JSON map
    /// containing one entry per data element, indexed by tag.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        build_value(&self.0, DicomJsonOptions::default()).serialize(serializer)
    }
}

fn build_value<T>(data: &T, options: DicomJsonOptions) -> JsonValue
where
    T: JsonSource + ?Sized,
{
    let mut visitor = DicomWebJsonVisitor::with_options(options);
    data.visit_with(&mut visitor);
    visitor.into_value()
}

/// Convert a piece of DICOM data into a serde JSON value.
pub fn to_value<T>(data: &T) -> JsonValue
where
    T: JsonSource + ?Sized,
{
    build_value(data, DicomJsonOptions::default())
}

/// Convert a piece of DICOM data into a serde JSON value,
/// with the given options.
pub fn to_value_with<T>(data: &T, options: DicomJsonOptions) -> JsonValue
where
    T: JsonSource + ?Sized,
{
    build_value(data, options)
}

/// Serialize a piece of DICOM data as a string of JSON.
pub fn to_string<T>(data: &T) -> Result<String, serde_json::Error>
where
    T: JsonSource + ?Sized,
{
    serde_json::to_string(&to_value(data))
}

/// Serialize a piece of DICOM data as a pretty-printed string of JSON.
pub fn to_string_pretty<T>(data: &T) -> Result<String, serde_json::Error>
where
    T: JsonSource + ?Sized,
{
    serde_json::to_string_pretty(&to_value(data))
}

/// Serialize a piece of DICOM data to a vector of bytes.
pub fn to_vec<T>(data: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: JsonSource + ?Sized,
{
    serde_json::to_vec(&to_value(data))
}

/// Serialize a piece of DICOM data to a byte writer.
pub fn to_writer<W, T>(writer: W, data: &T) -> Result<(), serde_json::Error>
where
    W: Write,
    T: JsonSource + ?Sized,
{
    serde_json::to_writer(writer, &to_value(data))
}
