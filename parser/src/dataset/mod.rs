//! Token-based reading and writing of a complete DICOM data set.
//!
//! A data set is flattened into a sequence of [`DataToken`]s:
//! primitive elements are a header followed by their value,
//! while sequences and encapsulated pixel data
//! are delimited by start and end tokens enclosing their items.
//!
//! [`DataSetReader`] turns a byte source into tokens,
//! and [`DataSetWriter`] turns tokens back into bytes
//! in any of the native transfer syntaxes.
use dcmkit_core::{Length, Tag, VR};
use std::fmt;

pub mod read;
pub mod write;

pub use self::read::DataSetReader;
pub use self::write::DataSetWriter;

/// The header of a primitive data element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataElementHeader {
    pub tag: Tag,
    pub vr: VR,
    pub len: Length,
}

impl DataElementHeader {
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> Self {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }
}

/// A token of a DICOM data set stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DataToken {
    /// The header of a primitive element, its value comes next
    ElementHeader(DataElementHeader),
    /// The start of a sequence of items
    SequenceStart { tag: Tag, len: Length },
    /// The start of an encapsulated pixel data element
    PixelSequenceStart,
    /// The start of a sequence item
    ItemStart { len: Length },
    /// The end of a sequence item
    ItemEnd,
    /// The end of a sequence or of encapsulated pixel data
    SequenceEnd,
    /// The value of a primitive element,
    /// with numeric values in little endian byte order
    PrimitiveValue(Vec<u8>),
    /// A fragment of encapsulated pixel data
    /// (the first one being the basic offset table)
    ItemValue(Vec<u8>),
}

impl fmt::Display for DataToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataToken::ElementHeader(header) => {
                write!(f, "ElementHeader({} {} {})", header.tag, header.vr, header.len)
            }
            DataToken::SequenceStart { tag, len } => write!(f, "SequenceStart({} {})", tag, len),
            DataToken::PixelSequenceStart => f.write_str("PixelSequenceStart"),
            DataToken::ItemStart { len } => write!(f, "ItemStart({})", len),
            DataToken::ItemEnd => f.write_str("ItemEnd"),
            DataToken::SequenceEnd => f.write_str("SequenceEnd"),
            DataToken::PrimitiveValue(value) => write!(f, "PrimitiveValue({} bytes)", value.len()),
            DataToken::ItemValue(value) => write!(f, "ItemValue({} bytes)", value.len()),
        }
    }
}

/// The item delimiters, always encoded in implicit VR.
pub(crate) const ITEM: Tag = Tag(0xFFFE, 0xE000);
pub(crate) const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
pub(crate) const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
pub(crate) const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Whether the value length of this VR takes 4 bytes in explicit VR.
pub(crate) fn has_long_length(vr: VR) -> bool {
    !vr.is_short_explicit()
}
