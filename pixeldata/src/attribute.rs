//! Utility module for fetching key image attributes from a data set summary.

use dcmkit_core::Tag;
use dcmkit_dictionary_std::tags;
use dcmkit_object::DicomMap;
use snafu::{Backtrace, OptionExt, Snafu};

#[derive(Debug, Snafu)]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not parse attribute `{}` from `{}`", name, value))]
    ParseValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// Get the Columns from the summary
pub fn cols(map: &DicomMap) -> Result<u32> {
    retrieve_required_u32(map, tags::COLUMNS, "Columns")
}

/// Get the Rows from the summary
pub fn rows(map: &DicomMap) -> Result<u32> {
    retrieve_required_u32(map, tags::ROWS, "Rows")
}

/// Get the PhotometricInterpretation from the summary, in upper case
pub fn photometric_interpretation(map: &DicomMap) -> Result<String> {
    Ok(map
        .get_str(tags::PHOTOMETRIC_INTERPRETATION)
        .context(MissingRequiredFieldSnafu {
            name: "PhotometricInterpretation",
        })?
        .trim_matches(|c| c == ' ' || c == '\0')
        .to_ascii_uppercase())
}

/// Get the BitsAllocated from the summary
pub fn bits_allocated(map: &DicomMap) -> Result<u32> {
    retrieve_required_u32(map, tags::BITS_ALLOCATED, "BitsAllocated")
}

/// Get the SamplesPerPixel from the summary, returning 1 by default
pub fn samples_per_pixel(map: &DicomMap) -> Result<u32> {
    Ok(retrieve_optional_u32(map, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?.unwrap_or(1))
}

/// Get the PlanarConfiguration from the summary, returning 0 by default
pub fn planar_configuration(map: &DicomMap) -> Result<u32> {
    Ok(retrieve_optional_u32(map, tags::PLANAR_CONFIGURATION, "PlanarConfiguration")?.unwrap_or(0))
}

/// Get the BitsStored from the summary
pub fn bits_stored(map: &DicomMap) -> Result<Option<u32>> {
    retrieve_optional_u32(map, tags::BITS_STORED, "BitsStored")
}

/// Get the HighBit from the summary
pub fn high_bit(map: &DicomMap) -> Result<Option<u32>> {
    retrieve_optional_u32(map, tags::HIGH_BIT, "HighBit")
}

/// Get the NumberOfFrames from the summary, returning 1 by default
pub fn number_of_frames(map: &DicomMap) -> Result<u32> {
    Ok(retrieve_optional_u32(map, tags::NUMBER_OF_FRAMES, "NumberOfFrames")?.unwrap_or(1))
}

/// Get the SOPClassUID from the summary
pub fn sop_class_uid(map: &DicomMap) -> Option<&str> {
    map.get_str(tags::SOP_CLASS_UID)
        .map(|uid| uid.trim_matches(|c| c == ' ' || c == '\0'))
}

/// An interpreted representation of the DICOM _Pixel Representation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelRepresentation {
    /// unsigned pixel data sample values
    Unsigned,
    /// signed pixel data sample values
    Signed,
}

/// Get the PixelRepresentation from the summary, unsigned by default
pub fn pixel_representation(map: &DicomMap) -> Result<PixelRepresentation> {
    let p = retrieve_optional_u32(map, tags::PIXEL_REPRESENTATION, "PixelRepresentation")?;
    match p {
        None | Some(0) => Ok(PixelRepresentation::Unsigned),
        Some(_) => Ok(PixelRepresentation::Signed),
    }
}

/// Parse the first value of an unsigned integer attribute.
///
/// Some modalities write values such as `800\0`,
/// hence only the first value is considered.
fn parse_first_u32(text: &str) -> Option<u32> {
    text.split('\\')
        .next()
        .map(|v| v.trim_matches(|c| c == ' ' || c == '\0'))
        .and_then(|v| v.parse().ok())
}

#[inline]
fn retrieve_required_u32(map: &DicomMap, tag: Tag, name: &'static str) -> Result<u32> {
    retrieve_optional_u32(map, tag, name)?.context(MissingRequiredFieldSnafu { name })
}

#[inline]
fn retrieve_optional_u32(map: &DicomMap, tag: Tag, name: &'static str) -> Result<Option<u32>> {
    match map.get_str(tag) {
        None => Ok(None),
        Some(text) => parse_first_u32(text)
            .map(Some)
            .context(ParseValueSnafu { name, value: text }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_attributes() {
        let mut map = DicomMap::new();
        map.set_string(tags::COLUMNS, "800\\0");
        map.set_string(tags::ROWS, "600");
        map.set_string(tags::PHOTOMETRIC_INTERPRETATION, "monochrome2 ");
        map.set_string(tags::PIXEL_REPRESENTATION, "1");
        map.set_string(tags::HIGH_BIT, "eleven");

        assert_eq!(cols(&map).unwrap(), 800);
        assert_eq!(rows(&map).unwrap(), 600);
        assert_eq!(photometric_interpretation(&map).unwrap(), "MONOCHROME2");
        assert_eq!(pixel_representation(&map).unwrap(), PixelRepresentation::Signed);
        assert_eq!(samples_per_pixel(&map).unwrap(), 1);
        assert_eq!(number_of_frames(&map).unwrap(), 1);
        assert_eq!(bits_stored(&map).unwrap(), None);
        assert!(matches!(
            bits_allocated(&map),
            Err(GetAttributeError::MissingRequiredField { name: "BitsAllocated", .. })
        ));
        assert!(matches!(high_bit(&map), Err(GetAttributeError::ParseValue { .. })));
    }
}
