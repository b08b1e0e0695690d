//! The transfer syntaxes known to the toolkit.
//!
//! Only the three native encodings are interpreted byte-wise.
//! The compressed syntaxes share the explicit VR little endian
//! data set encoding and keep their pixel data encapsulated.
use std::fmt;

/// A DICOM transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian
    LittleEndianImplicit,
    /// Explicit VR Little Endian
    LittleEndianExplicit,
    /// Deflated Explicit VR Little Endian
    DeflatedLittleEndianExplicit,
    /// Explicit VR Big Endian (retired)
    BigEndianExplicit,
    /// JPEG Baseline (Process 1)
    JpegProcess1,
    /// JPEG Extended (Process 2 & 4)
    JpegProcess2And4,
    /// JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)
    JpegProcess6And8,
    /// JPEG Full Progression, Non-Hierarchical (Process 10 & 12)
    JpegProcess10And12,
    /// JPEG Lossless, Non-Hierarchical (Process 14)
    JpegProcess14,
    /// JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14, Selection Value 1)
    JpegProcess14Sv1,
    /// JPEG-LS Lossless
    JpegLsLossless,
    /// JPEG-LS Lossy (Near-Lossless)
    JpegLsNearLossless,
    /// JPEG 2000 Image Compression (Lossless Only)
    Jpeg2000Lossless,
    /// JPEG 2000 Image Compression
    Jpeg2000,
    /// RLE Lossless
    RleLossless,
}

static ALL: &[TransferSyntax] = &[
    TransferSyntax::LittleEndianImplicit,
    TransferSyntax::LittleEndianExplicit,
    TransferSyntax::DeflatedLittleEndianExplicit,
    TransferSyntax::BigEndianExplicit,
    TransferSyntax::JpegProcess1,
    TransferSyntax::JpegProcess2And4,
    TransferSyntax::JpegProcess6And8,
    TransferSyntax::JpegProcess10And12,
    TransferSyntax::JpegProcess14,
    TransferSyntax::JpegProcess14Sv1,
    TransferSyntax::JpegLsLossless,
    TransferSyntax::JpegLsNearLossless,
    TransferSyntax::Jpeg2000Lossless,
    TransferSyntax::Jpeg2000,
    TransferSyntax::RleLossless,
];

impl TransferSyntax {
    /// Iterate over every known transfer syntax.
    pub fn all() -> impl Iterator<Item = TransferSyntax> {
        ALL.iter().copied()
    }

    /// The unique identifier of this transfer syntax.
    pub fn uid(self) -> &'static str {
        use TransferSyntax::*;
        match self {
            LittleEndianImplicit => "1.2.840.10008.1.2",
            LittleEndianExplicit => "1.2.840.10008.1.2.1",
            DeflatedLittleEndianExplicit => "1.2.840.10008.1.2.1.99",
            BigEndianExplicit => "1.2.840.10008.1.2.2",
            JpegProcess1 => "1.2.840.10008.1.2.4.50",
            JpegProcess2And4 => "1.2.840.10008.1.2.4.51",
            JpegProcess6And8 => "1.2.840.10008.1.2.4.53",
            JpegProcess10And12 => "1.2.840.10008.1.2.4.55",
            JpegProcess14 => "1.2.840.10008.1.2.4.57",
            JpegProcess14Sv1 => "1.2.840.10008.1.2.4.70",
            JpegLsLossless => "1.2.840.10008.1.2.4.80",
            JpegLsNearLossless => "1.2.840.10008.1.2.4.81",
            Jpeg2000Lossless => "1.2.840.10008.1.2.4.90",
            Jpeg2000 => "1.2.840.10008.1.2.4.91",
            RleLossless => "1.2.840.10008.1.2.5",
        }
    }

    /// Look up a transfer syntax by its UID.
    ///
    /// Trailing padding (space or NUL) is ignored.
    pub fn from_uid(uid: &str) -> Option<Self> {
        let uid = uid.trim_end_matches(|c| c == '\0' || c == ' ').trim();
        ALL.iter().copied().find(|ts| ts.uid() == uid)
    }

    /// Whether data elements declare their VR in this transfer syntax.
    pub fn is_explicit_vr(self) -> bool {
        self != TransferSyntax::LittleEndianImplicit
    }

    /// Whether multi-byte values are encoded in big endian.
    pub fn is_big_endian(self) -> bool {
        self == TransferSyntax::BigEndianExplicit
    }

    /// Whether the pixel data is encapsulated in compressed fragments.
    pub fn is_encapsulated(self) -> bool {
        use TransferSyntax::*;
        !matches!(
            self,
            LittleEndianImplicit
                | LittleEndianExplicit
                | DeflatedLittleEndianExplicit
                | BigEndianExplicit
        )
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.uid())
    }
}

#[cfg(test)]
mod tests {
    use super::TransferSyntax;

    #[test]
    fn uid_lookup() {
        for ts in TransferSyntax::all() {
            assert_eq!(TransferSyntax::from_uid(ts.uid()), Some(ts));
        }
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1\0"),
            Some(TransferSyntax::LittleEndianExplicit)
        );
        assert_eq!(TransferSyntax::from_uid("1.2.3"), None);
    }

    #[test]
    fn encoding_properties() {
        assert!(!TransferSyntax::LittleEndianImplicit.is_explicit_vr());
        assert!(TransferSyntax::RleLossless.is_explicit_vr());
        assert!(TransferSyntax::BigEndianExplicit.is_big_endian());
        assert!(!TransferSyntax::Jpeg2000.is_big_endian());
        assert!(TransferSyntax::JpegProcess14Sv1.is_encapsulated());
        assert!(!TransferSyntax::LittleEndianExplicit.is_encapsulated());
    }
}
