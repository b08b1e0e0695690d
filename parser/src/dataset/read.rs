//! Reading a data set as a stream of tokens.
use super::{
    has_long_length, DataElementHeader, DataToken, ITEM, ITEM_DELIMITER, PIXEL_DATA,
    SEQUENCE_DELIMITER,
};
use crate::error::{
    DelimiterLengthSnafu, NonZeroReservedBytesSnafu, ReadSourceSnafu, Result,
    UndefinedLengthSnafu, UnexpectedDelimiterSnafu, UnexpectedEndSnafu, UnexpectedItemTagSnafu,
    UnsupportedTransferSyntaxSnafu,
};
use crate::value::{read_tag, read_u16, read_u32, swap_bytes};
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{Length, Tag, TransferSyntax, VR};
use dcmkit_dictionary_std::StandardDataDictionary;
use snafu::{OptionExt, ResultExt};
use std::io::{ErrorKind, Read};
use tracing::warn;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SeqTokenType {
    Sequence,
    Item,
}

/// An open sequence or item, kept in a stack while reading.
#[derive(Debug, Copy, Clone)]
struct SeqToken {
    typ: SeqTokenType,
    /// the length as declared in its header,
    /// which can be undefined
    len: Length,
    /// whether this token is part of an encapsulated pixel data element
    pixel_data: bool,
    /// the number of bytes read until the start of its content
    base_offset: u64,
}

impl SeqToken {
    /// Whether all of the content of this token was read,
    /// which can only be known for defined lengths.
    fn is_complete(&self, position: u64) -> bool {
        match self.len.get() {
            Some(len) => position >= self.base_offset + u64::from(len),
            None => false,
        }
    }
}

/// A reader of DICOM data set tokens over a byte source.
///
/// The source is expected to be positioned at the start of the data set,
/// right after the file meta information group.
/// Implicit VR elements take their value representation
/// from the given data dictionary,
/// falling back to `UN` for unknown attributes.
#[derive(Debug)]
pub struct DataSetReader<R, D = StandardDataDictionary> {
    source: R,
    dict: D,
    explicit_vr: bool,
    little_endian: bool,
    /// the number of bytes read so far
    position: u64,
    /// a stack of open sequences and items
    seq_tokens: Vec<SeqToken>,
    /// whether an item header (or sequence delimiter) is expected next
    in_sequence: bool,
    /// the header of the element whose value is expected next
    last_header: Option<DataElementHeader>,
    /// bytes taken from the source ahead of time,
    /// handed out before any other byte
    lookahead: Vec<u8>,
    /// fuse the iteration process if true
    hard_break: bool,
}

/// Values are read in chunks of at most this size,
/// so that a bogus length does not allocate more than the source holds.
const READ_CHUNK_SIZE: usize = 0x1_0000;

impl<R> DataSetReader<R>
where
    R: Read,
{
    /// Create a data set reader with the standard data dictionary.
    ///
    /// Fails if the transfer syntax is deflated,
    /// as inflating the data set is not supported.
    pub fn new(source: R, ts: TransferSyntax) -> Result<Self> {
        Self::new_with_dictionary(source, ts, StandardDataDictionary)
    }
}

impl<R, D> DataSetReader<R, D>
where
    R: Read,
    D: DataDictionary,
{
    /// Create a data set reader with the given data dictionary.
    pub fn new_with_dictionary(source: R, ts: TransferSyntax, dict: D) -> Result<Self> {
        if ts == TransferSyntax::DeflatedLittleEndianExplicit {
            return UnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail();
        }
        Ok(DataSetReader {
            source,
            dict,
            explicit_vr: ts.is_explicit_vr(),
            little_endian: !ts.is_big_endian(),
            position: 0,
            seq_tokens: Vec::new(),
            in_sequence: false,
            last_header: None,
            lookahead: Vec::new(),
            hard_break: false,
        })
    }

    /// The number of bytes read from the source so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The current nesting depth of sequences and items.
    pub fn depth(&self) -> usize {
        self.seq_tokens.len()
    }

    /// Retrieve the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Close sequences and items of defined length
    /// whose content was fully read.
    fn close_complete(&mut self) -> Option<DataToken> {
        let token = *self.seq_tokens.last()?;
        if !token.is_complete(self.position) {
            return None;
        }
        self.seq_tokens.pop();
        match token.typ {
            SeqTokenType::Item => {
                self.in_sequence = true;
                Some(DataToken::ItemEnd)
            }
            SeqTokenType::Sequence => {
                self.in_sequence = false;
                Some(DataToken::SequenceEnd)
            }
        }
    }

    /// Fill the buffer from the source,
    /// returning the number of bytes read,
    /// which is less than requested only at the end of the source.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut count = self.lookahead.len().min(buf.len());
        buf[..count].copy_from_slice(&self.lookahead[..count]);
        self.lookahead.drain(..count);
        while count < buf.len() {
            match self.source.read(&mut buf[count..]) {
                Ok(0) => break,
                Ok(n) => count += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e).context(ReadSourceSnafu),
            }
        }
        self.position += count as u64;
        Ok(count)
    }

    fn read_exact(&mut self, buf: &mut [u8], what: &'static str) -> Result<()> {
        if self.fill(buf)? < buf.len() {
            return UnexpectedEndSnafu { what }.fail();
        }
        Ok(())
    }

    fn read_value(&mut self, len: u32, what: &'static str) -> Result<Vec<u8>> {
        let len = len as usize;
        let mut value = Vec::with_capacity(len.min(READ_CHUNK_SIZE));
        while value.len() < len {
            let start = value.len();
            value.resize(start + (len - start).min(READ_CHUNK_SIZE), 0);
            self.read_exact(&mut value[start..], what)?;
        }
        Ok(value)
    }

    /// Whether the upcoming bytes hold an item tag,
    /// without consuming them.
    fn next_is_item(&mut self) -> Result<bool> {
        while self.lookahead.len() < 4 {
            let mut buf = [0u8; 4];
            let wanted = 4 - self.lookahead.len();
            match self.source.read(&mut buf[..wanted]) {
                Ok(0) => return Ok(false),
                Ok(n) => self.lookahead.extend_from_slice(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e).context(ReadSourceSnafu),
            }
        }
        Ok(read_tag(&self.lookahead[..4], self.little_endian) == ITEM)
    }

    /// Read an item header or delimiter, in implicit VR.
    fn read_item_header(&mut self) -> Result<(Tag, u32)> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf, "item header")?;
        Ok((
            read_tag(&buf[0..4], self.little_endian),
            read_u32(&buf[4..8], self.little_endian),
        ))
    }

    /// Read the next element header,
    /// or `None` if the source ended cleanly at the top level.
    fn read_header(&mut self) -> Result<Option<DataElementHeader>> {
        let mut buf = [0u8; 8];
        let count = self.fill(&mut buf[..4])?;
        if count == 0 && self.seq_tokens.is_empty() {
            return Ok(None);
        }
        if count < 4 {
            return UnexpectedEndSnafu {
                what: "element header",
            }
            .fail();
        }
        let tag = read_tag(&buf[0..4], self.little_endian);

        if !self.explicit_vr || tag.is_delimiter() {
            self.read_exact(&mut buf[4..8], "element length")?;
            let len = Length(read_u32(&buf[4..8], self.little_endian));
            let vr = if tag.is_delimiter() {
                VR::UN
            } else if len.is_undefined() && tag != PIXEL_DATA {
                VR::SQ
            } else {
                match self.dict.vr_of(tag) {
                    Some(vr) => vr,
                    // unknown attributes holding items are sequences
                    None if len.0 >= 8 && self.next_is_item()? => VR::SQ,
                    None => VR::UN,
                }
            };
            return Ok(Some(DataElementHeader { tag, vr, len }));
        }

        self.read_exact(&mut buf[4..6], "value representation")?;
        let vr_bytes = [buf[4], buf[5]];
        let known_vr = VR::from_binary(vr_bytes);
        if known_vr.is_none() {
            warn!("Unknown value representation {:?} at {}, read as UN", vr_bytes, tag);
        }
        // unknown VRs have two reserved bytes and a 32-bit length, like UN
        let vr = known_vr.unwrap_or(VR::UN);
        let len = if has_long_length(vr) {
            self.read_exact(&mut buf[..6], "element length")?;
            if known_vr.is_some() && (buf[0] != 0 || buf[1] != 0) {
                return NonZeroReservedBytesSnafu { tag }.fail();
            }
            read_u32(&buf[2..6], self.little_endian)
        } else {
            self.read_exact(&mut buf[6..8], "element length")?;
            u32::from(read_u16(&buf[6..8], self.little_endian))
        };
        let len = Length(len);
        // undefined length UN elements are sequences in implicit VR
        let vr = if vr == VR::UN && len.is_undefined() {
            VR::SQ
        } else {
            vr
        };
        Ok(Some(DataElementHeader { tag, vr, len }))
    }

    fn next_token(&mut self) -> Result<Option<DataToken>> {
        if let Some(token) = self.close_complete() {
            return Ok(Some(token));
        }

        if let Some(header) = self.last_header.take() {
            let len = header.len.get().context(UndefinedLengthSnafu { tag: header.tag })?;
            let mut value = self.read_value(len, "element value")?;
            if !self.little_endian {
                swap_bytes(&mut value, header.vr);
            }
            return Ok(Some(DataToken::PrimitiveValue(value)));
        }

        if self.in_sequence {
            let pixel_data = self.seq_tokens.last().map(|t| t.pixel_data).unwrap_or(false);
            let (tag, len) = self.read_item_header()?;
            return match tag {
                ITEM => {
                    self.in_sequence = false;
                    self.seq_tokens.push(SeqToken {
                        typ: SeqTokenType::Item,
                        len: Length(len),
                        pixel_data,
                        base_offset: self.position,
                    });
                    Ok(Some(DataToken::ItemStart { len: Length(len) }))
                }
                SEQUENCE_DELIMITER => {
                    if len != 0 {
                        return DelimiterLengthSnafu { tag, len }.fail();
                    }
                    self.seq_tokens.pop();
                    self.in_sequence = false;
                    Ok(Some(DataToken::SequenceEnd))
                }
                tag => UnexpectedItemTagSnafu { tag }.fail(),
            };
        }

        if let Some(SeqToken {
            typ: SeqTokenType::Item,
            pixel_data: true,
            len,
            ..
        }) = self.seq_tokens.last().copied()
        {
            let len = len.get().context(UndefinedLengthSnafu { tag: ITEM })?;
            let value = self.read_value(len, "pixel data fragment")?;
            return Ok(Some(DataToken::ItemValue(value)));
        }

        let header = match self.read_header()? {
            Some(header) => header,
            None => return Ok(None),
        };

        match header.tag {
            ITEM_DELIMITER => {
                if header.len.0 != 0 {
                    return DelimiterLengthSnafu {
                        tag: header.tag,
                        len: header.len.0,
                    }
                    .fail();
                }
                match self.seq_tokens.last() {
                    Some(SeqToken {
                        typ: SeqTokenType::Item,
                        ..
                    }) => {
                        self.seq_tokens.pop();
                        self.in_sequence = true;
                        Ok(Some(DataToken::ItemEnd))
                    }
                    _ => UnexpectedDelimiterSnafu { tag: header.tag }.fail(),
                }
            }
            SEQUENCE_DELIMITER | ITEM => UnexpectedDelimiterSnafu { tag: header.tag }.fail(),
            _ if header.vr == VR::SQ => {
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Sequence,
                    len: header.len,
                    pixel_data: false,
                    base_offset: self.position,
                });
                self.in_sequence = true;
                Ok(Some(DataToken::SequenceStart {
                    tag: header.tag,
                    len: header.len,
                }))
            }
            PIXEL_DATA if header.len.is_undefined() => {
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Sequence,
                    len: Length::UNDEFINED,
                    pixel_data: true,
                    base_offset: self.position,
                });
                self.in_sequence = true;
                Ok(Some(DataToken::PixelSequenceStart))
            }
            tag if header.len.is_undefined() => UndefinedLengthSnafu { tag }.fail(),
            _ => {
                self.last_header = Some(header);
                Ok(Some(DataToken::ElementHeader(header)))
            }
        }
    }
}

impl<R, D> Iterator for DataSetReader<R, D>
where
    R: Read,
    D: DataDictionary,
{
    type Item = Result<DataToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hard_break {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.hard_break = true;
                None
            }
            Err(e) => {
                self.hard_break = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataSetReader;
    use crate::dataset::{DataElementHeader, DataToken};
    use dcmkit_core::{ErrorKind, Length, Tag, TransferSyntax, VR};

    fn tokens(data: &[u8], ts: TransferSyntax) -> Vec<DataToken> {
        DataSetReader::new(data, ts)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn read_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0x2e, 0x00, 0x00, 0x00, // length: 28 + 18 = 46 (#= 2)
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x14, 0x00, 0x00, 0x00, // item length: 20 (#= 2)
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018, 6012) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x0a, 0x00, 0x00, 0x00, // item length: 10
            // -- 48 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 4
            // -- 58 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let tokens = tokens(DATA, TransferSyntax::LittleEndianExplicit);
        assert_eq!(
            tokens,
            vec![
                DataToken::SequenceStart {
                    tag: Tag(0x0018, 0x6011),
                    len: Length(46),
                },
                DataToken::ItemStart { len: Length(20) },
                DataToken::ElementHeader(DataElementHeader::new((0x0018, 0x6012), VR::US, Length(2))),
                DataToken::PrimitiveValue(vec![1, 0]),
                DataToken::ElementHeader(DataElementHeader::new((0x0018, 0x6014), VR::US, Length(2))),
                DataToken::PrimitiveValue(vec![2, 0]),
                DataToken::ItemEnd,
                DataToken::ItemStart { len: Length(10) },
                DataToken::ElementHeader(DataElementHeader::new((0x0018, 0x6012), VR::US, Length(2))),
                DataToken::PrimitiveValue(vec![4, 0]),
                DataToken::ItemEnd,
                DataToken::SequenceEnd,
                DataToken::ElementHeader(DataElementHeader::new((0x0020, 0x4000), VR::LT, Length(4))),
                DataToken::PrimitiveValue(b"TEST".to_vec()),
            ]
        );
    }

    #[test]
    fn read_sequence_implicit_undefined_length() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            0xff, 0xff, 0xff, 0xff, // undefined length
            // -- 8 --
            0xfe, 0xff, 0x00, 0xe0, 0xff, 0xff, 0xff, 0xff, // item, undefined length
            // -- 16 --
            0x20, 0x00, 0x0e, 0x00, 0x04, 0x00, 0x00, 0x00, // (0020,000E) SeriesInstanceUID
            b'1', b'.', b'2', 0x00,
            // -- 28 --
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item delimiter
            // -- 36 --
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence delimiter
            // -- 44 --
            0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, // (0010,0010) PatientName
            b'D', b'o', b'e', b' ',
        ];

        let mut reader = DataSetReader::new(DATA, TransferSyntax::LittleEndianImplicit).unwrap();
        let mut tokens = Vec::new();
        for token in &mut reader {
            tokens.push(token.unwrap().to_string());
        }
        // undefined lengths never compare equal, check the printed form
        assert_eq!(
            tokens,
            vec![
                "SequenceStart((0008,1115) U/L)",
                "ItemStart(U/L)",
                "ElementHeader((0020,000E) UI 4)",
                "PrimitiveValue(4 bytes)",
                "ItemEnd",
                "SequenceEnd",
                "ElementHeader((0010,0010) PN 4)",
                "PrimitiveValue(4 bytes)",
            ]
        );
        assert_eq!(reader.depth(), 0);
        assert_eq!(reader.position(), DATA.len() as u64);
    }

    #[test]
    fn read_empty_sequences() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0008,1140) SQ, length 0
            0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            // (0008,2112) SQ, undefined length, closed right away
            0x08, 0x00, 0x12, 0x21, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];

        let tokens: Vec<_> = tokens(DATA, TransferSyntax::LittleEndianExplicit)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            tokens,
            vec![
                "SequenceStart((0008,1140) 0)",
                "SequenceEnd",
                "SequenceStart((0008,2112) U/L)",
                "SequenceEnd",
            ]
        );
    }

    #[test]
    fn read_encapsulated_pixel_data() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0,0010) PixelData
            b'O', b'B', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, // undefined length
            // -- 12 -- empty offset table
            0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00,
            // -- 20 -- first fragment
            0xfe, 0xff, 0x00, 0xe0, 0x04, 0x00, 0x00, 0x00,
            0x99, 0x99, 0x99, 0x99,
            // -- 32 --
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];

        assert_eq!(
            tokens(DATA, TransferSyntax::RleLossless),
            vec![
                DataToken::PixelSequenceStart,
                DataToken::ItemStart { len: Length(0) },
                DataToken::ItemEnd,
                DataToken::ItemStart { len: Length(4) },
                DataToken::ItemValue(vec![0x99; 4]),
                DataToken::ItemEnd,
                DataToken::SequenceEnd,
            ]
        );
    }

    #[test]
    fn big_endian_values_come_out_little_endian() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0028,0010) Rows, US 512
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
            // (0028,1052) RescaleIntercept, DS "-1"
            0x00, 0x28, 0x10, 0x52, b'D', b'S', 0x00, 0x02, b'-', b'1',
        ];

        assert_eq!(
            tokens(DATA, TransferSyntax::BigEndianExplicit),
            vec![
                DataToken::ElementHeader(DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2))),
                DataToken::PrimitiveValue(vec![0x00, 0x02]),
                DataToken::ElementHeader(DataElementHeader::new((0x0028, 0x1052), VR::DS, Length(2))),
                DataToken::PrimitiveValue(b"-1".to_vec()),
            ]
        );
    }

    #[test]
    fn implicit_vr_of_unknown_attributes() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0009,0010) private creator
            0x09, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'A', b'C', b'M', b'E',
            // (0009,1001) private value
            0x09, 0x00, 0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
        ];

        let tokens = tokens(DATA, TransferSyntax::LittleEndianImplicit);
        assert_eq!(
            tokens[0],
            DataToken::ElementHeader(DataElementHeader::new((0x0009, 0x0010), VR::LO, Length(4)))
        );
        assert_eq!(
            tokens[2],
            DataToken::ElementHeader(DataElementHeader::new((0x0009, 0x1001), VR::UN, Length(2)))
        );
    }

    #[test]
    fn implicit_unknown_attribute_holding_items_is_a_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0009,1010) private, defined length 20
            0x09, 0x00, 0x10, 0x10, 0x14, 0x00, 0x00, 0x00,
            // -- 8 -- item, defined length 12
            0xfe, 0xff, 0x00, 0xe0, 0x0c, 0x00, 0x00, 0x00,
            // -- 16 -- (0020,000D) StudyInstanceUID
            0x20, 0x00, 0x0d, 0x00, 0x04, 0x00, 0x00, 0x00, b'1', b'.', b'2', 0x00,
            // -- 28 -- (0009,1011) private, not an item
            0x09, 0x00, 0x11, 0x10, 0x08, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
        ];

        let mut reader = DataSetReader::new(DATA, TransferSyntax::LittleEndianImplicit).unwrap();
        let tokens: Vec<_> = reader
            .by_ref()
            .map(|token| token.unwrap().to_string())
            .collect();
        assert_eq!(
            tokens,
            vec![
                "SequenceStart((0009,1010) 20)",
                "ItemStart(12)",
                "ElementHeader((0020,000D) UI 4)",
                "PrimitiveValue(4 bytes)",
                "ItemEnd",
                "SequenceEnd",
                "ElementHeader((0009,1011) UN 8)",
                "PrimitiveValue(8 bytes)",
            ]
        );
        assert_eq!(reader.depth(), 0);
        assert_eq!(reader.position(), DATA.len() as u64);
    }

    #[test]
    fn implicit_related_series_is_a_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0008,1250) RelatedSeriesSequence, defined length 20
            0x08, 0x00, 0x50, 0x12, 0x14, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x00, 0xe0, 0x0c, 0x00, 0x00, 0x00,
            0x20, 0x00, 0x0d, 0x00, 0x04, 0x00, 0x00, 0x00, b'1', b'.', b'2', 0x00,
        ];

        let tokens = tokens(DATA, TransferSyntax::LittleEndianImplicit);
        assert_eq!(
            tokens[0],
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1250),
                len: Length(20),
            }
        );
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn unknown_explicit_vr_is_read_as_un() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0009,1001) with VR "ZZ", reserved bytes, 32-bit length
            0x09, 0x00, 0x01, 0x10, b'Z', b'Z', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
            // (0010,0010) PatientName
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'D', b'o', b'e', b' ',
        ];

        assert_eq!(
            tokens(DATA, TransferSyntax::LittleEndianExplicit),
            vec![
                DataToken::ElementHeader(DataElementHeader::new((0x0009, 0x1001), VR::UN, Length(2))),
                DataToken::PrimitiveValue(vec![1, 2]),
                DataToken::ElementHeader(DataElementHeader::new((0x0010, 0x0010), VR::PN, Length(4))),
                DataToken::PrimitiveValue(b"Doe ".to_vec()),
            ]
        );
    }

    #[test]
    fn bogus_length_fails_at_the_end_of_data() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0009,1001) OB, length 0xFFFFFFFE
            0x09, 0x00, 0x01, 0x10, b'O', b'B', 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff,
            0x01, 0x02, 0x03, 0x04,
        ];

        let mut reader = DataSetReader::new(DATA, TransferSyntax::LittleEndianExplicit).unwrap();
        assert!(matches!(reader.next(), Some(Ok(DataToken::ElementHeader(_)))));
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn truncated_value_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00, b'D', b'o',
        ];

        let mut reader = DataSetReader::new(DATA, TransferSyntax::LittleEndianExplicit).unwrap();
        assert!(matches!(reader.next(), Some(Ok(DataToken::ElementHeader(_)))));
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
        // fused after an error
        assert!(reader.next().is_none());
    }

    #[test]
    fn item_delimiter_outside_of_item() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];
        let mut reader = DataSetReader::new(DATA, TransferSyntax::LittleEndianImplicit).unwrap();
        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn deflated_is_not_supported() {
        let err = DataSetReader::new(&[][..], TransferSyntax::DeflatedLittleEndianExplicit)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}
