//! Writing a data set from a stream of tokens.
use super::{
    has_long_length, DataElementHeader, DataToken, ITEM, ITEM_DELIMITER, PIXEL_DATA,
    SEQUENCE_DELIMITER,
};
use crate::error::{
    Result, UnbalancedTokenSnafu, UnsupportedTransferSyntaxSnafu, ValueTooLongSnafu,
    WriteDestinationSnafu,
};
use crate::value::swap_bytes;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use dcmkit_core::{Tag, TransferSyntax, VR};
use snafu::ResultExt;
use std::io::Write;

const UNDEFINED: u32 = 0xFFFF_FFFF;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Open {
    Sequence,
    Item,
    PixelSequence,
    /// a fragment item whose header is written along with its value
    PixelItem { written: bool },
}

/// A writer of DICOM data set tokens into a byte destination.
///
/// Sequences and items are always written with undefined length,
/// while primitive values are padded to an even length
/// and written with the length of the padded value.
/// The lengths declared in the incoming tokens are ignored.
#[derive(Debug)]
pub struct DataSetWriter<W> {
    to: W,
    explicit_vr: bool,
    little_endian: bool,
    last_header: Option<DataElementHeader>,
    open: Vec<Open>,
}

impl<W> DataSetWriter<W>
where
    W: Write,
{
    /// Create a data set writer for the given native transfer syntax
    /// (encapsulated syntaxes are written as explicit VR little endian).
    pub fn new(to: W, ts: TransferSyntax) -> Result<Self> {
        if ts == TransferSyntax::DeflatedLittleEndianExplicit {
            return UnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail();
        }
        Ok(DataSetWriter {
            to,
            explicit_vr: ts.is_explicit_vr(),
            little_endian: !ts.is_big_endian(),
            last_header: None,
            open: Vec::new(),
        })
    }

    /// Write all of the given tokens in order.
    pub fn write_sequence<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = DataToken>,
    {
        for token in tokens {
            self.write(token)?;
        }
        Ok(())
    }

    /// Write a single token.
    pub fn write(&mut self, token: DataToken) -> Result<()> {
        match token {
            DataToken::ElementHeader(header) => {
                if self.last_header.is_some() {
                    return UnbalancedTokenSnafu {
                        token: "ElementHeader",
                    }
                    .fail();
                }
                self.last_header = Some(header);
                Ok(())
            }
            DataToken::PrimitiveValue(mut value) => {
                let header = match self.last_header.take() {
                    Some(header) => header,
                    None => {
                        return UnbalancedTokenSnafu {
                            token: "PrimitiveValue",
                        }
                        .fail()
                    }
                };
                if value.len() % 2 == 1 {
                    value.push(padding_of(header.vr));
                }
                if !self.little_endian {
                    swap_bytes(&mut value, header.vr);
                }
                let len = value.len();
                let max = if self.explicit_vr && !has_long_length(header.vr) {
                    usize::from(u16::MAX)
                } else {
                    (UNDEFINED - 1) as usize
                };
                if len > max {
                    return ValueTooLongSnafu {
                        tag: header.tag,
                        len,
                    }
                    .fail();
                }
                self.write_header(header.tag, header.vr, len as u32)?;
                self.to.write_all(&value).context(WriteDestinationSnafu)
            }
            DataToken::SequenceStart { tag, .. } => {
                self.write_header(tag, VR::SQ, UNDEFINED)?;
                self.open.push(Open::Sequence);
                Ok(())
            }
            DataToken::PixelSequenceStart => {
                self.write_header(PIXEL_DATA, VR::OB, UNDEFINED)?;
                self.open.push(Open::PixelSequence);
                Ok(())
            }
            DataToken::ItemStart { .. } => match self.open.last() {
                Some(Open::Sequence) => {
                    self.write_item_header(ITEM, UNDEFINED)?;
                    self.open.push(Open::Item);
                    Ok(())
                }
                Some(Open::PixelSequence) => {
                    self.open.push(Open::PixelItem { written: false });
                    Ok(())
                }
                _ => UnbalancedTokenSnafu { token: "ItemStart" }.fail(),
            },
            DataToken::ItemValue(mut value) => match self.open.last_mut() {
                Some(Open::PixelItem { written }) if !*written => {
                    *written = true;
                    if value.len() % 2 == 1 {
                        value.push(0);
                    }
                    self.write_item_header(ITEM, value.len() as u32)?;
                    self.to.write_all(&value).context(WriteDestinationSnafu)
                }
                _ => UnbalancedTokenSnafu { token: "ItemValue" }.fail(),
            },
            DataToken::ItemEnd => match self.open.pop() {
                Some(Open::Item) => self.write_item_header(ITEM_DELIMITER, 0),
                Some(Open::PixelItem { written }) => {
                    if !written {
                        self.write_item_header(ITEM, 0)?;
                    }
                    Ok(())
                }
                _ => UnbalancedTokenSnafu { token: "ItemEnd" }.fail(),
            },
            DataToken::SequenceEnd => match self.open.pop() {
                Some(Open::Sequence) | Some(Open::PixelSequence) => {
                    self.write_item_header(SEQUENCE_DELIMITER, 0)
                }
                _ => UnbalancedTokenSnafu {
                    token: "SequenceEnd",
                }
                .fail(),
            },
        }
    }

    /// Retrieve the underlying destination.
    pub fn into_inner(self) -> W {
        self.to
    }

    fn write_u16(&mut self, value: u16) -> std::io::Result<()> {
        if self.little_endian {
            self.to.write_u16::<LittleEndian>(value)
        } else {
            self.to.write_u16::<BigEndian>(value)
        }
    }

    fn write_u32(&mut self, value: u32) -> std::io::Result<()> {
        if self.little_endian {
            self.to.write_u32::<LittleEndian>(value)
        } else {
            self.to.write_u32::<BigEndian>(value)
        }
    }

    fn write_item_header(&mut self, tag: Tag, len: u32) -> Result<()> {
        self.write_u16(tag.0).context(WriteDestinationSnafu)?;
        self.write_u16(tag.1).context(WriteDestinationSnafu)?;
        self.write_u32(len).context(WriteDestinationSnafu)
    }

    fn write_header(&mut self, tag: Tag, vr: VR, len: u32) -> Result<()> {
        if !self.explicit_vr {
            return self.write_item_header(tag, len);
        }
        self.write_u16(tag.0).context(WriteDestinationSnafu)?;
        self.write_u16(tag.1).context(WriteDestinationSnafu)?;
        self.to
            .write_all(&vr.to_bytes())
            .context(WriteDestinationSnafu)?;
        if has_long_length(vr) {
            self.to.write_all(&[0, 0]).context(WriteDestinationSnafu)?;
            self.write_u32(len).context(WriteDestinationSnafu)
        } else {
            self.write_u16(len as u16).context(WriteDestinationSnafu)
        }
    }
}

/// The byte used to pad odd-length values of this VR.
fn padding_of(vr: VR) -> u8 {
    if vr != VR::UI && vr.is_string() {
        b' '
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::DataSetWriter;
    use crate::dataset::{DataElementHeader, DataSetReader, DataToken};
    use dcmkit_core::{ErrorKind, Length, Tag, TransferSyntax, VR};

    fn write(tokens: Vec<DataToken>, ts: TransferSyntax) -> Vec<u8> {
        let mut writer = DataSetWriter::new(Vec::new(), ts).unwrap();
        writer.write_sequence(tokens).unwrap();
        writer.into_inner()
    }

    fn sample_tokens() -> Vec<DataToken> {
        vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                len: Length(46),
            },
            DataToken::ItemStart { len: Length(20) },
            DataToken::ElementHeader(DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2))),
            DataToken::PrimitiveValue(vec![1, 0]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader::new((0x0020, 0x000D), VR::UI, Length(5))),
            DataToken::PrimitiveValue(b"1.2.3".to_vec()),
            DataToken::ElementHeader(DataElementHeader::new((0x0020, 0x4000), VR::LT, Length(3))),
            DataToken::PrimitiveValue(b"ABC".to_vec()),
        ]
    }

    #[test]
    fn write_explicit_vr_little_endian() {
        let bytes = write(sample_tokens(), TransferSyntax::LittleEndianExplicit);

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            // -- 12 --
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // -- 20 --
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x01, 0x00,
            // -- 30 --
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // -- 38 --
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // -- 46 --
            0x20, 0x00, 0x0D, 0x00, b'U', b'I', 0x06, 0x00, b'1', b'.', b'2', b'.', b'3', 0x00,
            // -- 60 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, b'A', b'B', b'C', b' ',
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn write_implicit_vr_little_endian() {
        let tokens = vec![
            DataToken::ElementHeader(DataElementHeader::new((0x0010, 0x0010), VR::PN, Length(3))),
            DataToken::PrimitiveValue(b"Doe".to_vec()),
        ];
        let bytes = write(tokens, TransferSyntax::LittleEndianImplicit);
        assert_eq!(
            bytes,
            vec![0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'D', b'o', b'e', b' ']
        );
    }

    #[test]
    fn write_big_endian_swaps_numbers() {
        let tokens = vec![
            DataToken::ElementHeader(DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2))),
            DataToken::PrimitiveValue(vec![0x00, 0x02]),
        ];
        let bytes = write(tokens, TransferSyntax::BigEndianExplicit);
        assert_eq!(
            bytes,
            vec![0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00]
        );
    }

    #[test]
    fn written_tokens_read_back() {
        for &ts in &[
            TransferSyntax::LittleEndianImplicit,
            TransferSyntax::LittleEndianExplicit,
            TransferSyntax::BigEndianExplicit,
        ] {
            let bytes = write(sample_tokens(), ts);
            let tokens: Vec<_> = DataSetReader::new(&bytes[..], ts)
                .unwrap()
                .map(|token| token.unwrap().to_string())
                .collect();
            assert_eq!(
                tokens,
                vec![
                    "SequenceStart((0018,6011) U/L)",
                    "ItemStart(U/L)",
                    "ElementHeader((0028,0010) US 2)",
                    "PrimitiveValue(2 bytes)",
                    "ItemEnd",
                    "SequenceEnd",
                    "ElementHeader((0020,000D) UI 6)",
                    "PrimitiveValue(6 bytes)",
                    "ElementHeader((0020,4000) LT 4)",
                    "PrimitiveValue(4 bytes)",
                ],
                "{}",
                ts
            );
        }
    }

    #[test]
    fn write_encapsulated_pixel_data() {
        let tokens = vec![
            DataToken::PixelSequenceStart,
            DataToken::ItemStart { len: Length(0) },
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(3) },
            DataToken::ItemValue(vec![1, 2, 3]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];
        let bytes = write(tokens, TransferSyntax::RleLossless);

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unbalanced_tokens_are_rejected() {
        let mut writer = DataSetWriter::new(Vec::new(), TransferSyntax::LittleEndianExplicit).unwrap();
        let err = writer.write(DataToken::SequenceEnd).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalError);

        let err = writer
            .write(DataToken::PrimitiveValue(vec![0, 0]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }

    #[test]
    fn short_values_have_a_maximum_length() {
        let mut writer = DataSetWriter::new(Vec::new(), TransferSyntax::LittleEndianExplicit).unwrap();
        writer
            .write(DataToken::ElementHeader(DataElementHeader::new(
                (0x0008, 0x0080),
                VR::LO,
                Length(0x10000),
            )))
            .unwrap();
        let err = writer
            .write(DataToken::PrimitiveValue(vec![b'A'; 0x10000]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterOutOfRange);
    }
}
