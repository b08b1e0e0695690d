//! Streaming reader of DICOM Part-10 files.
//!
//! The [`DicomStreamReader`] is a state machine over a [`BlockReader`].
//! Each call to [`consume`](DicomStreamReader::consume)
//! pumps as many blocks as the data source can deliver,
//! reporting attributes to a [`StreamVisitor`] as they complete,
//! and returns as soon as the source starves or the reader is done.
//! It can then be called again once more data is available.
//!
//! Only the attributes of the file meta group
//! and the top-level attributes of the data set are reported.
//! Sequences are walked through so that the reader stays in sync,
//! but neither the sequences nor their content are delivered.
//! Encapsulated pixel data is reported once, with an empty value,
//! when its undefined length is read.
use crate::block::BlockReader;
use crate::error::{
    BadMagicSnafu, DelimiterLengthSnafu, DepthUnderflowSnafu, InconsistentMetaLengthSnafu,
    MissingGroupLengthSnafu, MissingTransferSyntaxSnafu, NonZeroReservedBytesSnafu, Result,
    TruncatedMetaElementSnafu, UnexpectedDelimiterSnafu, UnknownVrSnafu,
    UnsupportedTransferSyntaxSnafu,
};
use crate::value::{normalize, read_tag, read_u16, read_u32};
use dcmkit_core::{Tag, TransferSyntax, VR};
use snafu::OptionExt;
use std::io::Read;
use tracing::{debug, warn};

/// The size of the preamble, magic code and meta group length element.
const PREAMBLE_LENGTH: usize = 128 + 4 + 4 + 2 + 2 + 4;

const ITEM: Tag = Tag(0xFFFE, 0xE000);
const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
const UNDEFINED_LENGTH: u32 = 0xFFFF_FFFF;

/// Receiver of the attributes found by a [`DicomStreamReader`].
pub trait StreamVisitor {
    /// Called on every attribute of the file meta group (0002,xxxx),
    /// with its value normalized.
    fn visit_meta_header_tag(&mut self, tag: Tag, vr: VR, value: &[u8]);

    /// Called once, after the file meta group and before the data set.
    fn visit_transfer_syntax(&mut self, transfer_syntax: TransferSyntax);

    /// Called on every top-level attribute of the data set.
    ///
    /// `vr` is [`VR::UN`] in implicit VR transfer syntaxes.
    /// String values are normalized,
    /// other values are left in the byte order given by `little_endian`.
    /// `file_offset` is the position of the attribute's tag in the file.
    ///
    /// Returning `false` stops the reader.
    fn visit_dataset_tag(
        &mut self,
        tag: Tag,
        vr: VR,
        value: &[u8],
        little_endian: bool,
        file_offset: u64,
    ) -> bool;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Preamble,
    MetaHeader,
    DatasetTag,
    SequenceExplicitLength,
    SequenceExplicitValue,
    DatasetExplicitLength,
    DatasetValue,
    Done,
}

/// A top-level attribute whose header was read but whose value was not.
#[derive(Debug, Copy, Clone)]
struct DanglingTag {
    tag: Tag,
    vr: VR,
    offset: u64,
}

/// Cooperative streaming reader of a DICOM Part-10 file.
///
/// # Example
///
/// ```no_run
/// # use dcmkit_core::{Tag, TransferSyntax, VR};
/// # use dcmkit_parser::{DicomStreamReader, StreamVisitor};
/// #[derive(Default)]
/// struct Printer;
///
/// impl StreamVisitor for Printer {
///     fn visit_meta_header_tag(&mut self, tag: Tag, vr: VR, _: &[u8]) {
///         println!("meta {} {}", tag, vr);
///     }
///     fn visit_transfer_syntax(&mut self, ts: TransferSyntax) {
///         println!("transfer syntax {}", ts);
///     }
///     fn visit_dataset_tag(&mut self, tag: Tag, vr: VR, _: &[u8], _: bool, offset: u64) -> bool {
///         println!("{} {} @ {}", tag, vr, offset);
///         true
///     }
/// }
///
/// let file = std::fs::File::open("image.dcm")?;
/// let mut reader = DicomStreamReader::new(file);
/// reader.consume_until(&mut Printer, Tag(0x7FE0, 0x0010))?;
/// println!("pixel data at {:?}", reader.stop_offset());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DicomStreamReader<R> {
    reader: BlockReader<R>,
    state: State,
    transfer_syntax: Option<TransferSyntax>,
    dataset_offset: Option<u64>,
    dangling: Option<DanglingTag>,
    sequence_depth: usize,
    stop_tag: Option<(Tag, u64)>,
}

impl<R> DicomStreamReader<R>
where
    R: Read,
{
    /// Create a streaming reader positioned at the start of a Part-10 file.
    pub fn new(source: R) -> Self {
        let mut reader = BlockReader::new(source);
        reader.schedule(PREAMBLE_LENGTH);
        DicomStreamReader {
            reader,
            state: State::Preamble,
            transfer_syntax: None,
            dataset_offset: None,
            dangling: None,
            sequence_depth: 0,
            stop_tag: None,
        }
    }

    /// Pump the reader until the end of the file,
    /// until the visitor asks to stop,
    /// or until the data source starves.
    pub fn consume<V>(&mut self, visitor: &mut V) -> Result<()>
    where
        V: StreamVisitor + ?Sized,
    {
        self.consume_until(visitor, Tag(0xFFFF, 0xFFFF))
    }

    /// Pump the reader like [`consume`](Self::consume),
    /// also stopping at the first top-level attribute
    /// whose tag is greater than or equal to `until`.
    /// That attribute is not visited,
    /// its offset is available through [`stop_offset`](Self::stop_offset).
    pub fn consume_until<V>(&mut self, visitor: &mut V, until: Tag) -> Result<()>
    where
        V: StreamVisitor + ?Sized,
    {
        while self.state != State::Done {
            let block = match self.reader.read()? {
                Some(block) => block,
                None => return Ok(()),
            };

            match self.state {
                State::Preamble => self.handle_preamble(&block)?,
                State::MetaHeader => self.handle_meta_header(visitor, &block)?,
                State::DatasetTag => self.handle_dataset_tag(&block, until)?,
                State::SequenceExplicitLength => self.handle_sequence_explicit_length(&block),
                State::SequenceExplicitValue => self.handle_sequence_explicit_value()?,
                State::DatasetExplicitLength => {
                    self.handle_dataset_explicit_length(visitor, &block)
                }
                State::DatasetValue => self.handle_dataset_value(visitor, &block),
                State::Done => unreachable!("loop exits on done"),
            }
        }
        Ok(())
    }

    /// Whether the reader reached a terminal state.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// The transfer syntax of the data set, once the meta group was read.
    pub fn transfer_syntax(&self) -> Option<TransferSyntax> {
        self.transfer_syntax
    }

    /// Whether the data set is encoded in little endian.
    pub fn is_little_endian(&self) -> bool {
        self.transfer_syntax
            .map_or(true, |ts| !ts.is_big_endian())
    }

    /// The position of the first byte of the data set, once known.
    pub fn dataset_offset(&self) -> Option<u64> {
        self.dataset_offset
    }

    /// The current nesting depth in sequences.
    pub fn sequence_depth(&self) -> usize {
        self.sequence_depth
    }

    /// The total number of bytes consumed so far.
    pub fn processed_bytes(&self) -> u64 {
        self.reader.processed_bytes()
    }

    /// The tag which stopped the reader in
    /// [`consume_until`](Self::consume_until), if any.
    pub fn stop_tag(&self) -> Option<Tag> {
        self.stop_tag.map(|(tag, _)| tag)
    }

    /// The file offset of the tag which stopped the reader in
    /// [`consume_until`](Self::consume_until), if any.
    pub fn stop_offset(&self) -> Option<u64> {
        self.stop_tag.map(|(_, offset)| offset)
    }

    fn handle_preamble(&mut self, block: &[u8]) -> Result<()> {
        debug_assert_eq!(block.len(), PREAMBLE_LENGTH);

        // The file meta information is always in explicit VR little endian
        if &block[128..132] != b"DICM" {
            return BadMagicSnafu.fail();
        }
        if read_tag(&block[132..136], true) != Tag(0x0002, 0x0000)
            || &block[136..138] != b"UL"
            || read_u16(&block[138..140], true) != 4
        {
            return MissingGroupLengthSnafu.fail();
        }

        let length = read_u32(&block[140..144], true);
        self.reader.schedule(length as usize);
        self.state = State::MetaHeader;
        Ok(())
    }

    fn handle_meta_header<V>(&mut self, visitor: &mut V, block: &[u8]) -> Result<()>
    where
        V: StreamVisitor + ?Sized,
    {
        let group_length = (block.len() as u32).to_le_bytes();
        visitor.visit_meta_header_tag(Tag(0x0002, 0x0000), VR::UL, &group_length);

        let mut pos = 0;
        let mut transfer_syntax = None;

        while pos + 8 <= block.len() {
            let tag = read_tag(&block[pos..], true);
            let vr_bytes = [block[pos + 4], block[pos + 5]];
            let vr = VR::from_binary(vr_bytes).context(UnknownVrSnafu { tag, vr: vr_bytes })?;

            let (start, length) = if vr.is_short_explicit() {
                (pos + 8, read_u16(&block[pos + 6..], true) as usize)
            } else {
                if pos + 12 > block.len() {
                    break;
                }
                if read_u16(&block[pos + 6..], true) != 0 {
                    return NonZeroReservedBytesSnafu { tag }.fail();
                }
                (pos + 12, read_u32(&block[pos + 8..], true) as usize)
            };

            let end = start + length;
            if end > block.len() {
                return TruncatedMetaElementSnafu { tag }.fail();
            }
            let value = normalize(&block[start..end], vr);

            if tag.group() == 0x0002 {
                visitor.visit_meta_header_tag(tag, vr, value);
            }
            if tag == TRANSFER_SYNTAX_UID {
                let uid = String::from_utf8_lossy(value);
                let ts = TransferSyntax::from_uid(&uid)
                    .filter(|ts| *ts != TransferSyntax::DeflatedLittleEndianExplicit)
                    .context(UnsupportedTransferSyntaxSnafu {
                        uid: uid.trim_end_matches('\0'),
                    })?;
                transfer_syntax = Some(ts);
            }
            pos = end;
        }

        if pos != block.len() {
            return InconsistentMetaLengthSnafu {
                position: pos,
                length: block.len(),
            }
            .fail();
        }

        let ts = transfer_syntax.context(MissingTransferSyntaxSnafu)?;
        debug!("Data set transfer syntax: {}", ts.uid());
        self.transfer_syntax = Some(ts);
        visitor.visit_transfer_syntax(ts);

        self.dataset_offset = Some(self.reader.processed_bytes());
        self.reader.schedule(8);
        self.state = State::DatasetTag;
        Ok(())
    }

    fn handle_dataset_tag(&mut self, block: &[u8], until: Tag) -> Result<()> {
        debug_assert_eq!(block.len(), 8);

        let little_endian = self.is_little_endian();
        let tag = read_tag(block, little_endian);
        let tag_offset = self.reader.processed_bytes() - block.len() as u64;

        if self.sequence_depth == 0 && tag >= until {
            self.stop_tag = Some((tag, tag_offset));
            self.state = State::Done;
            return Ok(());
        }

        if tag == ITEM || tag == ITEM_DELIMITER || tag == SEQUENCE_DELIMITER {
            // delimitation items are always encoded like implicit VR
            let length = read_u32(&block[4..], little_endian);

            if tag == ITEM {
                if self.sequence_depth == 0 {
                    return UnexpectedDelimiterSnafu { tag }.fail();
                }
                if length == UNDEFINED_LENGTH {
                    // walk through the nested data set
                    self.schedule_tag();
                } else {
                    // skip the whole item at once
                    self.dangling = None;
                    self.reader.schedule(length as usize);
                    self.state = State::DatasetValue;
                }
            } else {
                if length != 0 {
                    return DelimiterLengthSnafu { tag, len: length }.fail();
                }
                if self.sequence_depth == 0 {
                    return UnexpectedDelimiterSnafu { tag }.fail();
                }
                if tag == SEQUENCE_DELIMITER {
                    self.sequence_depth -= 1;
                }
                self.schedule_tag();
            }
            return Ok(());
        }

        let ts = self.transfer_syntax.unwrap_or(TransferSyntax::LittleEndianImplicit);
        if !ts.is_explicit_vr() {
            let length = read_u32(&block[4..], true);
            if length == UNDEFINED_LENGTH {
                // a sequence of undefined length
                self.dangling = None;
                self.sequence_depth += 1;
                self.schedule_tag();
            } else {
                self.set_dangling(tag, VR::UN, tag_offset);
                self.reader.schedule(length as usize);
                self.state = State::DatasetValue;
            }
            return Ok(());
        }

        let vr_bytes = [block[4], block[5]];
        let vr = match VR::from_binary(vr_bytes) {
            Some(vr) => vr,
            None => {
                // two reserved bytes and a 32-bit length, like UN
                warn!("Unknown value representation {:?} at {}, read as UN", vr_bytes, tag);
                self.set_dangling(tag, VR::UN, tag_offset);
                self.reader.schedule(4);
                self.state = State::DatasetExplicitLength;
                return Ok(());
            }
        };

        if vr == VR::SQ {
            if read_u16(&block[6..], little_endian) != 0 {
                return NonZeroReservedBytesSnafu { tag }.fail();
            }
            self.dangling = None;
            self.sequence_depth += 1;
            self.reader.schedule(4);
            self.state = State::SequenceExplicitLength;
        } else if vr.is_short_explicit() {
            let length = read_u16(&block[6..], little_endian);
            self.set_dangling(tag, vr, tag_offset);
            self.reader.schedule(length as usize);
            self.state = State::DatasetValue;
        } else {
            if read_u16(&block[6..], little_endian) != 0 {
                return NonZeroReservedBytesSnafu { tag }.fail();
            }
            self.set_dangling(tag, vr, tag_offset);
            self.reader.schedule(4);
            self.state = State::DatasetExplicitLength;
        }
        Ok(())
    }

    fn handle_sequence_explicit_length(&mut self, block: &[u8]) {
        let length = read_u32(block, self.is_little_endian());
        if length == UNDEFINED_LENGTH {
            self.schedule_tag();
        } else {
            self.reader.schedule(length as usize);
            self.state = State::SequenceExplicitValue;
        }
    }

    fn handle_sequence_explicit_value(&mut self) -> Result<()> {
        if self.sequence_depth == 0 {
            return DepthUnderflowSnafu.fail();
        }
        self.sequence_depth -= 1;
        self.schedule_tag();
        Ok(())
    }

    fn handle_dataset_explicit_length<V>(&mut self, visitor: &mut V, block: &[u8])
    where
        V: StreamVisitor + ?Sized,
    {
        let little_endian = self.is_little_endian();
        let length = read_u32(block, little_endian);
        if length == UNDEFINED_LENGTH {
            // encapsulated pixel data: its fragments are walked as items
            self.sequence_depth += 1;
            self.schedule_tag();
            if let Some(dangling) = self.dangling.take() {
                if !visitor.visit_dataset_tag(
                    dangling.tag,
                    dangling.vr,
                    &[],
                    little_endian,
                    dangling.offset,
                ) {
                    self.state = State::Done;
                }
            }
        } else {
            self.reader.schedule(length as usize);
            self.state = State::DatasetValue;
        }
    }

    fn handle_dataset_value<V>(&mut self, visitor: &mut V, block: &[u8])
    where
        V: StreamVisitor + ?Sized,
    {
        if let Some(dangling) = self.dangling.take() {
            let value = normalize(block, dangling.vr);
            if !visitor.visit_dataset_tag(
                dangling.tag,
                dangling.vr,
                value,
                self.is_little_endian(),
                dangling.offset,
            ) {
                self.state = State::Done;
                return;
            }
        }
        self.schedule_tag();
    }

    fn set_dangling(&mut self, tag: Tag, vr: VR, offset: u64) {
        self.dangling = if self.sequence_depth == 0 {
            Some(DanglingTag { tag, vr, offset })
        } else {
            None
        };
    }

    fn schedule_tag(&mut self) {
        self.reader.schedule(8);
        self.state = State::DatasetTag;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dcmkit_core::ErrorKind;

    /// Visitor recording everything it is told.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub meta: Vec<(Tag, VR, Vec<u8>)>,
        pub transfer_syntax: Option<TransferSyntax>,
        pub dataset: Vec<(Tag, VR, Vec<u8>, u64)>,
        pub stop_after: Option<Tag>,
    }

    impl StreamVisitor for Recorder {
        fn visit_meta_header_tag(&mut self, tag: Tag, vr: VR, value: &[u8]) {
            self.meta.push((tag, vr, value.to_vec()));
        }

        fn visit_transfer_syntax(&mut self, transfer_syntax: TransferSyntax) {
            self.transfer_syntax = Some(transfer_syntax);
        }

        fn visit_dataset_tag(
            &mut self,
            tag: Tag,
            vr: VR,
            value: &[u8],
            _little_endian: bool,
            file_offset: u64,
        ) -> bool {
            self.dataset.push((tag, vr, value.to_vec(), file_offset));
            self.stop_after != Some(tag)
        }
    }

    /// Build a Part-10 file with the given transfer syntax and data set bytes.
    pub(crate) fn part10(ts_uid: &str, dataset: &[u8]) -> Vec<u8> {
        let mut uid = ts_uid.as_bytes().to_vec();
        if uid.len() % 2 == 1 {
            uid.push(0);
        }
        let mut meta = Vec::new();
        // (0002,0001) OB 00 01
        meta.extend_from_slice(&[0x02, 0x00, 0x01, 0x00, b'O', b'B', 0, 0, 2, 0, 0, 0, 0, 1]);
        // (0002,0010) UI
        meta.extend_from_slice(&[0x02, 0x00, 0x10, 0x00, b'U', b'I']);
        meta.extend_from_slice(&(uid.len() as u16).to_le_bytes());
        meta.extend_from_slice(&uid);

        let mut file = vec![0; 128];
        file.extend_from_slice(b"DICM");
        file.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, b'U', b'L', 4, 0]);
        file.extend_from_slice(&(meta.len() as u32).to_le_bytes());
        file.extend_from_slice(&meta);
        file.extend_from_slice(dataset);
        file
    }

    #[rustfmt::skip]
    static IMPLICIT_DATASET: &[u8] = &[
        // (0008,0060) Modality, 2 bytes
        0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00,
        b'C', b'T',
        // -- 10 --
        // (0008,1140) ReferencedImageSequence, undefined length
        0x08, 0x00, 0x40, 0x11, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        // (0008,1155) ReferencedSOPInstanceUID, 6 bytes
        0x08, 0x00, 0x55, 0x11, 0x06, 0x00, 0x00, 0x00,
        b'1', b'.', b'2', b'.', b'3', 0x00,
        // item delimiter
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // -- 48 --
        // item of defined length 8, skipped
        0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00,
        0x20, 0x00, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // -- 72 --
        // (0010,0010) PatientName, 4 bytes
        0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'F', b'O', b'O', b' ',
        // -- 84 --
        // (7FE0,0010) PixelData, 4 bytes
        0xE0, 0x7F, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn read_implicit_vr_little_endian() {
        let file = part10("1.2.840.10008.1.2", IMPLICIT_DATASET);
        let dataset_start = file.len() - IMPLICIT_DATASET.len();

        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume(&mut visitor).unwrap();

        assert_eq!(visitor.transfer_syntax, Some(TransferSyntax::LittleEndianImplicit));
        assert_eq!(reader.dataset_offset(), Some(dataset_start as u64));
        assert_eq!(reader.sequence_depth(), 0);

        // meta group: group length, version, transfer syntax (normalized)
        assert_eq!(visitor.meta.len(), 3);
        assert_eq!(visitor.meta[2].0, Tag(0x0002, 0x0010));
        assert_eq!(visitor.meta[2].2, b"1.2.840.10008.1.2".to_vec());

        let tags: Vec<_> = visitor.dataset.iter().map(|e| e.0).collect();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0060), Tag(0x0010, 0x0010), Tag(0x7FE0, 0x0010)]
        );
        assert!(visitor.dataset.iter().all(|e| e.1 == VR::UN));
        // not a string VR, so the padding stays
        assert_eq!(visitor.dataset[1].2, b"FOO ".to_vec());
        assert_eq!(visitor.dataset[1].3, (dataset_start + 72) as u64);
        assert_eq!(visitor.dataset[2].3, (dataset_start + 84) as u64);
    }

    #[test]
    fn stop_at_until_tag() {
        let file = part10("1.2.840.10008.1.2", IMPLICIT_DATASET);
        let dataset_start = file.len() - IMPLICIT_DATASET.len();

        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume_until(&mut visitor, Tag(0x7FE0, 0x0010)).unwrap();

        assert!(reader.is_done());
        assert_eq!(visitor.dataset.len(), 2);
        assert_eq!(reader.stop_tag(), Some(Tag(0x7FE0, 0x0010)));
        assert_eq!(reader.stop_offset(), Some((dataset_start + 84) as u64));
        assert_eq!(&file[dataset_start + 84..dataset_start + 88], &[0xE0, 0x7F, 0x10, 0x00]);
    }

    #[test]
    fn visitor_can_stop() {
        let file = part10("1.2.840.10008.1.2", IMPLICIT_DATASET);
        let mut visitor = Recorder {
            stop_after: Some(Tag(0x0008, 0x0060)),
            ..Default::default()
        };
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume(&mut visitor).unwrap();
        assert!(reader.is_done());
        assert_eq!(visitor.dataset.len(), 1);
    }

    #[rustfmt::skip]
    static EXPLICIT_DATASET: &[u8] = &[
        // (0008,0060) CS "MR"
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
        // (0008,1140) SQ, defined length 22
        0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0x16, 0x00, 0x00, 0x00,
        // item, length 14
        0xFE, 0xFF, 0x00, 0xE0, 0x0E, 0x00, 0x00, 0x00,
        // (0008,1155) UI "1.2.3"
        0x08, 0x00, 0x55, 0x11, b'U', b'I', 0x06, 0x00,
        b'1', b'.', b'2', b'.', b'3', 0x00,
        // -- 44 --
        // (0010,0010) PN "FOO "
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'F', b'O', b'O', b' ',
        // -- 56 --
        // (0018,9999) UT "abc " (long VR)
        0x18, 0x00, 0x99, 0x99, b'U', b'T', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'a', b'b', b'c', b' ',
        // -- 72 --
        // (7FE0,0010) OB, undefined length (encapsulated)
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // basic offset table, empty
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // fragment
        0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB,
        // sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn read_explicit_vr_little_endian() {
        let file = part10("1.2.840.10008.1.2.4.50", EXPLICIT_DATASET);
        let dataset_start = file.len() - EXPLICIT_DATASET.len();

        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume(&mut visitor).unwrap();

        assert_eq!(visitor.transfer_syntax, Some(TransferSyntax::JpegProcess1));
        assert_eq!(reader.sequence_depth(), 0);

        let seen: Vec<_> = visitor
            .dataset
            .iter()
            .map(|(tag, vr, value, offset)| (*tag, *vr, value.clone(), *offset - dataset_start as u64))
            .collect();
        assert_eq!(
            seen,
            vec![
                (Tag(0x0008, 0x0060), VR::CS, b"MR".to_vec(), 0),
                (Tag(0x0010, 0x0010), VR::PN, b"FOO".to_vec(), 44),
                (Tag(0x0018, 0x9999), VR::UT, b"abc".to_vec(), 56),
                (Tag(0x7FE0, 0x0010), VR::OB, vec![], 72),
            ]
        );
    }

    #[test]
    fn read_explicit_vr_big_endian() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            // (0028,0010) US 512
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
            // (7FE0,0010) OW, 2 bytes
            0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x12, 0x34,
        ];
        let file = part10("1.2.840.10008.1.2.2", dataset);
        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume(&mut visitor).unwrap();

        assert!(!reader.is_little_endian());
        assert_eq!(visitor.dataset.len(), 2);
        assert_eq!(visitor.dataset[0].0, Tag(0x0028, 0x0010));
        assert_eq!(visitor.dataset[0].2, vec![0x02, 0x00]);
        assert_eq!(visitor.dataset[1].0, Tag(0x7FE0, 0x0010));
        assert_eq!(visitor.dataset[1].2, vec![0x12, 0x34]);
    }

    #[test]
    fn reject_bad_magic() {
        let mut file = part10("1.2.840.10008.1.2", IMPLICIT_DATASET);
        file[128] = b'X';
        let mut reader = DicomStreamReader::new(&file[..]);
        let err = reader.consume(&mut Recorder::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn reject_unknown_transfer_syntax() {
        let file = part10("1.2.3.4", IMPLICIT_DATASET);
        let mut reader = DicomStreamReader::new(&file[..]);
        let err = reader.consume(&mut Recorder::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn reject_non_zero_reserved_bytes() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0x18, 0x00, 0x99, 0x99, b'U', b'T', 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let file = part10("1.2.840.10008.1.2.1", dataset);
        let mut reader = DicomStreamReader::new(&file[..]);
        let err = reader.consume(&mut Recorder::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn unknown_vr_is_reported_as_un() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            // (0009,1001) with VR "ZZ", 32-bit length 2
            0x09, 0x00, 0x01, 0x10, b'Z', b'Z', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
            // (0010,0010) PN "FOO "
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'F', b'O', b'O', b' ',
        ];
        let file = part10("1.2.840.10008.1.2.1", dataset);
        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(&file[..]);
        reader.consume(&mut visitor).unwrap();

        assert_eq!(reader.sequence_depth(), 0);
        assert_eq!(visitor.dataset.len(), 2);
        assert_eq!(visitor.dataset[0].0, Tag(0x0009, 0x1001));
        assert_eq!(visitor.dataset[0].1, VR::UN);
        assert_eq!(visitor.dataset[0].2, vec![0x01, 0x02]);
        assert_eq!(visitor.dataset[1].2, b"FOO".to_vec());
    }

    #[test]
    fn reject_delimiter_at_top_level() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let file = part10("1.2.840.10008.1.2", dataset);
        let mut reader = DicomStreamReader::new(&file[..]);
        let err = reader.consume(&mut Recorder::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    /// Source releasing its data up to a limit shared with the test,
    /// reporting that it would block beyond it.
    struct Gate {
        data: Vec<u8>,
        pos: usize,
        limit: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Read for Gate {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let limit = self.limit.get();
            if self.pos >= limit {
                if limit < self.data.len() {
                    return Err(std::io::ErrorKind::WouldBlock.into());
                }
                return Ok(0);
            }
            let n = buf.len().min(limit - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn resume_after_starvation() {
        let file = part10("1.2.840.10008.1.2", IMPLICIT_DATASET);
        let limit = std::rc::Rc::new(std::cell::Cell::new(file.len() - 30));
        let gate = Gate {
            data: file.clone(),
            pos: 0,
            limit: limit.clone(),
        };

        let mut visitor = Recorder::default();
        let mut reader = DicomStreamReader::new(gate);
        reader.consume(&mut visitor).unwrap();
        assert!(!reader.is_done());
        assert_eq!(visitor.dataset.len(), 1);
        assert_eq!(reader.sequence_depth(), 1);

        // nothing changes while the source is still blocked
        reader.consume(&mut visitor).unwrap();
        assert_eq!(visitor.dataset.len(), 1);

        limit.set(file.len());
        reader.consume(&mut visitor).unwrap();
        assert_eq!(visitor.dataset.len(), 3);
        assert_eq!(reader.sequence_depth(), 0);
    }
}
