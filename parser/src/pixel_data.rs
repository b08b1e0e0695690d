//! Locating the pixel data of a Part-10 file without decoding it.
use crate::error::{ReadSourceSnafu, Result};
use crate::stream::{DicomStreamReader, StreamVisitor};
use dcmkit_core::{Tag, TransferSyntax, VR};
use snafu::ResultExt;
use std::io::{Read, Seek, SeekFrom};

const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Where the pixel data attribute starts in a file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelDataLocation {
    /// position of the pixel data tag, from the start of the file
    pub offset: u64,
    /// value representation of the pixel data
    pub vr: VR,
}

/// Visitor recording the position of the pixel data,
/// and stopping once it was passed.
#[derive(Debug)]
pub struct PixelDataVisitor {
    transfer_syntax: TransferSyntax,
    location: Option<PixelDataLocation>,
}

impl Default for PixelDataVisitor {
    fn default() -> Self {
        PixelDataVisitor {
            // default transfer syntax of DICOM
            transfer_syntax: TransferSyntax::LittleEndianImplicit,
            location: None,
        }
    }
}

impl PixelDataVisitor {
    /// The location of the pixel data, if it was found.
    pub fn location(&self) -> Option<PixelDataLocation> {
        self.location
    }
}

impl StreamVisitor for PixelDataVisitor {
    fn visit_meta_header_tag(&mut self, _tag: Tag, _vr: VR, _value: &[u8]) {}

    fn visit_transfer_syntax(&mut self, transfer_syntax: TransferSyntax) {
        self.transfer_syntax = transfer_syntax;
    }

    fn visit_dataset_tag(
        &mut self,
        tag: Tag,
        vr: VR,
        _value: &[u8],
        _little_endian: bool,
        file_offset: u64,
    ) -> bool {
        if tag == PIXEL_DATA {
            let vr = match self.transfer_syntax {
                // implicit VR little endian always has OW pixel data
                TransferSyntax::LittleEndianImplicit => VR::OW,
                TransferSyntax::LittleEndianExplicit | TransferSyntax::BigEndianExplicit => vr,
                // encapsulated pixel data is always OB
                _ => VR::OB,
            };
            self.location = Some(PixelDataLocation {
                offset: file_offset,
                vr,
            });
        }
        tag < PIXEL_DATA
    }
}

/// Find the pixel data of a Part-10 file.
///
/// Returns `None` if the file has no pixel data,
/// or if the pixel data tag could not be confirmed
/// at the position found by the streaming reader.
pub fn lookup_pixel_data_offset<R>(mut source: R) -> Result<Option<PixelDataLocation>>
where
    R: Read + Seek,
{
    let mut visitor = PixelDataVisitor::default();
    let little_endian = {
        let mut reader = DicomStreamReader::new(&mut source);
        reader.consume(&mut visitor)?;
        reader.is_little_endian()
    };

    let location = match visitor.location() {
        Some(location) => location,
        None => return Ok(None),
    };

    // make sure that the pixel data tag really is at that position
    source
        .seek(SeekFrom::Start(location.offset))
        .context(ReadSourceSnafu)?;
    let mut tag = [0u8; 4];
    match source.read_exact(&mut tag) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e).context(ReadSourceSnafu),
    }
    if !little_endian {
        tag.swap(0, 1);
        tag.swap(2, 3);
    }

    if tag == [0xE0, 0x7F, 0x10, 0x00] {
        Ok(Some(location))
    } else {
        Ok(None)
    }
}

/// Find the pixel data of a Part-10 file held in memory.
pub fn lookup_pixel_data_offset_in(data: &[u8]) -> Result<Option<PixelDataLocation>> {
    lookup_pixel_data_offset(std::io::Cursor::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::tests::part10;

    #[rustfmt::skip]
    static EXPLICIT: &[u8] = &[
        // (0028,0100) US 16
        0x28, 0x00, 0x00, 0x01, b'U', b'S', 0x02, 0x00, 0x10, 0x00,
        // -- 10 --
        // (7FE0,0010) OW, 4 bytes
        0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x02, 0x00,
        // (FFFC,FFFC) trailing padding
        0xFC, 0xFF, 0xFC, 0xFF, b'O', b'B', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn find_native_pixel_data() {
        let file = part10("1.2.840.10008.1.2.1", EXPLICIT);
        let start = (file.len() - EXPLICIT.len()) as u64;

        let location = lookup_pixel_data_offset_in(&file).unwrap();
        assert_eq!(
            location,
            Some(PixelDataLocation {
                offset: start + 10,
                vr: VR::OW,
            })
        );
    }

    #[test]
    fn find_big_endian_pixel_data() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0x00, 0x28, 0x01, 0x00, b'U', b'S', 0x00, 0x02, 0x00, 0x08,
            0x7F, 0xE0, 0x00, 0x10, b'O', b'B', 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x01, 0x02,
        ];
        let file = part10("1.2.840.10008.1.2.2", dataset);
        let start = (file.len() - dataset.len()) as u64;

        let location = lookup_pixel_data_offset_in(&file).unwrap().unwrap();
        assert_eq!(location.offset, start + 10);
        assert_eq!(location.vr, VR::OB);
        assert_eq!(&file[location.offset as usize..][..4], &[0x7F, 0xE0, 0x00, 0x10]);
    }

    #[test]
    fn implicit_pixel_data_is_ow() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0xFF, 0x00,
        ];
        let file = part10("1.2.840.10008.1.2", dataset);
        let location = lookup_pixel_data_offset_in(&file).unwrap().unwrap();
        assert_eq!(location.vr, VR::OW);
        assert_eq!(location.offset, (file.len() - dataset.len()) as u64);
    }

    #[test]
    fn encapsulated_pixel_data_is_ob() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let file = part10("1.2.840.10008.1.2.5", dataset);
        let location = lookup_pixel_data_offset_in(&file).unwrap().unwrap();
        assert_eq!(location.vr, VR::OB);
    }

    #[test]
    fn no_pixel_data() {
        #[rustfmt::skip]
        let dataset: &[u8] = &[
            0x28, 0x00, 0x00, 0x01, b'U', b'S', 0x02, 0x00, 0x10, 0x00,
        ];
        let file = part10("1.2.840.10008.1.2.1", dataset);
        assert_eq!(lookup_pixel_data_offset_in(&file).unwrap(), None);
    }
}
