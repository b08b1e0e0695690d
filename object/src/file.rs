//! Reading DICOM Part-10 files into memory.
use dcmkit_core::{Tag, TransferSyntax};
use snafu::{OptionExt, ResultExt};

use crate::mem::InMemDicomObject;
use crate::meta::{FileMetaTable, DICM_MAGIC_CODE};
use crate::{
    DefaultDicomObject, FileDicomObject, OpenFileSnafu, ParseMetaDataSetSnafu,
    ReadPreambleBytesSnafu, ReadUnsupportedTransferSyntaxSnafu, Result,
};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Read a DICOM object from a byte source
/// starting at the magic code, with no preamble.
pub fn from_reader<F>(file: F) -> Result<DefaultDicomObject>
where
    F: Read,
{
    OpenFileOptions::new().from_reader(file)
}

/// Read a whole DICOM file.
///
/// The 128-byte preamble is skipped when present.
pub fn open_file<P>(path: P) -> Result<DefaultDicomObject>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Options for reading a DICOM file.
///
/// # Example
///
/// ```no_run
/// # use dcmkit_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .read_until(dcmkit_dictionary_std::tags::PIXEL_DATA)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read_until: Option<Tag>,
    read_preamble: ReadPreamble,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Stop reading the root data set at the first tag
    /// greater than or equal to `tag`, leaving it out.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read_until = Some(tag);
        self
    }

    /// Read the root data set to its end (the default).
    pub fn read_all(mut self) -> Self {
        self.read_until = None;
        self
    }

    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DefaultDicomObject>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        let mut file = BufReader::new(file);
        match self.read_preamble {
            ReadPreamble::Always => {
                skip_preamble(&mut file)?;
                read_file_object(file, self.read_until)
            }
            ReadPreamble::Never => read_file_object(file, self.read_until),
            ReadPreamble::Auto => {
                let mut head = [0; 132];
                file.read_exact(&mut head).context(ReadPreambleBytesSnafu)?;
                if head[128..] == DICM_MAGIC_CODE {
                    read_file_object(Cursor::new(&head[128..]).chain(file), self.read_until)
                } else {
                    read_file_object(Cursor::new(head).chain(file), self.read_until)
                }
            }
        }
    }

    /// Read a DICOM object from a byte source.
    ///
    /// The preamble is only expected with [`ReadPreamble::Always`].
    pub fn from_reader<R>(self, mut from: R) -> Result<DefaultDicomObject>
    where
        R: Read,
    {
        if self.read_preamble == ReadPreamble::Always {
            skip_preamble(&mut from)?;
        }
        read_file_object(from, self.read_until)
    }
}

fn skip_preamble<R: Read>(from: &mut R) -> Result<()> {
    let mut preamble = [0; 128];
    from.read_exact(&mut preamble)
        .context(ReadPreambleBytesSnafu)?;
    Ok(())
}

fn read_file_object<R: Read>(mut from: R, read_until: Option<Tag>) -> Result<DefaultDicomObject> {
    let meta = FileMetaTable::from_reader(&mut from).context(ParseMetaDataSetSnafu)?;
    let ts = TransferSyntax::from_uid(meta.transfer_syntax()).context(
        ReadUnsupportedTransferSyntaxSnafu {
            uid: meta.transfer_syntax(),
        },
    )?;
    let obj = InMemDicomObject::read_dataset_until(from, ts, read_until)?;
    Ok(FileDicomObject::new(meta, obj))
}

/// Whether a source starts with the 128-byte preamble.
#[derive(Debug, Copy, Clone, Default, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Files opened by path are checked for a preamble,
    /// byte sources are expected to start at the magic code.
    #[default]
    Auto,
    /// The source starts at the magic code.
    Never,
    /// The source always starts with a preamble.
    Always,
}
