//! A command line tool for inspecting DICOM files,
//! converting them to DICOMweb JSON or XML,
//! and anonymizing them.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dcmkit_core::TransferSyntax;
use dcmkit_dictionary_std::tags;
use dcmkit_json::{BulkDataUriFormatter, DicomJsonOptions};
use dcmkit_object::{open_file, OpenFileOptions};
use dcmkit_parser::lookup_pixel_data_offset;
use dcmkit_pixeldata::{guess_pixel_data_vr, ImageInformation, IntegerPixelAccessor};
use snafu::{OptionExt, Report, ResultExt, Whatever};
use tracing::{debug, error, warn, Level};

mod anonymize;

/// Inspect, convert and anonymize DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    #[command(subcommand)]
    command: Command,

    /// Print more information while processing
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a DICOM file as DICOMweb JSON
    Json {
        /// Path to the DICOM file
        file: PathBuf,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Refer to binary values through URIs under this base
        /// instead of inlining them
        #[arg(long = "bulk-data-uri", value_name = "BASE")]
        bulk_data_uri: Option<String>,

        /// Write the tags in lower case hexadecimal
        #[arg(long)]
        lowercase: bool,
    },
    /// Print a DICOM file as DICOMweb XML (native DICOM model)
    Xml {
        /// Path to the DICOM file
        file: PathBuf,

        /// Refer to binary values through URIs under this base
        /// instead of inlining them
        #[arg(long = "bulk-data-uri", value_name = "BASE")]
        bulk_data_uri: Option<String>,
    },
    /// Anonymize DICOM files with a basic confidentiality profile
    Anonymize(anonymize::AnonymizeArgs),
    /// Locate the pixel data of a DICOM file
    Offset {
        /// Path to the DICOM file
        file: PathBuf,
    },
    /// Describe the image held by a DICOM file
    Info {
        /// Path to the DICOM file
        file: PathBuf,
    },
}

fn main() {
    let App { command, verbose } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    run(command).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-1);
    });
}

fn run(command: Command) -> Result<(), Whatever> {
    match command {
        Command::Json {
            file,
            pretty,
            bulk_data_uri,
            lowercase,
        } => {
            let obj = open_file(&file)
                .with_whatever_context(|_| format!("Could not open {}", file.display()))?;
            let value = dcmkit_json::to_value_with(&obj, json_options(bulk_data_uri, lowercase));
            let text = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            }
            .whatever_context("Could not serialize DICOM JSON")?;
            println!("{}", text);
        }
        Command::Xml {
            file,
            bulk_data_uri,
        } => {
            let obj = open_file(&file)
                .with_whatever_context(|_| format!("Could not open {}", file.display()))?;
            let text = dcmkit_json::to_xml_string_with(&obj, json_options(bulk_data_uri, false))
                .whatever_context("Could not serialize DICOM XML")?;
            println!("{}", text);
        }
        Command::Anonymize(args) => anonymize::run(args)?,
        Command::Offset { file } => offset(file)?,
        Command::Info { file } => info(file)?,
    }
    Ok(())
}

fn json_options(bulk_data_uri: Option<String>, lowercase: bool) -> DicomJsonOptions {
    let options = DicomJsonOptions::new().lowercase_keys(lowercase);
    match bulk_data_uri {
        Some(base) => options.binary_formatter(BulkDataUriFormatter::new(base)),
        None => options,
    }
}

fn offset(file: PathBuf) -> Result<(), Whatever> {
    let reader = File::open(&file)
        .map(BufReader::new)
        .with_whatever_context(|_| format!("Could not open {}", file.display()))?;

    match lookup_pixel_data_offset(reader).whatever_context("Could not parse DICOM file")? {
        Some(location) => println!("0x{:08X} {}", location.offset, location.vr),
        None => println!("no pixel data"),
    }
    Ok(())
}

fn info(file: PathBuf) -> Result<(), Whatever> {
    let obj = OpenFileOptions::new()
        .read_all()
        .open_file(&file)
        .with_whatever_context(|_| format!("Could not open {}", file.display()))?;
    let ts = obj.transfer_syntax();
    debug!("Transfer syntax: {:?}", ts);

    let information =
        ImageInformation::from_object(&obj).whatever_context("Not a supported image")?;

    println!(
        "{}x{} image, {} frame(s), {} channel(s)",
        information.width(),
        information.height(),
        information.number_of_frames(),
        information.channel_count(),
    );
    println!(
        "{}-bit {} samples stored in {} bits, high bit {}",
        information.bits_stored(),
        if information.is_signed() { "signed" } else { "unsigned" },
        information.bits_allocated(),
        information.high_bit(),
    );
    println!(
        "{:?}, {}",
        information.photometric_interpretation(),
        if information.is_planar() { "planar" } else { "interleaved" },
    );
    match information.extract_pixel_format(false) {
        Some(format) => println!("Pixel format: {:?}", format),
        None => println!("Pixel format: unsupported"),
    }
    println!(
        "Pixel data VR: {}",
        guess_pixel_data_vr(ts, Some(information.bits_allocated()))
    );

    let native = matches!(
        ts,
        Some(TransferSyntax::LittleEndianImplicit) | Some(TransferSyntax::LittleEndianExplicit)
    );
    if !native {
        warn!("Pixel values are only read from uncompressed little endian files");
        return Ok(());
    }

    let pixel_data = obj
        .get(tags::PIXEL_DATA)
        .and_then(|e| e.as_bytes())
        .whatever_context("Missing pixel data")?;
    let mut accessor = IntegerPixelAccessor::new(information, pixel_data)
        .whatever_context("Could not access pixel data")?;
    for frame in 0..accessor.information().number_of_frames() {
        accessor
            .set_current_frame(frame)
            .whatever_context("Could not select frame")?;
        let (min, max) = accessor.extreme_values();
        println!("Frame #{}: values in [{}, {}]", frame, min, max);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
