//! The `anonymize` subcommand.
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use dcmkit_core::VR;
use dcmkit_dictionary_std::tags;
use dcmkit_modify::{DicomModification, DicomVersion, ModificationRequest};
use dcmkit_object::{open_file, InMemElement};
use snafu::{ResultExt, Whatever};
use tracing::{debug, info};

/// Anonymize DICOM files with a basic confidentiality profile
#[derive(Debug, Args)]
pub struct AnonymizeArgs {
    /// DICOM files to anonymize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory where the anonymized files are written
    #[arg(short = 'o', long = "out-dir")]
    out_dir: PathBuf,

    /// JSON anonymization request
    /// (`Replace`, `Remove`, `Keep`, `KeepPrivateTags`, `Force`...)
    #[arg(short = 'r', long = "request")]
    request: Option<PathBuf>,

    /// Edition of the basic profile, overriding the one of the request
    /// [2008, 2017c, 2021b, 2023b]
    #[arg(long = "dicom-version")]
    dicom_version: Option<DicomVersion>,

    /// JSON file holding the identifier mappings across runs,
    /// created if it does not exist
    #[arg(long = "state")]
    state: Option<PathBuf>,
}

pub fn run(args: AnonymizeArgs) -> Result<(), Whatever> {
    let AnonymizeArgs {
        files,
        out_dir,
        request,
        dicom_version,
        state,
    } = args;

    let mut request = match &request {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_whatever_context(|_| format!("Could not read {}", path.display()))?;
            ModificationRequest::from_json(&text)
                .whatever_context("Invalid anonymization request")?
        }
        None => ModificationRequest::default(),
    };
    if dicom_version.is_some() {
        request.dicom_version = dicom_version;
    }

    let mut modification = match state.as_deref().filter(|p| p.exists()) {
        Some(path) => {
            debug!("Resuming from {}", path.display());
            load_state(path)?
        }
        None => {
            let mut modification = DicomModification::new();
            modification
                .parse_anonymization_request(&request)
                .whatever_context("Invalid anonymization request")?;
            modification
        }
    };
    let patient_name_overridden = !modification.uids().contains(&tags::PATIENT_NAME);

    fs::create_dir_all(&out_dir)
        .with_whatever_context(|_| format!("Could not create {}", out_dir.display()))?;

    for file in &files {
        let output = anonymize_file(&mut modification, file, &out_dir, patient_name_overridden)?;
        info!("{} -> {}", file.display(), output.display());

        if request.keep_source == Some(false) {
            fs::remove_file(file)
                .with_whatever_context(|_| format!("Could not remove {}", file.display()))?;
            debug!("Removed {}", file.display());
        }
    }

    if let Some(path) = &state {
        let json = modification
            .to_json()
            .whatever_context("Could not serialize anonymization state")?;
        let text = serde_json::to_string_pretty(&json)
            .whatever_context("Could not serialize anonymization state")?;
        fs::write(path, text)
            .with_whatever_context(|_| format!("Could not write {}", path.display()))?;
    }

    Ok(())
}

fn load_state(path: &Path) -> Result<DicomModification, Whatever> {
    let text = fs::read_to_string(path)
        .with_whatever_context(|_| format!("Could not read {}", path.display()))?;
    let json: serde_json::Value =
        serde_json::from_str(&text).whatever_context("Anonymization state is not JSON")?;
    DicomModification::from_json(&json).whatever_context("Invalid anonymization state")
}

fn anonymize_file(
    modification: &mut DicomModification,
    file: &Path,
    out_dir: &Path,
    patient_name_overridden: bool,
) -> Result<PathBuf, Whatever> {
    let mut obj =
        open_file(file).with_whatever_context(|_| format!("Could not open {}", file.display()))?;

    modification
        .apply_file(&mut obj)
        .with_whatever_context(|_| format!("Could not anonymize {}", file.display()))?;

    if !patient_name_overridden {
        let patient_id = obj
            .get(tags::PATIENT_ID)
            .and_then(|e| e.to_str().map(|s| s.into_owned()));
        if let Some(patient_id) = patient_id {
            obj.put(InMemElement::new(tags::PATIENT_NAME, VR::PN, patient_id));
        }
    }

    let name = match file.file_name() {
        Some(name) => PathBuf::from(name),
        None => PathBuf::from(format!("{}.dcm", obj.meta().media_storage_sop_instance_uid())),
    };
    let output = out_dir.join(name);
    obj.write_to_file(&output)
        .with_whatever_context(|_| format!("Could not write {}", output.display()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::Tag;
    use dcmkit_object::{FileMetaTableBuilder, InMemDicomObject};

    fn write_instance(dir: &Path, name: &str, sop_instance_uid: &str) -> PathBuf {
        let obj = InMemDicomObject::from_element_iter(vec![
            InMemElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2"),
            InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, sop_instance_uid),
            InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
            InMemElement::new(tags::PATIENT_ID, VR::LO, "P1"),
            InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
            InMemElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4"),
            InMemElement::new(tags::INSTITUTION_NAME, VR::LO, "General Hospital"),
        ]);
        let file = obj
            .with_meta(
                FileMetaTableBuilder::new()
                    .transfer_syntax("1.2.840.10008.1.2.1")
                    .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.2")
                    .media_storage_sop_instance_uid(sop_instance_uid),
            )
            .unwrap();
        let path = dir.join(name);
        file.write_to_file(&path).unwrap();
        path
    }

    fn text(obj: &InMemDicomObject, tag: Tag) -> Option<String> {
        obj.get(tag).and_then(|e| e.to_str().map(|s| s.into_owned()))
    }

    #[test]
    fn anonymize_with_state() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_instance(dir.path(), "a.dcm", "1.2.3.4.1");
        let b = write_instance(dir.path(), "b.dcm", "1.2.3.4.2");
        let out_dir = dir.path().join("out");
        let state = dir.path().join("state.json");

        let args = |files: Vec<PathBuf>| AnonymizeArgs {
            files,
            out_dir: out_dir.clone(),
            request: None,
            dicom_version: Some(DicomVersion::V2021b),
            state: Some(state.clone()),
        };

        run(args(vec![a.clone()])).unwrap();
        assert!(state.exists());
        assert!(a.exists());
        // a second run shares the identifiers of the first one
        run(args(vec![b])).unwrap();

        let first = open_file(out_dir.join("a.dcm")).unwrap();
        let second = open_file(out_dir.join("b.dcm")).unwrap();

        let study = text(&first, tags::STUDY_INSTANCE_UID).unwrap();
        assert_ne!(study, "1.2.3");
        assert_eq!(text(&second, tags::STUDY_INSTANCE_UID).unwrap(), study);

        let patient_id = text(&first, tags::PATIENT_ID).unwrap();
        assert_ne!(patient_id, "P1");
        assert_eq!(text(&first, tags::PATIENT_NAME).unwrap(), patient_id);
        assert_eq!(text(&first, tags::INSTITUTION_NAME), None);

        assert_ne!(
            text(&first, tags::SOP_INSTANCE_UID),
            text(&second, tags::SOP_INSTANCE_UID)
        );
    }

    #[test]
    fn request_overrides_patient_name_and_drops_source() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_instance(dir.path(), "a.dcm", "1.2.3.4.1");
        let request = dir.path().join("request.json");
        fs::write(
            &request,
            r#"{ "Replace": { "PatientName": "Hello" }, "KeepSource": false }"#,
        )
        .unwrap();
        let out_dir = dir.path().join("out");

        run(AnonymizeArgs {
            files: vec![a.clone()],
            out_dir: out_dir.clone(),
            request: Some(request),
            dicom_version: None,
            state: None,
        })
        .unwrap();

        assert!(!a.exists());
        let obj = open_file(out_dir.join("a.dcm")).unwrap();
        assert_eq!(text(&obj, tags::PATIENT_NAME).as_deref(), Some("Hello"));
    }
}
