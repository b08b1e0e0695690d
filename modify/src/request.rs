//! JSON requests for modifications and anonymizations.
//!
//! A request is an object such as
//!
//! ```json
//! {
//!   "Replace": { "PatientName": "Anonymous", "0010,1010": "042Y" },
//!   "Remove": [ "InstitutionName", "ReferencedImageSequence[*].ReferencedSOPClassUID" ],
//!   "Keep": [ "StudyDescription" ],
//!   "RemovePrivateTags": true,
//!   "PrivateCreator": "ACME",
//!   "Force": false
//! }
//! ```
//!
//! Attributes are written as keywords or as hexadecimal tags,
//! optionally preceded by sequence steps to reach nested attributes.
use crate::modification::DicomModification;
use crate::profile::DicomVersion;
use crate::uid_map::ResourceLevel;
use crate::{
    BadReplacementSnafu, InvalidPathSnafu, ParseRequestSnafu, RequiresForceSnafu, Result,
};
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::DicomPath;
use dcmkit_dictionary_std::tags;
use dcmkit_object::StandardDataDictionary;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use snafu::ResultExt;

/// The members of a modification or anonymization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModificationRequest {
    /// attributes to remove
    pub remove: Vec<String>,
    /// attributes to replace, with their new values
    pub replace: Map<String, JsonValue>,
    /// attributes to leave untouched
    pub keep: Vec<String>,
    /// keep the private attributes (anonymization only)
    pub keep_private_tags: bool,
    /// remove the private attributes (modification only)
    pub remove_private_tags: bool,
    /// private creator for the inserted private attributes
    pub private_creator: Option<String>,
    /// allow touching the main identifiers
    pub force: bool,
    /// edition of the basic profile (anonymization only)
    pub dicom_version: Option<DicomVersion>,
    /// whether the caller should keep the source data after modifying it
    pub keep_source: Option<bool>,
}

impl ModificationRequest {
    /// Parse a request from its JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context(ParseRequestSnafu)
    }

    /// Read a request from a JSON value.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        serde_json::from_value(value).context(ParseRequestSnafu)
    }
}

fn parse_path(text: &str) -> Result<DicomPath> {
    DicomPath::parse_with(text, |name| StandardDataDictionary.parse_tag(name))
        .context(InvalidPathSnafu { text })
}

/// Whether the attribute identifies a resource of the hierarchy.
fn is_main_identifier(path: &DicomPath) -> bool {
    path.prefix_len() == 0
        && [
            tags::PATIENT_ID,
            tags::STUDY_INSTANCE_UID,
            tags::SERIES_INSTANCE_UID,
            tags::SOP_INSTANCE_UID,
        ]
        .contains(&path.final_tag())
}

fn check_force(text: &str, path: &DicomPath, force: bool, operation: &'static str) -> Result<()> {
    if !force && is_main_identifier(path) {
        return RequiresForceSnafu {
            name: text,
            operation,
        }
        .fail();
    }
    Ok(())
}

impl DicomModification {
    fn parse_rules(&mut self, request: &ModificationRequest) -> Result<()> {
        let force = request.force;

        for text in &request.remove {
            let path = parse_path(text)?;
            check_force(text, &path, force, "removed")?;
            self.remove_path(path);
        }

        for (text, value) in &request.replace {
            let path = parse_path(text)?;
            check_force(text, &path, force, "replaced")?;
            if !matches!(
                value,
                JsonValue::String(_) | JsonValue::Null | JsonValue::Array(_)
            ) {
                return BadReplacementSnafu {
                    tag: path.final_tag(),
                    reason: "expected a string, null or an array",
                }
                .fail();
            }
            self.replace_path(path, value.clone(), false);
        }

        for text in &request.keep {
            let path = parse_path(text)?;
            check_force(text, &path, force, "kept")?;
            self.keep_path(path);
        }

        if let Some(creator) = &request.private_creator {
            self.set_private_creator(creator.as_str());
        }
        Ok(())
    }

    /// Configure this modification from a modification request
    /// on a resource of the given level.
    ///
    /// Unless the request is forced,
    /// the main identifiers cannot be touched,
    /// and the identifiers of the parents of the resource must stay.
    pub fn parse_modify_request(
        &mut self,
        request: &ModificationRequest,
        level: ResourceLevel,
    ) -> Result<()> {
        self.set_level(level);
        if request.remove_private_tags {
            self.set_remove_private_tags(true);
        }
        self.parse_rules(request)?;
        if !request.force {
            self.check_hierarchy()?;
        }
        Ok(())
    }

    /// Configure this modification as an anonymization
    /// from an anonymization request.
    ///
    /// Returns whether the request overrides the rule for Patient's Name,
    /// in which case the caller should not derive it from the new Patient ID.
    pub fn parse_anonymization_request(&mut self, request: &ModificationRequest) -> Result<bool> {
        self.setup_anonymization(request.dicom_version.unwrap_or_default())?;
        if request.keep_private_tags {
            self.set_remove_private_tags(false);
        }
        self.parse_rules(request)?;
        Ok(!self.uids.contains(&tags::PATIENT_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::{ErrorKind, Tag};
    use serde_json::json;

    #[test]
    fn parse_request_members() {
        let request = ModificationRequest::from_json(
            r#"{
                "Replace": { "PatientName": "Anonymous" },
                "Remove": [ "0008,0080" ],
                "DicomVersion": "2017c",
                "Force": true
            }"#,
        )
        .unwrap();
        assert_eq!(request.remove, vec!["0008,0080".to_string()]);
        assert_eq!(request.replace.get("PatientName"), Some(&json!("Anonymous")));
        assert_eq!(request.dicom_version, Some(DicomVersion::V2017c));
        assert!(request.force);
        assert!(request.keep.is_empty());

        let err = ModificationRequest::from_json(r#"{ "Remove": "PatientName" }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadFileFormat);
    }

    #[test]
    fn main_identifiers_require_force() {
        let request = ModificationRequest {
            remove: vec!["SeriesInstanceUID".into()],
            ..Default::default()
        };
        let mut m = DicomModification::new();
        let err = m
            .parse_modify_request(&request, ResourceLevel::Instance)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.to_string().contains("requires the \"Force\" option"));

        // nested occurrences are not main identifiers
        let request = ModificationRequest {
            remove: vec!["ReferencedSeriesSequence[*].SeriesInstanceUID".into()],
            ..Default::default()
        };
        let mut m = DicomModification::new();
        m.parse_modify_request(&request, ResourceLevel::Instance)
            .unwrap();
        assert!(!m.is_removed(tags::SERIES_INSTANCE_UID));
    }

    #[test]
    fn patient_level_requires_new_patient_id() {
        let mut m = DicomModification::new();
        let err = m
            .parse_modify_request(&ModificationRequest::default(), ResourceLevel::Patient)
            .unwrap_err();
        assert!(matches!(err, crate::Error::ManualIdentifier { .. }));

        let request = ModificationRequest {
            replace: json!({ "PatientID": "P2" }).as_object().cloned().unwrap(),
            force: true,
            ..Default::default()
        };
        let mut m = DicomModification::new();
        m.parse_modify_request(&request, ResourceLevel::Patient)
            .unwrap();
        assert_eq!(m.replacement_as_str(tags::PATIENT_ID).unwrap(), Some("P2"));
    }

    #[test]
    fn series_level_keeps_parent_study() {
        let request = ModificationRequest {
            replace: json!({ "StudyInstanceUID": "1.2.3" }).as_object().cloned().unwrap(),
            force: true,
            ..Default::default()
        };
        let mut m = DicomModification::new();
        m.parse_rules(&request).unwrap();
        m.set_level(ResourceLevel::Series);
        let err = m.check_hierarchy().unwrap_err();
        assert!(err.to_string().contains("StudyInstanceUID"));
    }

    #[test]
    fn anonymization_request() {
        let request = ModificationRequest {
            keep: vec!["InstitutionName".into(), "0009,1001".into()],
            keep_private_tags: true,
            dicom_version: Some(DicomVersion::V2021b),
            ..Default::default()
        };
        let mut m = DicomModification::new();
        let overridden = m.parse_anonymization_request(&request).unwrap();
        assert!(!overridden);
        assert!(m.is_anonymization());
        assert!(!m.remove_private_tags());
        assert!(m.is_kept(tags::INSTITUTION_NAME));
        assert!(m.is_kept(Tag(0x0009, 0x1001)));
        assert_eq!(m.level(), ResourceLevel::Patient);

        let request = ModificationRequest {
            replace: json!({ "PatientName": "Hidden" }).as_object().cloned().unwrap(),
            ..Default::default()
        };
        let mut m = DicomModification::new();
        assert!(m.parse_anonymization_request(&request).unwrap());
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        let request = ModificationRequest {
            keep: vec!["NoSuchAttribute".into()],
            ..Default::default()
        };
        let err = DicomModification::new()
            .parse_anonymization_request(&request)
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPath { .. }));

        let request = ModificationRequest {
            replace: json!({ "InstitutionName": 12 }).as_object().cloned().unwrap(),
            ..Default::default()
        };
        let err = DicomModification::new()
            .parse_modify_request(&request, ResourceLevel::Instance)
            .unwrap_err();
        assert!(matches!(err, crate::Error::BadReplacement { .. }));
    }
}
