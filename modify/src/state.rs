//! Serialization of a modification, including the identifiers
//! mapped so far, so that a long anonymization job can be resumed.
use crate::modification::DicomModification;
use crate::profile::{basic_profile, DicomVersion, TagRange};
use crate::uid_map::{ResourceLevel, UidMap};
use crate::{BadStateSnafu, ReadStateSnafu, Result, SerializeGeneratorSnafu, WriteStateSnafu};
use dcmkit_core::{DicomPath, Tag};
use dcmkit_dictionary_std::tags;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use snafu::ResultExt;
use std::collections::BTreeSet;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct State {
    remove_private_tags: bool,
    level: ResourceLevel,
    allow_manual_identifiers: bool,
    #[serde(rename = "KeepStudyInstanceUID", default)]
    keep_study_instance_uid: bool,
    #[serde(rename = "KeepSeriesInstanceUID", default)]
    keep_series_instance_uid: bool,
    #[serde(rename = "KeepSOPInstanceUID", default)]
    keep_sop_instance_uid: bool,
    update_referenced_relationships: bool,
    is_anonymization: bool,
    private_creator: String,
    removals: Vec<String>,
    clearings: Vec<String>,
    private_tags_to_keep: Vec<String>,
    replacements: Map<String, JsonValue>,
    #[serde(flatten)]
    uid_map: UidMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uids: Option<Vec<String>>,
    #[serde(default)]
    removed_ranges: Vec<[u32; 4]>,
    #[serde(default)]
    keep_sequences: Vec<String>,
    #[serde(default)]
    remove_sequences: Vec<String>,
    #[serde(default)]
    sequence_replacements: Map<String, JsonValue>,
}

fn format_tags<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Vec<String> {
    tags.into_iter().map(|t| t.format()).collect()
}

fn parse_tag(text: &str) -> Result<Tag> {
    text.parse::<Tag>().map_err(|_| {
        BadStateSnafu {
            reason: format!("`{}` is not a tag", text),
        }
        .build()
    })
}

fn parse_tags(texts: &[String]) -> Result<BTreeSet<Tag>> {
    texts.iter().map(|t| parse_tag(t)).collect()
}

fn parse_path(text: &str) -> Result<DicomPath> {
    text.parse::<DicomPath>().map_err(|_| {
        BadStateSnafu {
            reason: format!("`{}` is not a path", text),
        }
        .build()
    })
}

fn parse_range(bounds: [u32; 4]) -> Result<TagRange> {
    let [group_from, group_to, element_from, element_to] = bounds;
    if group_from > group_to
        || element_from > element_to
        || group_to > 0xffff
        || element_to > 0xffff
    {
        return BadStateSnafu {
            reason: format!("invalid tag range {:?}", bounds),
        }
        .fail();
    }
    Ok(TagRange::new(
        group_from as u16,
        group_to as u16,
        element_from as u16,
        element_to as u16,
    ))
}

impl DicomModification {
    /// Serialize this modification to JSON.
    ///
    /// Fails if a custom identifier generator is in use.
    pub fn to_json(&self) -> Result<JsonValue> {
        if self.has_identifier_generator() {
            return SerializeGeneratorSnafu.fail();
        }

        let state = State {
            remove_private_tags: self.remove_private_tags,
            level: self.level,
            allow_manual_identifiers: self.allow_manual_identifiers,
            keep_study_instance_uid: self.keep_study_instance_uid,
            keep_series_instance_uid: self.keep_series_instance_uid,
            keep_sop_instance_uid: self.keep_sop_instance_uid,
            update_referenced_relationships: self.update_referenced_relationships,
            is_anonymization: self.is_anonymization,
            private_creator: self.private_creator.clone(),
            removals: format_tags(&self.removals),
            clearings: format_tags(&self.clearings),
            private_tags_to_keep: format_tags(&self.private_tags_to_keep),
            replacements: self
                .replacements
                .iter()
                .map(|(tag, value)| (tag.format(), value.clone()))
                .collect(),
            uid_map: self.uid_map.clone(),
            uids: Some(format_tags(&self.uids)),
            removed_ranges: self
                .removed_ranges
                .iter()
                .map(|r| {
                    [
                        u32::from(r.group_from()),
                        u32::from(r.group_to()),
                        u32::from(r.element_from()),
                        u32::from(r.element_to()),
                    ]
                })
                .collect(),
            keep_sequences: self.keep_sequences.iter().map(|p| p.to_string()).collect(),
            remove_sequences: self.remove_sequences.iter().map(|p| p.to_string()).collect(),
            sequence_replacements: self
                .sequence_replacements
                .iter()
                .map(|(path, value)| (path.to_string(), value.clone()))
                .collect(),
        };
        serde_json::to_value(state).context(WriteStateSnafu)
    }

    /// Restore a modification serialized by [`to_json`](Self::to_json).
    ///
    /// States written before the UID set was stored
    /// get the UID set of the 2008 profile.
    pub fn from_json(json: &JsonValue) -> Result<Self> {
        let state: State = serde_json::from_value(json.clone()).context(ReadStateSnafu)?;

        let mut m = DicomModification::new();
        m.remove_private_tags = state.remove_private_tags;
        m.level = state.level;
        m.allow_manual_identifiers = state.allow_manual_identifiers;
        m.keep_study_instance_uid = state.keep_study_instance_uid;
        m.keep_series_instance_uid = state.keep_series_instance_uid;
        m.keep_sop_instance_uid = state.keep_sop_instance_uid;
        m.update_referenced_relationships = state.update_referenced_relationships;
        m.is_anonymization = state.is_anonymization;
        m.private_creator = state.private_creator;
        m.removals = parse_tags(&state.removals)?;
        m.clearings = parse_tags(&state.clearings)?;
        m.private_tags_to_keep = parse_tags(&state.private_tags_to_keep)?;
        for (text, value) in state.replacements {
            m.replacements.insert(parse_tag(&text)?, value);
        }
        m.uid_map = state.uid_map;

        m.uids = match state.uids {
            Some(uids) => parse_tags(&uids)?,
            None => {
                let mut uids: BTreeSet<Tag> = basic_profile(DicomVersion::V2008)
                    .uids
                    .iter()
                    .copied()
                    .collect();
                uids.insert(tags::PATIENT_ID);
                uids.insert(tags::PATIENT_NAME);
                uids
            }
        };

        m.removed_ranges = state
            .removed_ranges
            .into_iter()
            .map(parse_range)
            .collect::<Result<_>>()?;
        m.keep_sequences = state
            .keep_sequences
            .iter()
            .map(|p| parse_path(p))
            .collect::<Result<_>>()?;
        m.remove_sequences = state
            .remove_sequences
            .iter()
            .map(|p| parse_path(p))
            .collect::<Result<_>>()?;
        for (text, value) in state.sequence_replacements {
            m.sequence_replacements.push((parse_path(&text)?, value));
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uid_map::IdentifierGenerator;
    use dcmkit_object::DicomMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serialize_anonymization() {
        let mut m = DicomModification::new();
        m.setup_anonymization(DicomVersion::V2017c).unwrap();
        m.keep_path("(0008,1115)[*].(0020,000E)".parse().unwrap());
        m.replace_path("(0008,1140)[0].(0008,1155)".parse().unwrap(), "1.2.3", true);
        m.map_dicom_identifier("P1", ResourceLevel::Patient).unwrap();

        let json = m.to_json().unwrap();
        assert_eq!(json["Level"], json!("Patient"));
        assert_eq!(json["IsAnonymization"], json!(true));
        assert_eq!(json["Replacements"]["0012,0062"], json!("YES"));
        assert_eq!(json["KeepSequences"], json!(["(0008,1115)[*].(0020,000E)"]));
        assert_eq!(
            json["SequenceReplacements"],
            json!({ "(0008,1140)[0].(0008,1155)": "1.2.3" })
        );
        assert!(json["MapPatients"]["P1"].is_string());
        assert!(json["RemovedRanges"]
            .as_array()
            .unwrap()
            .contains(&json!([0x6000, 0x60FF, 0x3000, 0x3000])));

        let back = DicomModification::from_json(&json).unwrap();
        assert_eq!(back.to_json().unwrap(), json);
        assert_eq!(back.uids(), m.uids());
        assert_eq!(back.removed_ranges(), m.removed_ranges());
        assert!(back.is_removed(Tag(0x6002, 0x3000)));
    }

    #[test]
    fn older_states_get_default_uids() {
        let mut json = DicomModification::new().to_json().unwrap();
        json.as_object_mut().unwrap().remove("Uids");
        json.as_object_mut().unwrap().remove("KeepSOPInstanceUID");

        let m = DicomModification::from_json(&json).unwrap();
        assert!(m.uids().contains(&tags::PATIENT_NAME));
        assert!(m.uids().contains(&tags::FRAME_OF_REFERENCE_UID));
        assert_eq!(m.level(), ResourceLevel::Instance);
    }

    #[test]
    fn invalid_states() {
        let mut json = DicomModification::new().to_json().unwrap();
        json["RemovedRanges"] = json!([[0x6000, 0x5000, 0, 0]]);
        let err = DicomModification::from_json(&json).unwrap_err();
        assert!(matches!(err, crate::Error::BadState { .. }));

        json["RemovedRanges"] = json!([[0x6000, 0x6000, 0, 0x10000]]);
        assert!(DicomModification::from_json(&json).is_err());

        json["RemovedRanges"] = json!([]);
        json["Removals"] = json!(["PatientName"]);
        assert!(DicomModification::from_json(&json).is_err());

        let err = DicomModification::from_json(&json!({ "Level": "Patient" })).unwrap_err();
        assert!(matches!(err, crate::Error::ReadState { .. }));
    }

    #[derive(Debug)]
    struct Fixed;

    impl IdentifierGenerator for Fixed {
        fn generate(&mut self, _: &str, _: ResourceLevel, _: &DicomMap) -> Option<String> {
            Some("1.2.3".into())
        }
    }

    #[test]
    fn custom_generators_are_not_serialized() {
        let mut m = DicomModification::new();
        m.set_identifier_generator(Box::new(Fixed));
        let err = m.to_json().unwrap_err();
        assert!(matches!(err, crate::Error::SerializeGenerator { .. }));
    }
}
