//! Rewriting of the identifiers which relate a data set
//! to other instances, at any depth of nested sequences.
use crate::modification::DicomModification;
use crate::uid_map::ResourceLevel;
use crate::{AccessSnafu, Error, Result};
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_object::{Action, InMemDicomObject, ReplaceMode, TagVisitor, Value};
use snafu::ResultExt;

/// Applies the anonymization rules to nested attributes,
/// and remaps every identifier of the UID set wherever it appears.
///
/// Identifier generation may fail in the middle of the visit:
/// the first failure is kept and reported by [`finish`](Self::finish).
pub(crate) struct RelationshipsVisitor<'a> {
    modification: &'a mut DicomModification,
    error: Option<Error>,
}

impl<'a> RelationshipsVisitor<'a> {
    pub(crate) fn new(modification: &'a mut DicomModification) -> Self {
        RelationshipsVisitor {
            modification,
            error: None,
        }
    }

    pub(crate) fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn is_kept_sequence(&self, parent_tags: &[Tag], parent_indexes: &[usize], tag: Tag) -> bool {
        self.modification
            .keep_sequences
            .iter()
            .any(|path| path.is_match(parent_tags, parent_indexes, tag))
    }

    fn is_removed_private(&self, tag: Tag) -> bool {
        tag.is_private()
            && self.modification.remove_private_tags
            && !self.modification.private_tags_to_keep.contains(&tag)
    }

    /// The action for nested elements which are not text.
    fn default_action(&self, parent_tags: &[Tag], parent_indexes: &[usize], tag: Tag) -> Action {
        if parent_tags.is_empty()
            || !self.modification.is_anonymization
            || self.is_kept_sequence(parent_tags, parent_indexes, tag)
        {
            Action::None
        } else if self.is_removed_private(tag)
            || self.modification.is_removed(tag)
            || self.modification.is_cleared(tag)
        {
            Action::Remove
        } else {
            Action::None
        }
    }

    fn map(&mut self, value: &str, level: ResourceLevel) -> Action {
        if self.error.is_some() {
            return Action::None;
        }
        match self.modification.map_dicom_identifier(value, level) {
            Ok(mapped) => Action::Replace(mapped),
            Err(e) => {
                self.error = Some(e);
                Action::None
            }
        }
    }

    fn is_remapped(&self, tag: Tag) -> bool {
        self.modification.uids.contains(&tag) && !self.modification.is_replaced(tag)
    }
}

/// Whether the element is the reference from an RT structure set
/// to the studies its frames of reference relate to.
fn is_rt_referenced_study(parent_tags: &[Tag], tag: Tag) -> bool {
    parent_tags
        == [
            tags::REFERENCED_FRAME_OF_REFERENCE_SEQUENCE,
            tags::RT_REFERENCED_STUDY_SEQUENCE,
        ]
        && tag == tags::REFERENCED_SOP_INSTANCE_UID
}

fn pseudonym_or_instance(tag: Tag) -> ResourceLevel {
    if tag == tags::PATIENT_ID || tag == tags::PATIENT_NAME {
        ResourceLevel::Patient
    } else {
        ResourceLevel::Instance
    }
}

impl TagVisitor for RelationshipsVisitor<'_> {
    fn visit_not_supported(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _vr: VR) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_sequence(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _count: usize) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_binary(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _vr: VR, _data: &[u8]) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_integers(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _vr: VR, _v: &[i64]) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_doubles(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _vr: VR, _v: &[f64]) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_attributes(&mut self, pt: &[Tag], pi: &[usize], tag: Tag, _v: &[Tag]) -> Action {
        self.default_action(pt, pi, tag)
    }

    fn visit_string(
        &mut self,
        parent_tags: &[Tag],
        parent_indexes: &[usize],
        tag: Tag,
        _vr: VR,
        value: &str,
    ) -> Action {
        if parent_tags.is_empty() {
            // hierarchy identifiers of the top level were handled already
            return if self.is_remapped(tag) {
                self.map(value, pseudonym_or_instance(tag))
            } else {
                Action::None
            };
        }

        if self.is_kept_sequence(parent_tags, parent_indexes, tag) {
            return Action::None;
        }

        if self.modification.is_anonymization {
            if self.is_removed_private(tag) || self.modification.is_removed(tag) {
                return Action::Remove;
            }
            if self.modification.is_cleared(tag) {
                return Action::Replace(String::new());
            }
        }

        if tag == tags::STUDY_INSTANCE_UID {
            self.map(value, ResourceLevel::Study)
        } else if tag == tags::SERIES_INSTANCE_UID {
            self.map(value, ResourceLevel::Series)
        } else if tag == tags::SOP_INSTANCE_UID {
            self.map(value, ResourceLevel::Instance)
        } else if self.modification.uids.contains(&tag) {
            if is_rt_referenced_study(parent_tags, tag) {
                self.map(value, ResourceLevel::Study)
            } else {
                self.map(value, pseudonym_or_instance(tag))
            }
        } else {
            Action::None
        }
    }
}

/// Drop the references to other instances instead of remapping them.
///
/// The pseudonyms of the patient are still remapped.
pub(crate) fn remove_relationships(
    modification: &mut DicomModification,
    obj: &mut InMemDicomObject,
) -> Result<()> {
    let uids: Vec<Tag> = modification
        .uids
        .iter()
        .copied()
        .filter(|&t| !modification.is_replaced(t))
        .collect();

    for tag in uids {
        if tag == tags::PATIENT_ID || tag == tags::PATIENT_NAME {
            let original = match obj.get(tag).and_then(|e| e.to_str()) {
                Some(v) => v.into_owned(),
                None => continue,
            };
            let mapped = modification.map_dicom_identifier(&original, ResourceLevel::Patient)?;
            obj.replace(tag, Value::from(mapped), ReplaceMode::IgnoreIfAbsent, None)
                .context(AccessSnafu)?;
        } else {
            obj.remove(tag);
        }
    }

    for tag in [tags::REFERENCED_IMAGE_SEQUENCE, tags::SOURCE_IMAGE_SEQUENCE] {
        if !modification.is_replaced(tag) {
            obj.remove(tag);
        }
    }
    Ok(())
}
