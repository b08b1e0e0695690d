//! Module for attribute paths.
//!
//! A [`DicomPath`] addresses a data element at an arbitrary depth
//! of nested sequences:
//! zero or more `(sequence tag, item index)` steps followed by a final tag.
//! An item index may be universal (`[*]`),
//! in which case the path works as a pattern matching any item.
//!
//! # Example
//!
//! ```
//! # use dcmkit_core::{DicomPath, Tag};
//! let path: DicomPath = "(0008,1115)[0].(0008,1140)[*].(0008,1155)".parse()?;
//! assert_eq!(path.prefix_len(), 2);
//! assert_eq!(path.final_tag(), Tag(0x0008, 0x1155));
//! assert!(path.is_universal(1));
//! # Ok::<(), dcmkit_core::Error>(())
//! ```
use std::fmt::{self, Write};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Error, InvalidPathSnafu, Result};
use crate::Tag;

/// A single step into a sequence:
/// the tag of the sequence and the item to enter.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct DicomPathStep {
    /// the sequence tag
    pub tag: Tag,
    /// the item index, `None` if any item matches
    pub index: Option<usize>,
}

impl DicomPathStep {
    /// Create a step into a specific item of a sequence.
    pub fn new(tag: Tag, index: usize) -> Self {
        DicomPathStep {
            tag,
            index: Some(index),
        }
    }

    /// Create a step matching every item of a sequence.
    pub fn universal(tag: Tag) -> Self {
        DicomPathStep { tag, index: None }
    }
}

impl fmt::Display for DicomPathStep {
    /// Displays the step as `(GGGG,EEEE)[i]`, or `(GGGG,EEEE)[*]` if universal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.tag, i),
            None => write!(f, "{}[*]", self.tag),
        }
    }
}

/// A path to a data element inside nested sequences.
///
/// A path with an empty prefix designates a top-level attribute.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct DicomPath {
    prefix: SmallVec<[DicomPathStep; 2]>,
    final_tag: Tag,
}

impl DicomPath {
    /// Create a path to a top-level attribute.
    pub fn new(final_tag: Tag) -> Self {
        DicomPath {
            prefix: SmallVec::new(),
            final_tag,
        }
    }

    /// Create a path from its steps and final tag.
    pub fn from_steps(steps: impl IntoIterator<Item = DicomPathStep>, final_tag: Tag) -> Self {
        DicomPath {
            prefix: steps.into_iter().collect(),
            final_tag,
        }
    }

    /// Add a step into a specific item of a sequence.
    pub fn add_prefix_item(&mut self, tag: Tag, index: usize) {
        self.prefix.push(DicomPathStep::new(tag, index));
    }

    /// Add a step matching every item of a sequence.
    pub fn add_universal_prefix(&mut self, tag: Tag) {
        self.prefix.push(DicomPathStep::universal(tag));
    }

    /// The number of sequence steps before the final tag.
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    /// The sequence steps before the final tag.
    pub fn prefix(&self) -> &[DicomPathStep] {
        &self.prefix
    }

    /// The tag of the sequence at step `level`.
    ///
    /// # Panic
    ///
    /// Panics if `level` is not below [`prefix_len`](Self::prefix_len).
    pub fn prefix_tag(&self, level: usize) -> Tag {
        self.prefix[level].tag
    }

    /// Whether step `level` matches any item.
    ///
    /// # Panic
    ///
    /// Panics if `level` is not below [`prefix_len`](Self::prefix_len).
    pub fn is_universal(&self, level: usize) -> bool {
        self.prefix[level].index.is_none()
    }

    /// The item index at step `level`, `None` if universal.
    ///
    /// # Panic
    ///
    /// Panics if `level` is not below [`prefix_len`](Self::prefix_len).
    pub fn prefix_index(&self, level: usize) -> Option<usize> {
        self.prefix[level].index
    }

    /// The tag of the addressed attribute.
    pub fn final_tag(&self) -> Tag {
        self.final_tag
    }

    /// Whether any step matches more than one item.
    pub fn has_universal(&self) -> bool {
        self.prefix.iter().any(|step| step.index.is_none())
    }

    /// Check whether a visited element falls under this path pattern.
    ///
    /// The element is described by the tags and item indices
    /// of its enclosing sequences, plus its own tag.
    /// An element deeper than the pattern matches
    /// if its ancestor at the pattern's depth is the pattern's final tag,
    /// so that a path to a sequence covers everything inside of it.
    pub fn is_match(&self, prefix_tags: &[Tag], prefix_indexes: &[usize], final_tag: Tag) -> bool {
        debug_assert_eq!(prefix_tags.len(), prefix_indexes.len());

        if prefix_tags.len() < self.prefix.len() {
            return false;
        }

        let prefix_matches = self
            .prefix
            .iter()
            .zip(prefix_tags.iter().zip(prefix_indexes))
            .all(|(step, (tag, index))| {
                step.tag == *tag && step.index.map_or(true, |i| i == *index)
            });
        if !prefix_matches {
            return false;
        }

        if prefix_tags.len() == self.prefix.len() {
            final_tag == self.final_tag
        } else {
            prefix_tags[self.prefix.len()] == self.final_tag
        }
    }

    /// Parse a path, resolving tags which are not written in hexadecimal
    /// (such as dictionary keywords) with the given function.
    pub fn parse_with<F>(text: &str, resolve: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<Tag>,
    {
        let parse_tag = |token: &str| -> Result<Tag> {
            let token = token.trim();
            match token.parse::<Tag>() {
                Ok(tag) => Ok(tag),
                Err(_) => match resolve(token) {
                    Some(tag) => Ok(tag),
                    None => InvalidPathSnafu {
                        text,
                        reason: "unknown tag",
                    }
                    .fail(),
                },
            }
        };

        let tokens: Vec<&str> = text.split('.').collect();
        let (last, steps) = match tokens.split_last() {
            Some((last, steps)) if !last.trim().is_empty() => (last, steps),
            _ => {
                return InvalidPathSnafu {
                    text,
                    reason: "empty path",
                }
                .fail()
            }
        };

        let mut path = DicomPath::new(parse_tag(last)?);
        for step in steps {
            let step = step.trim();
            let (tag, index) = match step
                .strip_suffix(']')
                .and_then(|s| s.rsplit_once('['))
            {
                Some(parts) => parts,
                None => {
                    return InvalidPathSnafu {
                        text,
                        reason: "missing item index",
                    }
                    .fail()
                }
            };
            let tag = parse_tag(tag)?;
            let index = index.trim();
            if index == "*" {
                path.add_universal_prefix(tag);
            } else {
                match index.parse::<usize>() {
                    Ok(i) => path.add_prefix_item(tag, i),
                    Err(_) => {
                        return InvalidPathSnafu {
                            text,
                            reason: "bad item index",
                        }
                        .fail()
                    }
                }
            }
        }
        Ok(path)
    }
}

impl From<Tag> for DicomPath {
    fn from(tag: Tag) -> Self {
        DicomPath::new(tag)
    }
}

/// Creates a path for `tag[item].tag`
impl From<(Tag, usize, Tag)> for DicomPath {
    fn from((tag0, item, tag1): (Tag, usize, Tag)) -> Self {
        DicomPath::from_steps([DicomPathStep::new(tag0, item)], tag1)
    }
}

/// Creates a path for `tag[item].tag[item].tag`
impl From<(Tag, usize, Tag, usize, Tag)> for DicomPath {
    fn from((tag0, item0, tag1, item1, tag2): (Tag, usize, Tag, usize, Tag)) -> Self {
        DicomPath::from_steps(
            [
                DicomPathStep::new(tag0, item0),
                DicomPathStep::new(tag1, item1),
            ],
            tag2,
        )
    }
}

impl FromStr for DicomPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DicomPath::parse_with(s, |_| None)
    }
}

impl fmt::Display for DicomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.prefix {
            fmt::Display::fmt(step, f)?;
            f.write_char('.')?;
        }
        fmt::Display::fmt(&self.final_tag, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_paths() {
        let path = DicomPath::new(Tag(0x0014, 0x5100));
        assert_eq!(path.to_string(), "(0014,5100)");

        let path: DicomPath = (Tag(0x0018, 0x6011), 2, Tag(0x0018, 0x6012)).into();
        assert_eq!(path.to_string(), "(0018,6011)[2].(0018,6012)");

        let mut path = DicomPath::new(Tag(0x0008, 0x1155));
        path.add_universal_prefix(Tag(0x0008, 0x1115));
        assert_eq!(path.to_string(), "(0008,1115)[*].(0008,1155)");
    }

    #[test]
    fn parse_paths() {
        let path: DicomPath = "(0008,1115)[0].0008,1140[*].00081155".parse().unwrap();
        assert_eq!(path.prefix_len(), 2);
        assert_eq!(path.prefix_tag(0), Tag(0x0008, 0x1115));
        assert_eq!(path.prefix_index(0), Some(0));
        assert_eq!(path.prefix_tag(1), Tag(0x0008, 0x1140));
        assert!(path.is_universal(1));
        assert_eq!(path.final_tag(), Tag(0x0008, 0x1155));

        let path: DicomPath = "0010,0010".parse().unwrap();
        assert_eq!(path.prefix_len(), 0);

        assert!("".parse::<DicomPath>().is_err());
        assert!("(0008,1115).(0008,1155)".parse::<DicomPath>().is_err());
        assert!("(0008,1115)[x].(0008,1155)".parse::<DicomPath>().is_err());
        assert!("(0008,1115)[0].".parse::<DicomPath>().is_err());
    }

    #[test]
    fn parse_with_keywords() {
        let resolve = |name: &str| match name {
            "ReferencedSeriesSequence" => Some(Tag(0x0008, 0x1115)),
            "SeriesInstanceUID" => Some(Tag(0x0020, 0x000E)),
            _ => None,
        };
        let path =
            DicomPath::parse_with("ReferencedSeriesSequence[1].SeriesInstanceUID", resolve)
                .unwrap();
        assert_eq!(
            path,
            DicomPath::from((Tag(0x0008, 0x1115), 1, Tag(0x0020, 0x000E)))
        );
        assert!(DicomPath::parse_with("NoSuchThing", resolve).is_err());
    }

    #[test]
    fn match_paths() {
        let seq = Tag(0x0008, 0x1115);
        let uid = Tag(0x0008, 0x1155);

        let top = DicomPath::new(uid);
        assert!(top.is_match(&[], &[], uid));
        assert!(!top.is_match(&[], &[], seq));
        // a top-level path covers the content of the sequence it names
        assert!(DicomPath::new(seq).is_match(&[seq], &[3], uid));

        let nested: DicomPath = (seq, 1, uid).into();
        assert!(nested.is_match(&[seq], &[1], uid));
        assert!(!nested.is_match(&[seq], &[0], uid));
        assert!(!nested.is_match(&[], &[], uid));

        let mut any = DicomPath::new(uid);
        any.add_universal_prefix(seq);
        assert!(any.is_match(&[seq], &[0], uid));
        assert!(any.is_match(&[seq], &[7], uid));
        assert!(!any.is_match(&[Tag(0x0008, 0x1140)], &[0], uid));
    }
}
