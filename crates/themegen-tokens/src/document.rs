//! Token document types.

use crate::naming::strip_em_suffix;
use serde::Deserialize;
use serde_json::Value;

/// One section of the document: token name to scalar value, in file order.
pub type TokenSection = serde_json::Map<String, Value>;

/// The sections the generator knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Colors,
    Sizing,
    Fonts,
}

impl Section {
    /// All sections, in output order.
    pub const ALL: [Section; 3] = [Section::Colors, Section::Sizing, Section::Fonts];

    /// The top-level JSON key of this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Colors => "colors",
            Section::Sizing => "sizing",
            Section::Fonts => "fonts",
        }
    }
}

/// Parsed token document.
///
/// An absent (or `null`) section is `None` and iterates as empty. Unknown
/// top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TokenDocument {
    pub colors: Option<TokenSection>,
    pub sizing: Option<TokenSection>,
    pub fonts: Option<TokenSection>,
}

impl TokenDocument {
    pub fn section(&self, section: Section) -> Option<&TokenSection> {
        match section {
            Section::Colors => self.colors.as_ref(),
            Section::Sizing => self.sizing.as_ref(),
            Section::Fonts => self.fonts.as_ref(),
        }
    }

    /// Entries of a section in document order; empty if the section is absent.
    pub fn entries(&self, section: Section) -> impl Iterator<Item = (&str, &Value)> {
        self.section(section)
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Number of tokens in a section (0 if absent).
    pub fn len(&self, section: Section) -> usize {
        self.section(section).map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|&s| self.len(s) == 0)
    }

    /// Sections not present in the source document.
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|&s| self.section(s).is_none())
            .collect()
    }
}

/// How a sizing token is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind<'a> {
    /// `<base>Em`: a multiplier of the em base unit, emitted under `base`.
    Em { base: &'a str },
    /// Any other name: an absolute value emitted as-is.
    Absolute,
}

impl<'a> SizeKind<'a> {
    pub fn of(name: &'a str) -> Self {
        match strip_em_suffix(name) {
            Some(base) => SizeKind::Em { base },
            None => SizeKind::Absolute,
        }
    }
}
