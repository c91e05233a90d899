//! Download format normalization
//!
//! Turns the raw `files` list of an item into the short, ranked list of
//! downloads shown to readers.

use serde::{Deserialize, Serialize};

use super::links::ArchiveEndpoints;
use super::upstream::RemoteFileDescriptor;

/// Canonical download categories, declared in preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormatLabel {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "EPUB")]
    Epub,
    #[serde(rename = "Plain Text")]
    PlainText,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "DJVU")]
    Djvu,
}

impl FormatLabel {
    pub const ALL: [FormatLabel; 5] = [
        FormatLabel::Pdf,
        FormatLabel::Epub,
        FormatLabel::PlainText,
        FormatLabel::Html,
        FormatLabel::Djvu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatLabel::Pdf => "PDF",
            FormatLabel::Epub => "EPUB",
            FormatLabel::PlainText => "Plain Text",
            FormatLabel::Html => "HTML",
            FormatLabel::Djvu => "DJVU",
        }
    }

    /// Exact, case-sensitive match against the canonical labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(FormatLabel::Pdf),
            "epub" => Some(FormatLabel::Epub),
            "txt" => Some(FormatLabel::PlainText),
            "html" => Some(FormatLabel::Html),
            "djvu" => Some(FormatLabel::Djvu),
            _ => None,
        }
    }
}

/// A downloadable file of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub label: FormatLabel,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Lowercased text after the last `.`, empty when the name has none
pub fn file_extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Label a file the way readers see it.
///
/// Known extensions win; otherwise the declared format is used verbatim, and
/// failing that the uppercased extension.
pub fn derive_label(name: &str, declared_format: Option<&str>) -> String {
    let ext = file_extension(name);
    if let Some(label) = FormatLabel::from_extension(&ext) {
        return label.as_str().to_string();
    }
    match declared_format {
        Some(format) if !format.is_empty() => format.to_string(),
        _ => ext.to_uppercase(),
    }
}

/// Keep the files whose label is allow-listed and rank them.
///
/// Files without a name are dropped; a missing declared format is fine as long
/// as the extension resolves. Same-label duplicates keep their source order.
pub fn normalize_formats(
    endpoints: &ArchiveEndpoints,
    identifier: &str,
    files: &[RemoteFileDescriptor],
) -> Vec<FormatEntry> {
    let mut entries: Vec<FormatEntry> = files
        .iter()
        .filter_map(|file| {
            let name = file.name.as_deref().filter(|n| !n.is_empty())?;
            let label = derive_label(name, file.format.as_deref());
            let label = FormatLabel::from_label(&label)?;
            Some(FormatEntry {
                label,
                url: endpoints.download_url(identifier, name),
                size: file.size,
            })
        })
        .collect();

    // stable
    entries.sort_by_key(|entry| entry.label);
    entries
}
