//! Document model: the payload stored at every tree node.
//!
//! A document is either a folder or a file. Shared fields (name,
//! accessibility, creation time) live on [`Document`]; file-specific state
//! lives in [`FileData`] behind the [`DocumentKind`] tag, dispatched by
//! exhaustive matches rather than downcasts.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nominal on-disk footprint reported for a folder itself.
pub const DEFAULT_FOLDER_SIZE: u64 = 3000;

/// Suffix appended to the names of pasted duplicates.
pub const COPY_SUFFIX: &str = "_copy";

/// The closed set of file extensions the system understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    #[default]
    Txt,
    Doc,
    Pdf,
    Jpg,
    Png,
    Gif,
    Html,
    Xml,
    Csv,
    Zip,
    Mp3,
    Mp4,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Txt => ".txt",
            Extension::Doc => ".doc",
            Extension::Pdf => ".pdf",
            Extension::Jpg => ".jpg",
            Extension::Png => ".png",
            Extension::Gif => ".gif",
            Extension::Html => ".html",
            Extension::Xml => ".xml",
            Extension::Csv => ".csv",
            Extension::Zip => ".zip",
            Extension::Mp3 => ".mp3",
            Extension::Mp4 => ".mp4",
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown file extension: {0}")]
pub struct UnknownExtension(pub String);

impl std::str::FromStr for Extension {
    type Err = UnknownExtension;

    /// Accepts the extension with or without its leading dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix('.').unwrap_or(s);
        match stripped.to_ascii_lowercase().as_str() {
            "txt" => Ok(Extension::Txt),
            "doc" => Ok(Extension::Doc),
            "pdf" => Ok(Extension::Pdf),
            "jpg" => Ok(Extension::Jpg),
            "png" => Ok(Extension::Png),
            "gif" => Ok(Extension::Gif),
            "html" => Ok(Extension::Html),
            "xml" => Ok(Extension::Xml),
            "csv" => Ok(Extension::Csv),
            "zip" => Ok(Extension::Zip),
            "mp3" => Ok(Extension::Mp3),
            "mp4" => Ok(Extension::Mp4),
            _ => Err(UnknownExtension(s.to_string())),
        }
    }
}

/// File-specific state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileData {
    pub extension: Extension,
    pub content: String,
    pub locked: bool,
    /// Number of completed edits.
    pub changes: u32,
    /// Epoch seconds of the most recent edit (creation time initially).
    pub changed_at: i64,
    /// Monotonic edit sequence number assigned by the facade; timestamps
    /// have second resolution, this orders edits within a second.
    pub change_seq: u64,
}

/// Folder or file payload behind the kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentKind {
    Folder,
    File(FileData),
}

/// A single entry of the file system: the element stored at a tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    name: String,
    accessible: bool,
    /// Epoch seconds.
    created_at: i64,
    kind: DocumentKind,
}

impl Document {
    /// Create a folder document.
    pub fn folder(name: impl Into<String>) -> Self {
        Document {
            id: Uuid::new_v4(),
            name: name.into(),
            accessible: true,
            created_at: Utc::now().timestamp(),
            kind: DocumentKind::Folder,
        }
    }

    /// Create an empty file document with the given extension.
    pub fn file(name: impl Into<String>, extension: Extension) -> Self {
        let now = Utc::now().timestamp();
        Document {
            id: Uuid::new_v4(),
            name: name.into(),
            accessible: true,
            created_at: now,
            kind: DocumentKind::File(FileData {
                extension,
                content: String::new(),
                locked: false,
                changes: 0,
                changed_at: now,
                change_seq: 0,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn set_accessible(&mut self, accessible: bool) {
        self.accessible = accessible;
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn kind(&self) -> &DocumentKind {
        &self.kind
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, DocumentKind::Folder)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, DocumentKind::File(_))
    }

    /// File payload, if this document is a file.
    pub fn file_data(&self) -> Option<&FileData> {
        match &self.kind {
            DocumentKind::File(data) => Some(data),
            DocumentKind::Folder => None,
        }
    }

    pub fn file_data_mut(&mut self) -> Option<&mut FileData> {
        match &mut self.kind {
            DocumentKind::File(data) => Some(data),
            DocumentKind::Folder => None,
        }
    }

    /// Byte length of a file's content, or the nominal folder size.
    pub fn size(&self) -> u64 {
        match &self.kind {
            DocumentKind::Folder => DEFAULT_FOLDER_SIZE,
            DocumentKind::File(data) => data.content.len() as u64,
        }
    }

    /// Epoch seconds of the last content change; folders report their
    /// creation time.
    pub fn changed_at(&self) -> i64 {
        match &self.kind {
            DocumentKind::Folder => self.created_at,
            DocumentKind::File(data) => data.changed_at,
        }
    }

    /// Record one completed edit.
    pub fn touch(&mut self) {
        if let DocumentKind::File(data) = &mut self.kind {
            data.changes += 1;
            data.changed_at = Utc::now().timestamp();
        }
    }

    /// Produce a duplicate with a fresh identity and a `_copy` suffixed
    /// name. File copies keep the content but reset the edit counter.
    pub fn copy_of(&self) -> Document {
        let now = Utc::now().timestamp();
        let kind = match &self.kind {
            DocumentKind::Folder => DocumentKind::Folder,
            DocumentKind::File(data) => DocumentKind::File(FileData {
                extension: data.extension,
                content: data.content.clone(),
                locked: false,
                changes: 0,
                changed_at: now,
                change_seq: 0,
            }),
        };
        Document {
            id: Uuid::new_v4(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            accessible: true,
            created_at: now,
            kind,
        }
    }
}

impl std::fmt::Display for Document {
    /// Files display with their extension, folders with name only.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DocumentKind::Folder => f.write_str(&self.name),
            DocumentKind::File(data) => write!(f, "{}{}", self.name, data.extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_parses_with_or_without_dot() {
        assert_eq!(".mp3".parse::<Extension>().unwrap(), Extension::Mp3);
        assert_eq!("CSV".parse::<Extension>().unwrap(), Extension::Csv);
        assert!("exe".parse::<Extension>().is_err());
    }

    #[test]
    fn file_size_tracks_content_bytes() {
        let mut file = Document::file("notes", Extension::Txt);
        assert_eq!(file.size(), 0);
        file.file_data_mut().unwrap().content = "hello".to_string();
        assert_eq!(file.size(), 5);
    }

    #[test]
    fn folder_size_is_the_default_constant() {
        assert_eq!(Document::folder("stuff").size(), DEFAULT_FOLDER_SIZE);
    }

    #[test]
    fn touch_increments_changes() {
        let mut file = Document::file("notes", Extension::Txt);
        file.touch();
        file.touch();
        assert_eq!(file.file_data().unwrap().changes, 2);
    }

    #[test]
    fn copy_has_fresh_identity_and_suffixed_name() {
        let mut original = Document::file("report", Extension::Pdf);
        original.file_data_mut().unwrap().content = "q3 numbers".to_string();
        let copy = original.copy_of();
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.name(), "report_copy");
        assert_eq!(copy.file_data().unwrap().content, "q3 numbers");
        assert_eq!(copy.file_data().unwrap().changes, 0);
    }

    #[test]
    fn display_includes_extension_for_files() {
        assert_eq!(Document::file("song", Extension::Mp3).to_string(), "song.mp3");
        assert_eq!(Document::folder("music").to_string(), "music");
    }
}
