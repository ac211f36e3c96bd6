use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{ApiError, Result};

/// GitHub Content entry type.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GhContentType {
    /// Regular file.
    #[default]
    File,
    /// Directory.
    Dir,
    /// Symbolic link.
    Symlink,
    /// Submodule.
    Submodule,
}

/// GitHub Content entry at a given repository path.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhContentEntry {
    /// Name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Object SHA.
    pub sha: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// API URL.
    pub url: String,
    /// Web URL.
    pub html_url: String,
    /// Raw git URL.
    pub git_url: String,
    /// Direct download URL.
    pub download_url: Option<String>,
    /// Entry type.
    #[serde(rename = "type")]
    pub content_type: GhContentType,
    /// Embedded content, present on individual file fetches only.
    pub content: Option<String>,
    /// Transport encoding of the embedded content.
    pub encoding: Option<String>,
}

impl GhContentEntry {
    /// Is this entry a directory?
    pub fn is_dir(&self) -> bool {
        self.content_type == GhContentType::Dir
    }

    /// Is this entry a regular file?
    pub fn is_file(&self) -> bool {
        self.content_type == GhContentType::File
    }

    /// Decode the embedded content into text.
    ///
    /// The API embeds file bytes as base64 with interspersed newlines,
    /// which are stripped before decoding.
    pub fn decoded_content(&self) -> Result<String> {
        match (self.encoding.as_deref(), self.content.as_deref()) {
            (Some("base64"), Some(content)) => {
                let raw = content.replace('\n', "");
                let bytes = BASE64
                    .decode(raw.as_bytes())
                    .map_err(ApiError::implementation)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            (encoding, _) => Err(ApiError::UnsupportedEncoding {
                encoding: encoding.unwrap_or_default().into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GhContentEntry, GhContentType};
    use crate::ApiError;

    #[test]
    fn deserialize_content_type() {
        let entry: GhContentEntry = serde_json::from_str(
            r#"{
                "name": "src",
                "path": "src",
                "sha": "abc123",
                "size": 0,
                "url": "https://api.github.com/repos/o/r/contents/src",
                "html_url": "https://github.com/o/r/tree/master/src",
                "git_url": "https://api.github.com/repos/o/r/git/trees/abc123",
                "download_url": null,
                "type": "dir"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.content_type, GhContentType::Dir);
        assert!(entry.is_dir());
        assert!(!entry.is_file());
        assert_eq!(entry.content, None);
    }

    #[test]
    fn decode_strips_embedded_newlines() {
        // "Hello, world!\n" encoded, with the newline the API inserts
        // every 60 characters reproduced in the middle of the payload.
        let entry = GhContentEntry {
            content: Some("SGVsbG8s\nIHdvcmxkIQo=\n".into()),
            encoding: Some("base64".into()),
            ..GhContentEntry::default()
        };

        assert_eq!(entry.decoded_content().unwrap(), "Hello, world!\n");
    }

    #[test]
    fn decode_rejects_unknown_encoding() {
        let entry = GhContentEntry {
            content: Some("00ff".into()),
            encoding: Some("hex".into()),
            ..GhContentEntry::default()
        };

        match entry.decoded_content() {
            Err(ApiError::UnsupportedEncoding { encoding }) => assert_eq!(encoding, "hex"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_missing_content() {
        let entry = GhContentEntry {
            content: None,
            encoding: Some("base64".into()),
            ..GhContentEntry::default()
        };

        assert!(matches!(
            entry.decoded_content(),
            Err(ApiError::UnsupportedEncoding { .. })
        ));
    }
}
