//! File attachments embedded in incidents.
//!
//! Attachments are stored inline as base64 data URIs; there is no separate
//! blob store. The provider accepts anything — `AttachmentPolicy` is the
//! acceptance check upload forms apply before handing files over.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A file embedded in an incident's `files` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    /// Data URI containing the base64-encoded bytes.
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

impl FileAttachment {
    /// Decoded size estimated from the base64 payload length, without
    /// decoding.
    pub fn estimated_bytes(&self) -> usize {
        let payload = match self.url.split_once(',') {
            Some((_, payload)) => payload,
            None => return 0,
        };
        let padding = payload.chars().rev().take_while(|c| *c == '=').count();
        (payload.len() / 4 * 3).saturating_sub(padding.min(2))
    }
}

/// Acceptance bounds for attachments on a single incident.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    pub max_files: usize,
    pub max_size_mb: usize,
    /// Accepted type patterns: a MIME type, a `prefix/*` wildcard, or a
    /// `.ext` filename suffix.
    pub accepted_types: Vec<String>,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_size_mb: 10,
            accepted_types: vec![
                "image/*".to_string(),
                "application/pdf".to_string(),
                ".doc".to_string(),
                ".docx".to_string(),
            ],
        }
    }
}

impl AttachmentPolicy {
    /// Check a full attachment list against the policy.
    pub fn check(&self, files: &[FileAttachment]) -> Result<(), AppError> {
        if files.len() > self.max_files {
            return Err(AppError::Validation(format!(
                "Maximum {} files allowed",
                self.max_files
            )));
        }
        for file in files {
            self.check_one(file)?;
        }
        Ok(())
    }

    fn check_one(&self, file: &FileAttachment) -> Result<(), AppError> {
        if file.estimated_bytes() > self.max_size_mb * 1024 * 1024 {
            return Err(AppError::Validation(format!(
                "File {} is too large. Maximum size is {}MB",
                file.name, self.max_size_mb
            )));
        }

        let accepted = self.accepted_types.iter().any(|pattern| {
            if let Some(prefix) = pattern.strip_suffix("/*") {
                file.content_type.starts_with(prefix)
            } else if pattern.starts_with('.') {
                file.name.ends_with(pattern.as_str())
            } else {
                file.content_type == *pattern
            }
        });
        if !accepted {
            return Err(AppError::Validation(format!(
                "File {} is not an accepted file type",
                file.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> FileAttachment {
        FileAttachment {
            name: name.to_string(),
            url: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==".to_string(),
            content_type: "image/png".to_string(),
        }
    }

    #[test]
    fn test_wildcard_and_extension_patterns() {
        let policy = AttachmentPolicy::default();
        assert!(policy.check(&[png("xray.png")]).is_ok());

        let doc = FileAttachment {
            name: "notes.docx".to_string(),
            url: "data:application/octet-stream;base64,AAAA".to_string(),
            content_type: "application/octet-stream".to_string(),
        };
        assert!(policy.check(&[doc]).is_ok());

        let exe = FileAttachment {
            name: "setup.exe".to_string(),
            url: "data:application/x-msdownload;base64,AAAA".to_string(),
            content_type: "application/x-msdownload".to_string(),
        };
        assert!(policy.check(&[exe]).is_err());
    }

    #[test]
    fn test_file_count_bound() {
        let policy = AttachmentPolicy::default();
        let files: Vec<_> = (0..6).map(|i| png(&format!("f{}.png", i))).collect();
        assert!(policy.check(&files).is_err());
        assert!(policy.check(&files[..5]).is_ok());
    }

    #[test]
    fn test_estimated_bytes() {
        // "AAAA" decodes to 3 bytes; "AAA=" to 2.
        let mut att = png("a.png");
        att.url = "data:image/png;base64,AAAA".to_string();
        assert_eq!(att.estimated_bytes(), 3);
        att.url = "data:image/png;base64,AAA=".to_string();
        assert_eq!(att.estimated_bytes(), 2);
    }
}
