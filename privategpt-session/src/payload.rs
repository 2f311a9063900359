//! Plaintext payload shapes handed over by the shell.
//!
//! These exist transiently: before encryption on the way into a store,
//! and after decryption on the way out. The shell validates file types
//! and sizes before anything reaches this crate.

use serde::{Deserialize, Serialize};

/// One chat turn, keyed by message id in the message store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Selects which encoding an attachment's `content` field carries.
/// Consumers must not mix the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// `content` holds UTF-8 text.
    Text,
    /// `content` holds base64-encoded image bytes.
    Image,
}

/// A user-attached file, post-validation.
///
/// Field names serialize in camelCase to match the shell's JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub kind: AttachmentKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_serializes_with_camel_case_fields() {
        let attachment = Attachment {
            name: "photo.png".into(),
            kind: AttachmentKind::Image,
            content: "aGVsbG8=".into(),
            mime_type: Some("image/png".into()),
            size: 5,
        };

        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["kind"], "image");
    }

    #[test]
    fn missing_mime_type_is_omitted() {
        let attachment = Attachment {
            name: "notes.txt".into(),
            kind: AttachmentKind::Text,
            content: "hello".into(),
            mime_type: None,
            size: 5,
        };

        let json = serde_json::to_value(&attachment).unwrap();
        assert!(json.get("mimeType").is_none());
    }
}
