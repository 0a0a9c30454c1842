use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned note id.
pub(crate) type NoteId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// Body of both `POST /notes/` and `PUT /notes/{id}/`.
///
/// Updates are full replacements, so create and update share one shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    /// Trim both fields and reject blanks before anything is sent.
    pub fn validated(title: &str, content: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

impl From<&GeneratedDraft> for NoteInput {
    fn from(draft: &GeneratedDraft) -> Self {
        Self {
            title: draft.title.clone(),
            content: draft.content.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GenerateNoteRequest {
    pub description: String,
}

impl GenerateNoteRequest {
    pub fn validated(description: &str) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            description: description.to_string(),
        })
    }
}

/// AI-generated note that has not been saved yet (no id).
///
/// The backend also suggests key points and a category; both are optional
/// so older responses still parse.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GeneratedDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GenerateNoteResponse {
    pub success: bool,
    pub generated_note: GeneratedDraft,
    #[serde(default)]
    pub original_description: Option<String>,
}

/// Empty-field checks done by the forms. Never reaches the API client.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Content is required")]
    EmptyContent,
    #[error("Description is required")]
    EmptyDescription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_ignores_unknown_fields() {
        let json = r#"{"id": 3, "title": "A", "content": "x", "created_at": "2024-01-01"}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(
            note,
            Note {
                id: 3,
                title: "A".to_string(),
                content: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_note_input_trims_fields() {
        let input = NoteInput::validated("  Title ", "\tbody\n").expect("should validate");
        assert_eq!(input.title, "Title");
        assert_eq!(input.content, "body");
    }

    #[test]
    fn test_note_input_rejects_blank_title_first() {
        assert_eq!(
            NoteInput::validated("   ", ""),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            NoteInput::validated("T", "  "),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_generate_request_rejects_blank_description() {
        assert_eq!(
            GenerateNoteRequest::validated(" \n"),
            Err(ValidationError::EmptyDescription)
        );
        let req = GenerateNoteRequest::validated(" rust ownership ").expect("should validate");
        assert_eq!(req.description, "rust ownership");
    }

    #[test]
    fn test_generate_response_contract_deserialize() {
        // Shape returned by POST /generate-note/.
        let json = r#"{
            "success": true,
            "generated_note": {
                "title": "Ownership",
                "content": "Every value has one owner.",
                "key_points": ["moves", "borrows", "lifetimes"],
                "category": "Study"
            },
            "original_description": "rust ownership"
        }"#;
        let parsed: GenerateNoteResponse =
            serde_json::from_str(json).expect("generate response should parse");
        assert!(parsed.success);
        assert_eq!(parsed.generated_note.title, "Ownership");
        assert_eq!(parsed.generated_note.key_points.len(), 3);
        assert_eq!(parsed.generated_note.category.as_deref(), Some("Study"));
        assert_eq!(parsed.original_description.as_deref(), Some("rust ownership"));
    }

    #[test]
    fn test_generate_response_without_extras() {
        let json = r#"{"success": true, "generated_note": {"title": "T", "content": "C"}}"#;
        let parsed: GenerateNoteResponse =
            serde_json::from_str(json).expect("minimal response should parse");
        assert!(parsed.generated_note.key_points.is_empty());
        assert!(parsed.generated_note.category.is_none());

        let input = NoteInput::from(&parsed.generated_note);
        assert_eq!(input.title, "T");
        assert_eq!(input.content, "C");
    }
}
