//! Transcript Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::{ExportTranscriptQuery, ExportTranscriptResponse};
use crate::domain::script::{render_transcript, TRANSCRIPT_FILE_NAME};

/// ExportTranscript Handler
pub struct ExportTranscriptHandler;

impl ExportTranscriptHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: ExportTranscriptQuery,
    ) -> Result<ExportTranscriptResponse, ApplicationError> {
        if query.dialogues.is_empty() {
            return Err(ApplicationError::validation("No dialogue to export"));
        }

        Ok(ExportTranscriptResponse {
            content: render_transcript(&query.dialogues),
            file_name: TRANSCRIPT_FILE_NAME.to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
        })
    }
}

impl Default for ExportTranscriptHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::{DialogueLine, Gender};

    #[test]
    fn test_export_transcript() {
        let response = ExportTranscriptHandler::new()
            .handle(ExportTranscriptQuery {
                dialogues: vec![
                    DialogueLine::new("Anna", "Hi.", "", Gender::Female),
                    DialogueLine::new("Ben", "Hello.", "", Gender::Male),
                ],
            })
            .unwrap();

        assert_eq!(response.content, "ANNA:\nHi.\n\nBEN:\nHello.\n");
        assert_eq!(response.file_name, "dialogue-script.txt");
        assert!(response.content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_export_empty_rejected() {
        let err = ExportTranscriptHandler::new()
            .handle(ExportTranscriptQuery { dialogues: vec![] })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
