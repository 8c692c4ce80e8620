//! Script Command Handlers

use std::sync::Arc;

use crate::application::commands::script_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::ScriptAnalyzerPort;
use crate::domain::script::{SupportedLanguage, VoiceCatalogue};

/// ExtractDialogue Handler - 从剧本提取对白并分配音色
pub struct ExtractDialogueHandler {
    analyzer: Arc<dyn ScriptAnalyzerPort>,
    catalogue: Arc<VoiceCatalogue>,
}

impl ExtractDialogueHandler {
    pub fn new(analyzer: Arc<dyn ScriptAnalyzerPort>, catalogue: Arc<VoiceCatalogue>) -> Self {
        Self {
            analyzer,
            catalogue,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExtractDialogueCommand,
    ) -> Result<ExtractDialogueResponse, ApplicationError> {
        if cmd.script.trim().is_empty() {
            return Err(ApplicationError::validation("Script is empty"));
        }

        let extracted = self.analyzer.analyze(&cmd.script).await.map_err(|e| {
            tracing::error!(error = %e, "Dialogue extraction failed");
            ApplicationError::from(e)
        })?;

        let language = SupportedLanguage::from_code(&extracted.language);
        let characters = self.catalogue.assign(&extracted.dialogues, &[]);

        tracing::info!(
            detected = %extracted.language,
            language = %language,
            lines = extracted.dialogues.len(),
            characters = characters.len(),
            "Dialogue extracted"
        );

        Ok(ExtractDialogueResponse {
            language,
            detected_code: extracted.language,
            dialogues: extracted.dialogues,
            characters,
        })
    }
}

/// AssignVoices Handler - 重新计算音色分配
pub struct AssignVoicesHandler {
    catalogue: Arc<VoiceCatalogue>,
}

impl AssignVoicesHandler {
    pub fn new(catalogue: Arc<VoiceCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, cmd: AssignVoicesCommand) -> Result<AssignVoicesResponse, ApplicationError> {
        self.catalogue.validate(&cmd.characters)?;

        Ok(AssignVoicesResponse {
            characters: self.catalogue.assign(&cmd.dialogues, &cmd.characters),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AnalyzerError, ExtractedScript};
    use crate::domain::script::{Character, DialogueLine, Gender};
    use async_trait::async_trait;

    struct StaticAnalyzer {
        result: Option<ExtractedScript>,
    }

    #[async_trait]
    impl ScriptAnalyzerPort for StaticAnalyzer {
        async fn analyze(&self, _script: &str) -> Result<ExtractedScript, AnalyzerError> {
            self.result
                .clone()
                .ok_or_else(|| AnalyzerError::InvalidResponse("no candidates".to_string()))
        }
    }

    fn handler(result: Option<ExtractedScript>) -> ExtractDialogueHandler {
        ExtractDialogueHandler::new(
            Arc::new(StaticAnalyzer { result }),
            Arc::new(VoiceCatalogue::default()),
        )
    }

    #[tokio::test]
    async fn test_extract_assigns_voices_and_normalises_language() {
        let handler = handler(Some(ExtractedScript {
            language: "ja".to_string(),
            dialogues: vec![
                DialogueLine::new("KEN", "Konnichiwa", "", Gender::Male),
                DialogueLine::new("YUKI", "Hai", "", Gender::Female),
            ],
        }));

        let response = handler
            .handle(ExtractDialogueCommand {
                script: "KEN: Konnichiwa\nYUKI: Hai".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.language, SupportedLanguage::Other);
        assert_eq!(response.detected_code, "ja");
        assert!(response.language_warning());
        assert_eq!(
            response.characters,
            vec![Character::new("KEN", "Puck"), Character::new("YUKI", "Kore")]
        );
    }

    #[tokio::test]
    async fn test_extract_rejects_blank_script() {
        let err = handler(None)
            .handle(ExtractDialogueCommand {
                script: "  \n".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_extract_surfaces_analyzer_failure() {
        let err = handler(None)
            .handle(ExtractDialogueCommand {
                script: "A: hi".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }

    #[test]
    fn test_assign_rejects_unknown_voice() {
        let handler = AssignVoicesHandler::new(Arc::new(VoiceCatalogue::default()));
        let err = handler
            .handle(AssignVoicesCommand {
                dialogues: vec![DialogueLine::new("A", "hi", "", Gender::Male)],
                characters: vec![Character::new("A", "Nova")],
            })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[test]
    fn test_assign_blank_voice_falls_back_to_pool() {
        let handler = AssignVoicesHandler::new(Arc::new(VoiceCatalogue::default()));
        let response = handler
            .handle(AssignVoicesCommand {
                dialogues: vec![
                    DialogueLine::new("A", "hi", "", Gender::Male),
                    DialogueLine::new("B", "yo", "", Gender::Male),
                ],
                characters: vec![Character::new("A", ""), Character::new("B", "Fenrir")],
            })
            .unwrap();
        assert_eq!(
            response.characters,
            vec![Character::new("A", "Puck"), Character::new("B", "Fenrir")]
        );
    }

    #[test]
    fn test_assign_keeps_override() {
        let handler = AssignVoicesHandler::new(Arc::new(VoiceCatalogue::default()));
        let response = handler
            .handle(AssignVoicesCommand {
                dialogues: vec![
                    DialogueLine::new("A", "hi", "", Gender::Male),
                    DialogueLine::new("B", "yo", "", Gender::Male),
                ],
                characters: vec![Character::new("A", "Fenrir")],
            })
            .unwrap();
        assert_eq!(
            response.characters,
            vec![Character::new("A", "Fenrir"), Character::new("B", "Charon")]
        );
    }
}
