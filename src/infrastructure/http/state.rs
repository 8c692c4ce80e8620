//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AssignVoicesHandler, ExtractDialogueHandler, GenerateAudioHandler,
    // Query handlers
    ExportTranscriptHandler, ListVoicesHandler,
    // Ports
    ScriptAnalyzerPort, SpeechSynthesisPort,
};
use crate::domain::audio::AudioSpec;
use crate::domain::script::{EmphasisClassifier, VoiceCatalogue};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub synthesis: Arc<dyn SpeechSynthesisPort>,
    pub analyzer: Arc<dyn ScriptAnalyzerPort>,

    // ========== Command Handlers ==========
    pub extract_dialogue_handler: ExtractDialogueHandler,
    pub assign_voices_handler: AssignVoicesHandler,
    pub generate_audio_handler: GenerateAudioHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
    pub export_transcript_handler: ExportTranscriptHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        synthesis: Arc<dyn SpeechSynthesisPort>,
        analyzer: Arc<dyn ScriptAnalyzerPort>,
        catalogue: VoiceCatalogue,
        classifier: EmphasisClassifier,
        audio_spec: AudioSpec,
    ) -> Self {
        let catalogue = Arc::new(catalogue);
        let classifier = Arc::new(classifier);

        Self {
            // Ports
            synthesis: synthesis.clone(),
            analyzer: analyzer.clone(),

            // Command handlers
            extract_dialogue_handler: ExtractDialogueHandler::new(
                analyzer.clone(),
                catalogue.clone(),
            ),
            assign_voices_handler: AssignVoicesHandler::new(catalogue.clone()),
            generate_audio_handler: GenerateAudioHandler::new(
                synthesis.clone(),
                classifier,
                audio_spec,
            ),

            // Query handlers
            list_voices_handler: ListVoicesHandler::new(catalogue),
            export_transcript_handler: ExportTranscriptHandler::new(),
        }
    }
}
