//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::ListVoices;
use crate::domain::script::{SupportedLanguage, VoiceCatalogue};

// ============================================================================
// Response DTOs
// ============================================================================

/// 音色目录响应
#[derive(Debug, Clone)]
pub struct VoiceCatalogueResponse {
    /// 全部音色（排序去重）
    pub voices: Vec<String>,
    pub male: Vec<String>,
    pub female: Vec<String>,
    pub languages: Vec<SupportedLanguage>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListVoices Handler
pub struct ListVoicesHandler {
    catalogue: Arc<VoiceCatalogue>,
}

impl ListVoicesHandler {
    pub fn new(catalogue: Arc<VoiceCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, _query: ListVoices) -> Result<VoiceCatalogueResponse, ApplicationError> {
        Ok(VoiceCatalogueResponse {
            voices: self.catalogue.all(),
            male: self.catalogue.male.clone(),
            female: self.catalogue.female.clone(),
            languages: SupportedLanguage::ALL.to_vec(),
        })
    }
}
