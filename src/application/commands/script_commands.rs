//! Script Commands - 剧本解析与音色分配命令

use crate::domain::script::{Character, DialogueLine, SupportedLanguage};

/// 从剧本提取对白命令
#[derive(Debug, Clone)]
pub struct ExtractDialogueCommand {
    pub script: String,
}

/// 提取对白响应
#[derive(Debug, Clone)]
pub struct ExtractDialogueResponse {
    /// 归一化后的语言
    pub language: SupportedLanguage,
    /// 剧本理解服务返回的原始语言代码
    pub detected_code: String,
    pub dialogues: Vec<DialogueLine>,
    /// 自动分配的角色音色
    pub characters: Vec<Character>,
}

impl ExtractDialogueResponse {
    /// 非英语剧本需要提示音色效果可能不佳
    pub fn language_warning(&self) -> bool {
        !self.language.is_recommended()
    }
}

/// 重新分配音色命令
///
/// `characters` 中已有的分配会被保留
#[derive(Debug, Clone)]
pub struct AssignVoicesCommand {
    pub dialogues: Vec<DialogueLine>,
    pub characters: Vec<Character>,
}

/// 音色分配响应
#[derive(Debug, Clone)]
pub struct AssignVoicesResponse {
    pub characters: Vec<Character>,
}
