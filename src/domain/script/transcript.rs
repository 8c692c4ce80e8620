//! Transcript Export - 纯文本对白导出

use super::DialogueLine;

/// 导出文件名
pub const TRANSCRIPT_FILE_NAME: &str = "dialogue-script.txt";

/// 生成纯文本对白
///
/// 每行格式为 `角色名大写:\n对白\n`，行与行之间空一行
pub fn render_transcript(dialogues: &[DialogueLine]) -> String {
    dialogues
        .iter()
        .map(|line| format!("{}:\n{}\n", line.character.to_uppercase(), line.dialogue))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::Gender;

    #[test]
    fn test_render_transcript() {
        let dialogues = vec![
            DialogueLine::new("Anna", "Where were you?", "(angry)", Gender::Female),
            DialogueLine::new("Bob", "Out.", "", Gender::Male),
        ];
        assert_eq!(
            render_transcript(&dialogues),
            "ANNA:\nWhere were you?\n\nBOB:\nOut.\n"
        );
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }
}
