//! Table-driven templates (ChatML, Llama 3, Gemma)

use super::ChatTemplate;
use bridge_foundation::{Message, MessageRole};

/// Marker strings for one generic dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Emitted once at the very start, if any
    pub document_prefix: Option<&'static str>,
    /// Placed before the system text
    pub system_prefix: &'static str,
    /// Placed after the system text
    pub system_suffix: &'static str,
    pub user_prefix: &'static str,
    pub assistant_prefix: &'static str,
    /// Between turns, and before the trailing assistant prefix
    pub separator: &'static str,
    /// Used when the conversation carries no system turn
    pub default_system: Option<&'static str>,
}

pub const CHATML: TemplateSpec = TemplateSpec {
    document_prefix: None,
    system_prefix: "<|im_start|>system\n",
    system_suffix: "<|im_end|>\n",
    user_prefix: "<|im_start|>user\n",
    assistant_prefix: "<|im_start|>assistant\n",
    separator: "<|im_end|>\n",
    default_system: None,
};

pub const LLAMA3: TemplateSpec = TemplateSpec {
    document_prefix: Some("<|begin_of_text|>"),
    system_prefix: "<|start_header_id|>system<|end_header_id|>\n\n",
    system_suffix: "<|eot_id|>",
    user_prefix: "<|start_header_id|>user<|end_header_id|>\n\n",
    assistant_prefix: "<|start_header_id|>assistant<|end_header_id|>\n\n",
    separator: "<|eot_id|>",
    default_system: None,
};

/// Gemma has no system role; the system text rides in a user turn.
pub const GEMMA: TemplateSpec = TemplateSpec {
    document_prefix: Some("<bos>"),
    system_prefix: "<start_of_turn>user\n",
    system_suffix: "<end_of_turn>\n",
    user_prefix: "<start_of_turn>user\n",
    assistant_prefix: "<start_of_turn>model\n",
    separator: "<end_of_turn>\n",
    default_system: None,
};

impl TemplateSpec {
    fn push_system(&self, out: &mut String, text: &str) {
        out.push_str(self.system_prefix);
        out.push_str(text);
        out.push_str(self.system_suffix);
    }
}

impl ChatTemplate for TemplateSpec {
    fn render(&self, turns: &[Message]) -> String {
        let mut out = String::new();
        if let Some(prefix) = self.document_prefix {
            out.push_str(prefix);
        }

        // A prompt can't open with the model's own turn
        let start = turns
            .iter()
            .position(|m| m.role != MessageRole::Assistant)
            .unwrap_or(turns.len());
        let turns = &turns[start..];

        let mut cursor = 0;
        match turns.first() {
            Some(first) if first.role == MessageRole::System => {
                self.push_system(&mut out, &first.content);
                cursor = 1;
            }
            _ => {
                if let Some(default) = self.default_system {
                    self.push_system(&mut out, default);
                }
            }
        }

        let last = turns.len().saturating_sub(1);
        for (index, turn) in turns.iter().enumerate().skip(cursor) {
            let prefix = match turn.role {
                MessageRole::Assistant => self.assistant_prefix,
                _ => self.user_prefix,
            };
            out.push_str(prefix);
            out.push_str(&turn.content);
            if index != last {
                out.push_str(self.separator);
            }
        }

        if turns.last().map(|m| m.role) == Some(MessageRole::User) {
            out.push_str(self.separator);
            out.push_str(self.assistant_prefix);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chatml_single_user() {
        let out = CHATML.render(&[Message::user("x")]);
        assert_eq!(out, "<|im_start|>user\nx<|im_end|>\n<|im_start|>assistant\n");
    }

    #[test]
    fn test_chatml_full_conversation() {
        let turns = vec![
            Message::system("sys"),
            Message::user("q1"),
            Message::assistant("a1"),
            Message::user("q2"),
        ];
        assert_eq!(
            CHATML.render(&turns),
            "<|im_start|>system\nsys<|im_end|>\n\
             <|im_start|>user\nq1<|im_end|>\n\
             <|im_start|>assistant\na1<|im_end|>\n\
             <|im_start|>user\nq2<|im_end|>\n\
             <|im_start|>assistant\n"
        );
    }

    #[test]
    fn test_leading_assistant_turns_dropped() {
        let turns = vec![
            Message::assistant("stale-1"),
            Message::assistant("stale-2"),
            Message::user("hi"),
        ];
        let out = CHATML.render(&turns);
        assert!(!out.contains("stale"));
        assert_eq!(out, "<|im_start|>user\nhi<|im_end|>\n<|im_start|>assistant\n");
    }

    #[test]
    fn test_ending_with_assistant_has_no_trailer() {
        let turns = vec![Message::user("q"), Message::assistant("a")];
        assert_eq!(
            CHATML.render(&turns),
            "<|im_start|>user\nq<|im_end|>\n<|im_start|>assistant\na"
        );
    }

    #[test]
    fn test_trailer_appears_once() {
        for spec in [CHATML, LLAMA3, GEMMA] {
            let out = spec.render(&[Message::system("s"), Message::user("u")]);
            let trailer = format!("{}{}", spec.separator, spec.assistant_prefix);
            assert!(out.ends_with(&trailer));
            assert_eq!(out.matches(spec.assistant_prefix).count(), 1);
        }
    }

    #[test]
    fn test_llama3_document_prefix() {
        let out = LLAMA3.render(&[Message::system("s"), Message::user("u")]);
        assert_eq!(
            out,
            "<|begin_of_text|>\
             <|start_header_id|>system<|end_header_id|>\n\ns<|eot_id|>\
             <|start_header_id|>user<|end_header_id|>\n\nu<|eot_id|>\
             <|start_header_id|>assistant<|end_header_id|>\n\n"
        );
    }

    #[test]
    fn test_gemma_system_as_user_turn() {
        let out = GEMMA.render(&[Message::system("s"), Message::user("u")]);
        assert_eq!(
            out,
            "<bos><start_of_turn>user\ns<end_of_turn>\n\
             <start_of_turn>user\nu<end_of_turn>\n\
             <start_of_turn>model\n"
        );
    }

    #[test]
    fn test_default_system_used_when_absent() {
        let spec = TemplateSpec {
            default_system: Some("be nice"),
            ..CHATML
        };
        let out = spec.render(&[Message::user("u")]);
        assert!(out.starts_with("<|im_start|>system\nbe nice<|im_end|>\n"));

        // an explicit system turn wins
        let out = spec.render(&[Message::system("own"), Message::user("u")]);
        assert!(!out.contains("be nice"));
    }

    #[test]
    fn test_empty_and_only_assistant() {
        assert_eq!(CHATML.render(&[]), "");
        assert_eq!(CHATML.render(&[Message::assistant("a")]), "");
        assert_eq!(LLAMA3.render(&[]), "<|begin_of_text|>");
    }

    #[test]
    fn test_input_untouched() {
        let turns = vec![Message::assistant("a"), Message::user("u")];
        let before = turns.clone();
        let _ = GEMMA.render(&turns);
        assert_eq!(turns, before);
    }
}
