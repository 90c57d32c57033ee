//! Llama 2 `[INST]` template
//!
//! Unlike the generic family only a single leading assistant turn is dropped.

use super::ChatTemplate;
use bridge_foundation::{Message, MessageRole};

const END_OF_TURN: &str = "</s>\n<s>";

#[derive(Debug, Clone, Copy, Default)]
pub struct Llama2Template;

fn system_header(system: &str) -> String {
    format!("<s>[INST] <<SYS>>\n {}\n<</SYS>>\n\n", system)
}

impl ChatTemplate for Llama2Template {
    fn render(&self, turns: &[Message]) -> String {
        let mut out = String::new();
        let mut cursor = 0;

        if turns.first().map(|m| m.role) == Some(MessageRole::Assistant) {
            cursor = 1;
        }

        if let Some(system) = turns.get(cursor).filter(|m| m.role == MessageRole::System) {
            if system.content.trim().is_empty() {
                cursor += 1;
            } else if let Some(next) = turns.get(cursor + 1) {
                out.push_str(&system_header(&system.content));
                out.push(' ');
                out.push_str(&next.content);
                out.push_str(" [/INST]");
                cursor += 2;
            } else {
                out.push_str(&system_header(&system.content));
                out.push_str(" [/INST]");
                return out;
            }
        }

        let last = turns.len().saturating_sub(1);
        for (index, turn) in turns.iter().enumerate().skip(cursor) {
            if turn.role == MessageRole::User {
                out.push_str("[INST] ");
                out.push_str(&turn.content);
                out.push_str(" [/INST]");
            } else {
                out.push_str(&turn.content);
                if index != last {
                    out.push_str(END_OF_TURN);
                }
            }
        }

        out
    }
}
