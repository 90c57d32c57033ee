//! Anthropic Human/Assistant transcript

use super::ChatTemplate;
use bridge_foundation::{Message, MessageRole};

pub const HUMAN_TAG: &str = "\n\nHuman:";
pub const ASSISTANT_TAG: &str = "\n\nAssistant:";

/// Opening human turn used when the transcript doesn't start with one
const OPENING_TURN: &str = "Hello.";

#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicTemplate;

impl AnthropicTemplate {
    fn push_turn(out: &mut String, tag: &str, content: &str) {
        out.push_str(tag);
        out.push(' ');
        out.push_str(content);
        out.push(' ');
    }
}

impl ChatTemplate for AnthropicTemplate {
    fn render(&self, turns: &[Message]) -> String {
        let mut out = String::new();

        let opens_with_human = turns
            .first()
            .is_some_and(|m| matches!(m.role, MessageRole::User | MessageRole::System));
        if !opens_with_human {
            Self::push_turn(&mut out, HUMAN_TAG, OPENING_TURN);
        }

        for turn in turns {
            let tag = match turn.role {
                MessageRole::Assistant => ASSISTANT_TAG,
                MessageRole::User | MessageRole::System => HUMAN_TAG,
            };
            Self::push_turn(&mut out, tag, &turn.content);
        }

        out.push_str(ASSISTANT_TAG);
        out
    }
}
