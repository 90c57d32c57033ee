//! Contextual prompt builders
//!
//! Two shapes for the same input (message, context items, optional system text):
//! - structured turns for a model endpoint, later flattened by the template engine
//! - one flat string for pasting into a chat web page

use bridge_foundation::{ContextItem, Message};

/// Heading of the context block in structured prompts
pub const CONTEXT_HEADER: &str = "Here is the relevant code context:\n\n";

/// Between the context block and the user's message
pub const CONTEXT_DIVIDER: &str = "---\n\n";

/// Instructions prefixed to web-chat prompts
pub const WEB_PROMPT_BOILERPLATE: &str = "You are an expert software engineer helping with a codebase. \
Use the code context below to answer the question that follows. \
Refer to files by name, keep answers grounded in the provided code, \
and say so when the context is not enough.\n\n";

/// Build the turns for a model endpoint
///
/// A system turn leads only when `system` is non-empty; the single user turn
/// holds every item in order, then the divider, then the message.
pub fn build_messages(message: &str, items: &[ContextItem], system: Option<&str>) -> Vec<Message> {
    let mut turns = Vec::with_capacity(2);
    if let Some(system) = system.filter(|s| !s.is_empty()) {
        turns.push(Message::system(system));
    }

    let mut body = String::from(CONTEXT_HEADER);
    for item in items {
        body.push_str(&format!("## {}\n\n{}\n\n", item.title(), item.content));
    }
    body.push_str(CONTEXT_DIVIDER);
    body.push_str(message);

    turns.push(Message::user(body));
    turns
}

/// Build a flat prompt for a chat web page (no dialect markers)
pub fn build_web_prompt(message: &str, items: &[ContextItem], system: Option<&str>) -> String {
    let mut prompt = String::from(WEB_PROMPT_BOILERPLATE);
    for item in items {
        prompt.push_str(&format!("### {}\n```\n{}\n```\n\n", item.title(), item.content));
    }
    if let Some(system) = system.filter(|s| !s.is_empty()) {
        prompt.push_str(system);
        prompt.push_str("\n\n");
    }
    prompt.push_str(message);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_foundation::MessageRole;

    fn items() -> Vec<ContextItem> {
        vec![
            ContextItem::new("src/a.rs", "fn a() {}").with_description("entry point"),
            ContextItem::new("src/b.rs", "fn b() {}"),
        ]
    }

    #[test]
    fn test_structured_with_system() {
        let turns = build_messages("why?", &items(), Some("be brief"));
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], Message::system("be brief"));
        assert_eq!(turns[1].role, MessageRole::User);
        assert_eq!(
            turns[1].content,
            "Here is the relevant code context:\n\n\
             ## src/a.rs - entry point\n\nfn a() {}\n\n\
             ## src/b.rs\n\nfn b() {}\n\n\
             ---\n\n\
             why?"
        );
    }

    #[test]
    fn test_structured_empty_system_omitted() {
        assert_eq!(build_messages("q", &[], Some("")).len(), 1);
        let turns = build_messages("q", &[], None);
        assert_eq!(turns.len(), 1);
        assert_eq!(
            turns[0].content,
            "Here is the relevant code context:\n\n---\n\nq"
        );
    }

    #[test]
    fn test_web_prompt_layout() {
        let prompt = build_web_prompt("why?", &items(), Some("be brief"));
        let expected = format!(
            "{}### src/a.rs - entry point\n```\nfn a() {{}}\n```\n\n\
             ### src/b.rs\n```\nfn b() {{}}\n```\n\n\
             be brief\n\n\
             why?",
            WEB_PROMPT_BOILERPLATE
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_web_prompt_without_system() {
        let prompt = build_web_prompt("q", &[], None);
        assert_eq!(prompt, format!("{}q", WEB_PROMPT_BOILERPLATE));
    }

    #[test]
    fn test_item_order_preserved() {
        let prompt = build_web_prompt("q", &items(), None);
        let a = prompt.find("src/a.rs").unwrap();
        let b = prompt.find("src/b.rs").unwrap();
        assert!(a < b);
    }
}
