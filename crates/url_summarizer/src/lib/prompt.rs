const PROMPT_TEMPLATE: &str = "Provide a summary of the following content in 300 words:\nContent: {text}";

/// Wraps document text into the summary instruction. The text is inserted
/// verbatim; long inputs are left for the model endpoint to reject.
pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replacen("{text}", text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        assert_eq!(
            build_prompt("hello world"),
            "Provide a summary of the following content in 300 words:\nContent: hello world"
        );
    }

    #[test]
    fn test_placeholder_in_content_is_not_expanded() {
        let prompt = build_prompt("literal {text} marker");
        assert!(prompt.ends_with("Content: literal {text} marker"));
    }

    #[test]
    fn test_long_content_not_truncated() {
        let text = "a".repeat(9_999);
        let prompt = build_prompt(&text);
        assert_eq!(prompt.matches(&text).count(), 1);
        assert!(prompt.ends_with(&text));
    }
}
