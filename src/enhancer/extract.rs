// src/enhancer/extract.rs
//! Extraction of the first balanced JSON object from a free-text model
//! reply. Models wrap JSON in prose or code fences despite instructions,
//! so the scan is string-literal and escape aware.

/// Return the first balanced `{...}` span in `text`, if any.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        assert_eq!(first_json_object(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_prose_wrapped_object() {
        let reply = r#"Sure! {"summary":"x"} Hope this helps!"#;
        assert_eq!(first_json_object(reply), Some(r#"{"summary":"x"}"#));
    }

    #[test]
    fn test_code_fence_wrapped_object() {
        let reply = "```json\n{\"a\":[1,2]}\n```";
        assert_eq!(first_json_object(reply), Some(r#"{"a":[1,2]}"#));
    }

    #[test]
    fn test_nested_braces() {
        let reply = r#"{"outer":{"inner":{"deep":1}}} trailing"#;
        assert_eq!(
            first_json_object(reply),
            Some(r#"{"outer":{"inner":{"deep":1}}}"#)
        );
    }

    #[test]
    fn test_braces_inside_string_literals() {
        let reply = r#"{"text":"a } brace and a { brace"} rest"#;
        assert_eq!(
            first_json_object(reply),
            Some(r#"{"text":"a } brace and a { brace"}"#)
        );
    }

    #[test]
    fn test_escaped_quotes_inside_strings() {
        let reply = r#"{"text":"she said \"hi}\""} tail"#;
        assert_eq!(
            first_json_object(reply),
            Some(r#"{"text":"she said \"hi}\""}"#)
        );
    }

    #[test]
    fn test_no_object() {
        assert_eq!(first_json_object("no json here"), None);
    }

    #[test]
    fn test_unbalanced_object() {
        assert_eq!(first_json_object(r#"{"a": [1, 2"#), None);
    }
}
