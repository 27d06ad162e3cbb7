//! Text pass-through node.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One value or a list of values wired into the preview node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Many(Vec<Value>),
    One(Value),
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::One(Value::String(text.to_string()))
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::One(Value::String(text))
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        Self::Many(texts.into_iter().map(Value::String).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewUi {
    pub text: Vec<String>,
}

/// Texts for the host UI plus the same texts as the node output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewOutput {
    pub ui: PreviewUi,
    pub text: Vec<String>,
}

/// Republish text for display. Strings pass through unchanged; other values
/// are rendered as JSON text.
pub fn preview_text(input: TextInput) -> PreviewOutput {
    let values = match input {
        TextInput::Many(values) => values,
        TextInput::One(value) => vec![value],
    };

    let texts: Vec<String> = values
        .into_iter()
        .map(|value| match value {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .collect();

    PreviewOutput {
        ui: PreviewUi {
            text: texts.clone(),
        },
        text: texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_string_becomes_list() {
        let out = preview_text("hello".into());
        assert_eq!(out.text, vec!["hello".to_string()]);
        assert_eq!(out.ui.text, out.text);
    }

    #[test]
    fn non_strings_are_coerced() {
        let input: TextInput = serde_json::from_value(json!(["a", 5, true, null])).unwrap();
        let out = preview_text(input);
        assert_eq!(out.text, vec!["a", "5", "true", "null"]);
    }

    #[test]
    fn serializes_with_ui_block() {
        let out = preview_text("x".into());
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({"ui": {"text": ["x"]}, "text": ["x"]})
        );
    }
}
