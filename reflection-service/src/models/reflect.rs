//! Reflect request/response shapes and prompt composition.

use serde::Serialize;
use serde_json::Value;

/// Number of question/answer pairs a reflection needs.
pub const PAIR_COUNT: usize = 3;

/// A validated reflect request: exactly three index-aligned pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectRequest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

impl ReflectRequest {
    /// Extract `questions` and `answers` from a parsed body.
    ///
    /// Returns `None` when either field is missing, is not an array, or does
    /// not hold exactly [`PAIR_COUNT`] elements. Elements are otherwise taken
    /// as-is: strings verbatim, anything else as its JSON text.
    pub fn from_value(body: &Value) -> Option<Self> {
        let questions = three_items(body.get("questions")?)?;
        let answers = three_items(body.get("answers")?)?;
        Some(Self { questions, answers })
    }

    /// The single user turn sent upstream.
    ///
    /// Each pair renders as `Question: {q}\nAnswer: {a}`; pairs are joined by
    /// a blank line in their original order.
    pub fn user_content(&self) -> String {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| format!("Question: {}\nAnswer: {}", q, a))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn three_items(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    if items.len() != PAIR_COUNT {
        return None;
    }
    Some(items.iter().map(render).collect())
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct ReflectResponse {
    pub reflection: String,
}
