use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Text ready for stdout; empty when there is nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered(String);

impl Rendered {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Rendered {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn render(
    payload: Option<&Value>,
    format: OutputFormat,
) -> Result<Rendered, serde_json::Error> {
    let Some(value) = payload else {
        return Ok(Rendered::empty());
    };

    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Text => text(value),
    };
    Ok(Rendered(text))
}

// Objects print as aligned `Key : value` lists, one block per array item.
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let separator = if items.iter().any(Value::is_object) {
                "\n\n"
            } else {
                "\n"
            };
            items.iter().map(text).collect::<Vec<_>>().join(separator)
        }
        Value::Object(map) => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            map.iter()
                .map(|(key, value)| format!("{key:<width$} : {}", inline(value)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        other => other.to_string(),
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            let items: Vec<String> = items.iter().map(inline).collect();
            format!("{{{}}}", items.join(", "))
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
        other => other.to_string(),
    }
}
