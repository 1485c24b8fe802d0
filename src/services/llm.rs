use anyhow::{Result, anyhow};
use serde_json::{Value, json};

pub struct LLMClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new() -> Result<Self> {
        let api_key = std::env::var("LLM_API_KEY").unwrap_or_else(|_| "dummy_key".to_string()); // In production, make this required
        let api_url = std::env::var("LLM_API_URL")
            .unwrap_or_else(|_| "http://localhost:11434/api/generate".to_string()); // Using Ollama as default

        Ok(LLMClient {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        })
    }

    pub async fn suggest_keywords(&self, topic: &str) -> Result<Vec<String>> {
        let prompt = format!(
            "You are an SEO expert. Generate a list of keyword suggestions related to the following input: {}. Return only a JSON array of strings, with no explanation or conversational text.",
            topic
        );

        let mut request_builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&json!({
                "model": "llama2", // Default model, can be configured
                "prompt": prompt,
                "stream": false,
                "options": {
                    "temperature": 0.1
                }
            }));

        // Add authorization header if API key is provided and not dummy
        if self.api_key != "dummy_key" {
            request_builder =
                request_builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = request_builder.send().await?;
        let response_text = response.text().await?;

        parse_suggestions(&response_text)
    }
}

// The backends answer in a few shapes: a bare JSON array, a
// {"suggestions": [...]} object, or an Ollama envelope whose "response"
// field contains one of those. Anything else is a hard error so the caller
// can report the collaborator as unreachable.
fn parse_suggestions(raw: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(raw.trim())?;

    if let Some(list) = extract_list(&value) {
        return Ok(list);
    }
    if let Some(inner) = value.get("response").and_then(Value::as_str) {
        let nested: Value = serde_json::from_str(inner.trim())?;
        if let Some(list) = extract_list(&nested) {
            return Ok(list);
        }
    }

    Err(anyhow!("unrecognized keyword suggestion response"))
}

fn extract_list(value: &Value) -> Option<Vec<String>> {
    if let Some(list) = string_list(value) {
        return Some(list);
    }
    value.get("suggestions").and_then(string_list)
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
