use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    model::cleaner::CleanedNameDto,
    server::{config::Config, error::cleaner::CleanerError},
};

static FILTER_PROMPT: &str = r#"
You clean marketplace item rawInput.

Input:
- You will receive JSON: { "items": [{ "index": number, "rawInput": string }] }

Task:
- For each item, output the sellable item name (cleanName) with origin information.
- Remove noise such as quantities, bundle words, conditions, and selling phrases.

Rules:
- Keep the core proper noun of the item (e.g., card/product name).
- If multiple distinct items appear, return null.
- If the item name is unclear or generic, return null.
- Do NOT invent names. Do NOT translate.
- Output must follow the provided JSON schema exactly.

Return ONLY JSON matching the schema
"#;

#[derive(Serialize)]
struct IndexedItem<'a> {
    index: u32,
    #[serde(rename = "rawInput")]
    raw_input: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct FilterResponse {
    results: Vec<CleanedNameDto>,
}

/// Client for the external name-cleaning endpoint (an OpenAI-compatible
/// chat-completions API). Best-effort pre-processing only; listing creation
/// never depends on it.
#[derive(Clone)]
pub struct NameCleaner {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl NameCleaner {
    pub fn new(base_url: &str, api_key: Option<String>, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.openai_base_url,
            config.openai_api_key.clone(),
            &config.openai_model,
        )
    }

    /// Cleans raw listing titles into sellable item names. Inputs are tagged
    /// with their index so the response order can be restored regardless of
    /// how the model orders its output.
    pub async fn clean_item_names(
        &self,
        names: &[String],
    ) -> Result<Vec<CleanedNameDto>, CleanerError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CleanerError::MissingApiKey)?;

        let items: Vec<IndexedItem> = names
            .iter()
            .enumerate()
            .map(|(index, name)| IndexedItem {
                index: index as u32,
                raw_input: name,
            })
            .collect();

        let user_content = serde_json::to_string(&json!({ "items": items }))
            .map_err(|err| CleanerError::InvalidResponse(err.to_string()))?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": FILTER_PROMPT },
                { "role": "user", "content": user_content },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "CleanItemNames",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "required": ["results"],
                        "additionalProperties": false,
                        "properties": {
                            "results": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "required": ["index", "cleanName"],
                                    "additionalProperties": false,
                                    "properties": {
                                        "index": { "type": "number" },
                                        "cleanName": { "type": ["string", "null"] }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| CleanerError::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(CleanerError::Http(format!("HTTP {}", response.status())));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CleanerError::InvalidResponse(err.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CleanerError::InvalidResponse("empty completion".to_string()))?;

        let parsed: FilterResponse = serde_json::from_str(&content)
            .map_err(|err| CleanerError::InvalidResponse(err.to_string()))?;

        let mut results = parsed.results;
        results.sort_by_key(|result| result.index);

        Ok(results)
    }
}
