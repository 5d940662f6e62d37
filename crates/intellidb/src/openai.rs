//! OpenAI chat-completions transport.

use intellidb_core::generate::Prompt;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Capability for turning a prompt into generated text.
///
/// One invocation performs exactly one upstream call; failures are
/// surfaced immediately and never retried at this layer.
pub trait GenerationClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, Error>;
}

/// Client for the OpenAI chat-completions endpoint.
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Build a client from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(model: String) -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Validation("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        Ok(Self {
            api_key,
            model,
            base_url: OPENAI_API_URL.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GenerationClient for OpenAiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, Error> {
        let body = ChatRequest {
            model: &self.model,
            max_tokens: prompt.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt.text,
            }],
        };

        let response = reqwest::Client::new()
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport {
                status: None,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport {
                status: Some(status.as_u16()),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| Error::Transport {
            status: None,
            message: format!("malformed response body: {e}"),
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Transport {
                status: None,
                message: "response contained no choices".to_string(),
            })?;

        Ok(choice.message.content)
    }
}

/// Scripted client for pipeline tests elsewhere in this crate. Counts
/// calls and records the last prompt it was handed.
#[cfg(test)]
pub struct ScriptedClient {
    response: Result<String, (Option<u16>, String)>,
    calls: std::sync::atomic::AtomicUsize,
    pub last_prompt: std::sync::Mutex<Option<Prompt>>,
}

#[cfg(test)]
impl ScriptedClient {
    pub fn succeeding(content: &str) -> Self {
        Self {
            response: Ok(content.to_string()),
            calls: std::sync::atomic::AtomicUsize::new(0),
            last_prompt: std::sync::Mutex::new(None),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            response: Err((Some(status), message.to_string())),
            calls: std::sync::atomic::AtomicUsize::new(0),
            last_prompt: std::sync::Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, Error> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());

        match &self.response {
            Ok(content) => Ok(content.clone()),
            Err((status, message)) => Err(Error::Transport {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            max_tokens: 2000,
            messages: vec![ChatMessage {
                role: "user",
                content: "Generate a migration",
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Generate a migration");
    }

    #[test]
    fn test_chat_response_parsing() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"<?php"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "<?php");
    }
}
