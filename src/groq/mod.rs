use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::config::Config;

const SYSTEM_PROMPT: &str = "You are a creative storyteller specializing in blending multiple genres into cohesive, engaging narratives. Your stories are vivid, well-structured, and emotionally impactful.";

#[derive(Debug)]
pub enum GroqError {
    Request(reqwest::Error),
    Api { status: u16, message: String },
    EmptyChoices,
}

impl std::fmt::Display for GroqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroqError::Request(e) => write!(f, "completion request failed: {}", e),
            GroqError::Api { status, message } => {
                write!(f, "completion API returned {}: {}", status, message)
            }
            GroqError::EmptyChoices => write!(f, "completion API returned no choices"),
        }
    }
}

impl std::error::Error for GroqError {}

impl From<reqwest::Error> for GroqError {
    fn from(e: reqwest::Error) -> Self {
        GroqError::Request(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
}

/// Groq聊天补全客户端，OpenAI兼容协议
pub struct GroqClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.groq_api_url.clone(),
            api_key: config.groq_api_key.clone(),
            model: config.groq_model.clone(),
        }
    }

    fn chat_request<'a>(
        &'a self,
        prompt: &'a str,
        params: &GenerationParams,
        stream: bool,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            stream,
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GroqError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&self.chat_request(prompt, params, false))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GroqError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: ChatResponse = response.json().await?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or(GroqError::EmptyChoices)
    }

    /// 流式生成，按SSE数据行增量产出文本片段
    pub async fn generate_stream(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<BoxStream<'static, Result<String, GroqError>>, GroqError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&self.chat_request(prompt, params, true))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GroqError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let mut buf: Vec<u8> = Vec::new();
        let stream = response
            .bytes_stream()
            .map(move |chunk| {
                let chunk = chunk.map_err(GroqError::Request)?;
                buf.extend_from_slice(&chunk);

                // 只解析完整的行，跨块的行留在缓冲区
                let mut text = String::new();
                while let Some(pos) = buf.iter().position(|b| *b == b'\n') {
                    let line: Vec<u8> = buf.drain(..=pos).collect();
                    let line = String::from_utf8_lossy(&line);
                    if let Some(piece) = parse_stream_line(line.trim()) {
                        text.push_str(&piece);
                    }
                }

                Ok(text)
            })
            .boxed();

        Ok(stream)
    }
}

fn parse_stream_line(line: &str) -> Option<String> {
    let data = line.strip_prefix("data:")?.trim();
    if data == "[DONE]" {
        return None;
    }

    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    chunk.choices.into_iter().next().and_then(|c| c.delta.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_content_delta() {
        let line = r#"data: {"choices":[{"delta":{"content":"Once upon"}}]}"#;
        assert_eq!(parse_stream_line(line).as_deref(), Some("Once upon"));
    }

    #[test]
    fn terminator_yields_nothing() {
        assert_eq!(parse_stream_line("data: [DONE]"), None);
    }

    #[test]
    fn ignores_non_data_lines() {
        assert_eq!(parse_stream_line(""), None);
        assert_eq!(parse_stream_line(": keep-alive"), None);
    }

    #[test]
    fn empty_delta_yields_nothing() {
        let line = r#"data: {"choices":[{"delta":{}}]}"#;
        assert_eq!(parse_stream_line(line), None);
    }

    #[test]
    fn chat_request_carries_system_prompt_and_params() {
        let config = test_config();
        let client = GroqClient::new(&config);
        let params = GenerationParams::default();

        let body = serde_json::to_value(client.chat_request("写一个故事", &params, false))
            .expect("serialization failed");

        assert_eq!(body["model"], "llama3-8b-8192");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "写一个故事");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["stream"], false);
    }

    fn test_config() -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            api_base_uri: "/api/v1".to_string(),
            api_key: "secret".to_string(),
            rate_limit_window_secs: 60,
            rate_limit_requests: 60,
            model_name: "story-scorer".to_string(),
            model_version: "1.0.0".to_string(),
            groq_api_url: "http://127.0.0.1:9".to_string(),
            groq_api_key: "groq-secret".to_string(),
            groq_model: "llama3-8b-8192".to_string(),
        }
    }
}
