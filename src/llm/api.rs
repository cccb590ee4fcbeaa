use std::time::Duration;

use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    config::Difficulty,
    core::{
        utils::NormalizeWhitespace,
        FetchRequest,
        ReibunError,
    },
};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 60;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub fn build_prompt(word: &str, language: &str, difficulty: Difficulty) -> String {
    format!(
        "Write exactly one example sentence in {language} at CEFR level {difficulty} \
         using the word \"{word}\". \
         Reply with only the sentence, without a translation and without quotation marks."
    )
}

/// One POST to a chat-completion endpoint. No retries, no caching; the only
/// bound is the client timeout.
pub async fn fetch_example_sentence(
    endpoint: &str,
    request: &FetchRequest,
) -> Result<String, ReibunError> {
    if request.api_key.trim().is_empty() {
        return Err(ReibunError::MissingApiKey);
    }

    let prompt = build_prompt(&request.word, &request.language, request.difficulty);
    let body = ChatRequest {
        model: MODEL,
        messages: vec![ChatMessage { role: "user", content: &prompt }],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client.post(endpoint).bearer_auth(&request.api_key).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReibunError::HttpStatus { status: status.as_u16() });
    }

    let parsed: ChatResponse = response.json().await?;
    let sentence = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ReibunError::EmptyCompletion)?;

    let sentence = sentence.normalize_whitespace();
    if sentence.is_empty() {
        return Err(ReibunError::EmptyCompletion);
    }

    Ok(sentence)
}
