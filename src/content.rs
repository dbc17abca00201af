use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::json;

/// One destination as produced by the generative service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideContent {
    pub heading: String,
    pub text: String,
    pub keyword: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const PROMPT: &str = "Generate exactly 8 inspirational travel destinations. \
Each should have a catchy heading, a brief descriptive text (max 15 words), \
and a 1-word keyword for finding a beautiful related image.";

/// Ask the generative service for the eight destination triples.
///
/// One blocking request per session, no retries and no timeout loop. Every
/// failure mode (transport, HTTP status, missing text part, malformed JSON)
/// is an `Err`; the caller treats `Err` and an undersized `Ok` identically
/// and falls back to the built-in destinations.
pub fn fetch_slide_content(api_key: &str, model: &str) -> Result<Vec<SlideContent>> {
    let body = json!({
        "contents": [{ "parts": [{ "text": PROMPT }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "heading": { "type": "STRING" },
                        "text": { "type": "STRING" },
                        "keyword": { "type": "STRING" }
                    },
                    "required": ["heading", "text", "keyword"]
                }
            }
        }
    });

    let url = format!("{ENDPOINT}/{model}:generateContent");
    let response = reqwest::blocking::Client::new()
        .post(&url)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .context("content request failed")?
        .error_for_status()
        .context("content service returned an error status")?;

    let generated: GenerateResponse = response.json().context("malformed content response")?;

    let text = generated
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .unwrap_or_default();
    if text.is_empty() {
        bail!("content response carried no text part");
    }

    let triples: Vec<SlideContent> =
        serde_json::from_str(text).context("content text is not the expected JSON array")?;
    Ok(triples)
}
