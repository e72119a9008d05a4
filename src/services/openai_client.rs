use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use thiserror::Error;

use crate::domain::job::ExtractedJob;

const EXTRACTION_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("model request failed: {0}")]
    Api(#[from] OpenAIError),

    #[error("model returned no content")]
    EmptyResponse,

    #[error("could not parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl Default for OpenaiClient {
    fn default() -> Self {
        OpenaiClient {
            client: Client::new(),
        }
    }
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }

    /// One chat completion turning pasted posting text into the flat field
    /// mapping. No retries; any failure bubbles up for the route to surface.
    pub async fn extract_job_details(&self, posting: &str) -> Result<ExtractedJob, ExtractError> {
        let prompt = build_extraction_prompt(posting);
        let request = CreateChatCompletionRequestArgs::default()
            .model(EXTRACTION_MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(1000_u32)
            .build()?;

        let response = self.client.chat().create(request).await?;
        log::info!("Extraction usage: {:?}", response.usage);

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(ExtractError::EmptyResponse)?;

        let details: ExtractedJob = serde_json::from_str(clean_model_response(&content))?;
        Ok(details)
    }
}

fn build_extraction_prompt(posting: &str) -> String {
    format!(
        r#"You are an expert at extracting job posting details from unstructured text. Extract the following fields exactly as JSON:
- "company_name": The name of the company.
- "offer_type": Type of offer (e.g., FTE, Intern, PPO, intern + FTE, intern + PPO).
- "stipend": Stipend amount if mentioned, else "Not Specified".
- "ctc": CTC amount if mentioned, else "Not Specified".
- "eligibility": Eligibility criteria (e.g., CGPA, backlogs, branches).
- "branches": Eligible branches.
- "role": Job role.
- "recruitment_process": Description of the recruitment procedure.
- "application_deadline": Application deadline. Keep the original format as given in text.
- "form_link": The application form URL.
- "poc_name": Point of Contact name if mentioned, else "Not Specified".
- "poc_phone": Point of Contact phone number if mentioned, else "Not Specified".

Return only a valid JSON object. Do not include any markdown formatting.

Text: {posting}"#
    )
}

/// Strips markdown code fences the model sometimes wraps the JSON in.
fn clean_model_response(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_json_fences() {
        let raw = "```json\n{\"company_name\": \"Acme\"}\n```";
        assert_eq!(clean_model_response(raw), "{\"company_name\": \"Acme\"}");
    }

    #[test]
    fn clean_strips_bare_fences() {
        let raw = "```\n{}\n```";
        assert_eq!(clean_model_response(raw), "{}");
    }

    #[test]
    fn clean_leaves_plain_json_alone() {
        let raw = "  {\"company_name\": \"Acme\"}  ";
        assert_eq!(clean_model_response(raw), "{\"company_name\": \"Acme\"}");
    }

    #[test]
    fn cleaned_fenced_response_parses() {
        let raw = "```json\n{\"company_name\": \"Acme\", \"role\": \"SDE\"}\n```";
        let details: ExtractedJob = serde_json::from_str(clean_model_response(raw)).unwrap();
        assert_eq!(details.company_name, "Acme");
        assert_eq!(details.role, "SDE");
    }

    #[test]
    fn prompt_embeds_the_posting() {
        let prompt = build_extraction_prompt("Acme is hiring SDEs");
        assert!(prompt.contains("Acme is hiring SDEs"));
        assert!(prompt.contains("\"company_name\""));
        assert!(prompt.contains("\"application_deadline\""));
    }
}
