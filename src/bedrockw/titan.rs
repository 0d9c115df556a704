use crate::report::ReportModel;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};

// region:    --- Wire Types

/// Titan text request body (camelCase on the wire).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanTextRequest<'a> {
	input_text: &'a str,
	text_generation_config: TextGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextGenerationConfig {
	max_token_count: u32,
	stop_sequences: Vec<String>,
	temperature: f32,
	top_p: f32,
}

// Fixed generation settings, independent of the findings content.
impl Default for TextGenerationConfig {
	fn default() -> Self {
		TextGenerationConfig {
			max_token_count: 300,
			stop_sequences: Vec::new(),
			temperature: 0.0,
			top_p: 0.9,
		}
	}
}

#[derive(Deserialize)]
struct TitanTextResponse {
	results: Vec<TitanTextResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanTextResult {
	output_text: String,
}

// endregion: --- Wire Types

// region:    --- TitanTextModel

/// `ReportModel` over Bedrock InvokeModel with a Titan text model.
pub struct TitanTextModel {
	client: Client,
	model_id: String,
}

impl TitanTextModel {
	/// Constructor
	pub fn from_client_and_model_id(client: Client, model_id: impl Into<String>) -> TitanTextModel {
		TitanTextModel {
			client,
			model_id: model_id.into(),
		}
	}
}

#[async_trait]
impl ReportModel for TitanTextModel {
	async fn generate(&self, prompt: &str) -> Result<String> {
		let request = TitanTextRequest {
			input_text: prompt,
			text_generation_config: TextGenerationConfig::default(),
		};
		let body = serde_json::to_vec(&request)?;

		let response = self
			.client
			.invoke_model()
			.model_id(&self.model_id)
			.content_type("application/json")
			.accept("application/json")
			.body(Blob::new(body))
			.send()
			.await?;

		first_output_text(response.body().as_ref(), &self.model_id)
	}
}

/// Extract the first result's outputText.
/// Shape errors and an empty results list surface to the caller; there is no
/// fallback text.
fn first_output_text(body: &[u8], model_id: &str) -> Result<String> {
	let response: TitanTextResponse = serde_json::from_slice(body)?;

	let first = response
		.results
		.into_iter()
		.next()
		.ok_or_else(|| Error::ModelEmptyResults(model_id.to_string()))?;

	Ok(first.output_text)
}

// endregion: --- TitanTextModel

// region:    --- Tests


// endregion: --- Tests
