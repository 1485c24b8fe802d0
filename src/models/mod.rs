use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub primary_keywords: String,
    pub secondary_keywords: String,
    pub cy: String,
    pub chosen_link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub plain_title: String,
    pub title_with_link: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Article>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Primary and secondary keywords cannot be empty.")]
    EmptyKeywordSet,
    #[error("Invalid input data.")]
    InvalidInput,
    #[error("An unexpected error occurred.")]
    Internal,
    #[error("Failed to communicate with AI model.")]
    SuggestionService(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
