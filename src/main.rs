mod data;
mod models;
mod services;

use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use data::ContentPools;
use models::{GenerateError, GenerateRequest, GenerateResponse, SuggestRequest, SuggestResponse};
use services::llm::LLMClient;

#[derive(Clone)]
struct AppState {
    llm_client: Arc<LLMClient>,
    pools: Arc<ContentPools>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Create the LLM client and the static content pools
    let llm_client = Arc::new(LLMClient::new()?);
    let pools = Arc::new(ContentPools::builtin());

    // Create the application state
    let app_state = AppState { llm_client, pools };

    // Build our application with a route
    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/generate", post(generate))
        .route("/api/suggest", post(suggest))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        // Add CORS layer
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::AllowMethods::any())
                .allow_headers(tower_http::cors::AllowHeaders::any()),
        );

    // Run our application
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index() -> Html<String> {
    let html_content = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>SEO Article Generation Service</title>
        <meta charset="utf-8">
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .info-box { background-color: #f0f8ff; padding: 20px; border-radius: 8px; margin: 20px 0; }
            .endpoint { background-color: #f5f5f5; padding: 10px; margin: 10px 0; border-radius: 4px; font-family: monospace; }
        </style>
    </head>
    <body>
        <h1>SEO Article Generation Service</h1>

        <div class="info-box">
            <h2>Service Information</h2>
            <p>This service generates one structured navigation article per secondary keyword, combining your primary keywords, a deterministic suffix and a rotating template pool.</p>
            <p>Titles and contents come back both as plain text and as HTML with the chosen link embedded.</p>
        </div>

        <h2>Available Endpoints:</h2>
        <div class="endpoint">GET / - This information page</div>
        <div class="endpoint">GET /health - Health check</div>
        <div class="endpoint">POST /api/generate - Generate articles from keyword lists</div>
        <div class="endpoint">POST /api/suggest - Ask the language model for keyword suggestions</div>

        <h2>How to Use:</h2>
        <p>POST JSON to /api/generate with 'primaryKeywords', 'secondaryKeywords', 'cy' and 'chosenLink' fields. Keyword fields are comma- or newline-separated lists.</p>
    </body>
    </html>
    "#.to_string();

    Html(html_content)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    match services::generator::generate_articles(&request, &state.pools) {
        Ok(results) => Json(GenerateResponse {
            success: true,
            results: Some(results),
            error: None,
        }),
        Err(err) => {
            tracing::warn!("article generation failed: {}", err);
            Json(GenerateResponse {
                success: false,
                results: None,
                error: Some(err.to_string()),
            })
        }
    }
}

async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Json(SuggestResponse {
            success: false,
            suggestions: None,
            error: Some("Topic is required.".to_string()),
        });
    }

    match state.llm_client.suggest_keywords(topic).await {
        Ok(suggestions) => Json(SuggestResponse {
            success: true,
            suggestions: Some(suggestions),
            error: None,
        }),
        Err(err) => {
            tracing::warn!("keyword suggestion failed: {}", err);
            let err = GenerateError::SuggestionService(err);
            Json(SuggestResponse {
                success: false,
                suggestions: None,
                error: Some(err.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState {
            llm_client: Arc::new(LLMClient::new().unwrap()),
            pools: Arc::new(ContentPools::builtin()),
        }
    }

    #[tokio::test]
    async fn test_generate_success_envelope() {
        let request = GenerateRequest {
            primary_keywords: "foo".to_string(),
            secondary_keywords: "bar,baz".to_string(),
            cy: "2025".to_string(),
            chosen_link: "example.com".to_string(),
        };

        let Json(response) = generate(State(test_state()), Json(request)).await;
        assert!(response.success);
        assert!(response.error.is_none());
        assert_eq!(response.results.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_failure_envelope() {
        let request = GenerateRequest {
            primary_keywords: "foo".to_string(),
            secondary_keywords: " , \n".to_string(),
            cy: "2025".to_string(),
            chosen_link: "example.com".to_string(),
        };

        let Json(response) = generate(State(test_state()), Json(request)).await;
        assert!(!response.success);
        assert!(response.results.is_none());
        assert_eq!(
            response.error.as_deref(),
            Some("Primary and secondary keywords cannot be empty.")
        );
    }

    #[tokio::test]
    async fn test_suggest_requires_topic() {
        let request = SuggestRequest {
            topic: "   ".to_string(),
        };

        let Json(response) = suggest(State(test_state()), Json(request)).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Topic is required."));
    }
}
