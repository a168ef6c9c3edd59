//! Diagnostic: lists the Gemini models available to the configured API key
//! that support `generateContent`.

use anyhow::Context;
use review_analyzer::gemini::GEMINI_BASE_URL;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("Error: GEMINI_API_KEY is not set (check your .env file)");
            std::process::exit(1);
        }
    };

    let key_prefix: String = api_key.chars().take(5).collect();
    println!("Checking models for API key {}... (this may take a moment)\n", key_prefix);

    let response = reqwest::Client::new()
        .get(format!("{}/models", GEMINI_BASE_URL))
        .query(&[("key", api_key.as_str())])
        .send()
        .await
        .context("request to the Gemini models endpoint failed")?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    if !status.is_success() {
        let message = body["error"]["message"].as_str().unwrap_or("unknown error");
        eprintln!("Error: provider returned HTTP {}: {}", status, message);
        eprintln!("The API key may be wrong or not yet active.");
        std::process::exit(1);
    }

    let models = body["models"].as_array().cloned().unwrap_or_default();
    let mut found = false;

    println!("Available text models:");
    for model in &models {
        let supports_generate = model["supportedGenerationMethods"]
            .as_array()
            .map(|methods| methods.iter().any(|m| m.as_str() == Some("generateContent")))
            .unwrap_or(false);

        if supports_generate {
            if let Some(name) = model["name"].as_str() {
                println!("- {}", name);
                found = true;
            }
        }
    }

    if !found {
        println!("No text models found. Try creating a new API key.");
    }

    Ok(())
}
