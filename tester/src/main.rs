use anyhow::Result;
use clap::Parser;
use serde_json::{Value, json};

const SAMPLE_TEXTS: &[&str] = &[
    "This is great!",
    "This is terrible!",
    "This is okay.",
    "I love this product!",
    "This is awful and terrible!",
];

/// Fires sample requests at a running server and prints what comes back.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the server to poke.
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{}/health", args.url))
        .send()
        .await?
        .json()
        .await?;

    println!("Health: {health}");
    println!();

    for text in SAMPLE_TEXTS {
        let response = client
            .post(format!("{}/predict", args.url))
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        println!(
            "[{status}] {text} -> {} (confidence: {})",
            body["prediction"]["sentiment"].as_str().unwrap_or("?"),
            body["prediction"]["confidence"]
        );
    }

    println!();

    let batch: Value = client
        .post(format!("{}/batch-predict", args.url))
        .json(&json!({ "texts": SAMPLE_TEXTS }))
        .send()
        .await?
        .json()
        .await?;

    println!("Batch of {}:", batch["total_texts"]);

    if let Some(results) = batch["results"].as_array() {
        for result in results {
            println!("  {result}");
        }
    }

    Ok(())
}
