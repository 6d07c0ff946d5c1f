use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

pub async fn handle(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let body: Value = client.get("health").await?;
    let status = body["data"]["status"].as_str().unwrap_or("unknown").to_string();
    output_success(&output_format, &format!("Server is healthy (status: {})", status), Some(body["data"].clone()))
}
