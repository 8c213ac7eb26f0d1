// ABOUTME: CLI services command - print the bookable service catalog
//
// Fetches from the booking API when reachable; otherwise prints the
// built-in catalog, same as the TUI.

use super::OutputFormat;
use crate::api::BookingApiClient;
use crate::booking::{fallback_catalog, Service};
use crate::config::AppConfig;
use anyhow::Result;
use tracing::debug;

/// Execute the services command
pub async fn execute(format: OutputFormat) -> Result<()> {
    let services = load_services().await;

    match format {
        OutputFormat::Json => output_json(&services)?,
        OutputFormat::Text => output_text(&services),
    }

    Ok(())
}

async fn load_services() -> Vec<Service> {
    let config = AppConfig::load().unwrap_or_default();
    let Ok(client) = BookingApiClient::from_config(&config) else {
        return fallback_catalog();
    };

    client.fetch_services().await.unwrap_or_else(|e| {
        debug!("Service catalog unavailable, using fallback: {}", e);
        fallback_catalog()
    })
}

/// Output services as JSON
fn output_json(services: &[Service]) -> Result<()> {
    let json = serde_json::to_string_pretty(services)?;
    println!("{json}");
    Ok(())
}

/// Output services as a text table
fn output_text(services: &[Service]) {
    if services.is_empty() {
        println!("No services available.");
        return;
    }

    println!("{:<4} {:<26} {:<12} {:<8} DESCRIPTION", "ID", "NAME", "DURATION", "PRICE");
    let separator = "-".repeat(100);
    println!("{separator}");

    for service in services {
        println!(
            "{:<4} {:<26} {:<12} {:<8} {}",
            service.id,
            truncate(&service.name, 26),
            service.duration_label(),
            service.price_label(),
            service.description
        );
    }
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
