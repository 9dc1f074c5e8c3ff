//! Health command

use anyhow::Result;
use colored::*;
use easel_client::RelayClient;

pub async fn show_health(client: &RelayClient) -> Result<()> {
    let health = client.health().await?;

    println!("{} {}", "Relay:".bold(), health.message.green());
    println!("  URL:          {}", client.base_url());
    println!("  Mockups path: {}", health.mockups_path.dimmed());
    println!(
        "  Worker:       {}",
        if health.worker_connected {
            "connected".green()
        } else {
            "not connected".red()
        }
    );
    if let Some(since) = health.worker_connected_at {
        println!(
            "  Connected at: {}",
            since.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!("  Pending jobs: {}", health.pending_jobs);
    println!(
        "  Checked at:   {}",
        health
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );

    Ok(())
}
