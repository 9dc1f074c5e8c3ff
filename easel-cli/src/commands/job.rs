//! Job submission command

use anyhow::Result;
use colored::*;
use easel_client::RelayClient;
use easel_core::dto::job::SubmitJob;

/// Submit a job and block until the worker answers
pub async fn submit_job(
    client: &RelayClient,
    image_url: String,
    category: String,
    subcategory: String,
    layout: String,
) -> Result<()> {
    println!(
        "{}",
        format!("Submitting {}/{} ({})...", category, subcategory, layout).dimmed()
    );

    let response = client
        .submit_job(&SubmitJob {
            image_url: Some(image_url),
            category: Some(category),
            subcategory: Some(subcategory),
            layout: Some(layout),
        })
        .await?;

    println!("{}", "✓ Mockup ready".green().bold());
    println!("  Job ID: {}", response.job_id.bold());
    println!("  Result: {}", response.result_path);
    if let Some(context) = response.mockup_context {
        println!("  Context: {}", context.dimmed());
    }

    Ok(())
}
