//! Template and upload commands

use anyhow::{Context, Result};
use colored::*;
use easel_client::RelayClient;
use easel_core::domain::layout::Layout;
use std::path::{Path, PathBuf};

pub async fn list_categories(client: &RelayClient) -> Result<()> {
    let categories = client.list_categories().await?;

    if categories.is_empty() {
        println!("{}", "No categories found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} categor(ies):", categories.len()).bold()
    );
    println!();
    for category in categories {
        println!("  {} {}", "▸".cyan(), category.name.bold());
        if category.subcategories.is_empty() {
            println!("    {}", "(no subcategories)".dimmed());
        }
        for subcategory in category.subcategories {
            println!("    - {}", subcategory);
        }
    }

    Ok(())
}

pub async fn download_preview(
    client: &RelayClient,
    category: &str,
    subcategory: &str,
    layout: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    // Same wording as the relay for an unknown layout.
    let layout: Layout = layout.parse()?;

    let bytes = client
        .mockup_image(category, subcategory, layout.as_str())
        .await?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.png", layout)));
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Saved preview to {} ({} bytes)",
        "✓".green(),
        output.display(),
        bytes.len()
    );
    Ok(())
}

pub async fn upload(client: &RelayClient, file: &Path, name: Option<String>) -> Result<()> {
    let data =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let name = match name {
        Some(name) => name,
        None => default_upload_name(file)?,
    };

    let uploaded = client.upload_mockup(&name, data).await?;

    println!("{} Uploaded {}", "✓".green(), uploaded.file_name.bold());
    println!("  URL:  {}", uploaded.file_path);
    println!("  Size: {} bytes", uploaded.size);
    Ok(())
}

pub async fn delete(client: &RelayClient, filename: &str) -> Result<()> {
    let response = client.delete_mockup(filename).await?;
    println!("{} {}", "✓".green(), response.message);
    Ok(())
}

fn default_upload_name(file: &Path) -> Result<String> {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upload_name() {
        assert_eq!(
            default_upload_name(Path::new("out/processed_1.jpg")).unwrap(),
            "processed_1.jpg"
        );
        assert!(default_upload_name(Path::new("..")).is_err());
    }
}
