//! Catalog listing and lookup commands.

use tokio::runtime::Runtime;

use crate::catalog::{CatalogProvider, MediaRecord, derive_content_url};
use crate::config::Config;
use crate::error::{Error, ResultExt};

/// Build the catalog from `url` and print it
pub fn cmd_list(
    rt: &Runtime,
    config: &Config,
    url: &str,
    json: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let provider = CatalogProvider::from_config(config)?;
    let catalog = rt
        .block_on(provider.build(url))
        .with_context(format!("building catalog from {}", url))?;

    let shown = limit.unwrap_or(catalog.len()).min(catalog.len());
    let records = &catalog.records()[..shown];

    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No videos in catalog.");
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        print_record(i + 1, record);
    }
    println!();
    if shown < catalog.len() {
        println!("Showing {} of {} videos.", shown, catalog.len());
    } else {
        println!("{} videos.", catalog.len());
    }

    Ok(())
}

/// Print every record whose identifier is `isrc`
pub fn cmd_show(
    rt: &Runtime,
    config: &Config,
    url: &str,
    isrc: &str,
    json: bool,
) -> anyhow::Result<()> {
    let provider = CatalogProvider::from_config(config)?;
    let catalog = rt
        .block_on(provider.build(url))
        .with_context(format!("building catalog from {}", url))?;

    let matches: Vec<&MediaRecord> = catalog.find_by_id(isrc).collect();
    if matches.is_empty() {
        return Err(Error::not_found(format!("video {}", isrc)).into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for (i, record) in matches.iter().enumerate() {
            print_record(i + 1, record);
        }
    }

    Ok(())
}

/// Print the playable URL for an identifier
pub fn cmd_content_url(isrc: &str) -> anyhow::Result<()> {
    if isrc.is_empty() {
        return Err(Error::config("identifier must not be empty").into());
    }
    println!("{}", derive_content_url(isrc));
    Ok(())
}

fn print_record(position: usize, record: &MediaRecord) {
    println!("{:>3}. {}", position, record.title);
    if !record.artist.is_empty() {
        println!("     Artist:    {}", record.artist);
    }
    println!("     ISRC:      {}", record.id);
    println!("     Video:     {}", record.content_url);
    println!("     Thumbnail: {}", record.thumbnail_url);
}
