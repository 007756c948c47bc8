//! Federated product lookup command.

use tokio::runtime::Runtime;

use crate::barcode::Barcode;
use crate::config::Config;
use crate::lookup::{self, LookupOutcome, LookupService, ProductRecord};

use super::parse_code;

/// Identify a product by searching every applicable source in turn
pub fn cmd_lookup(rt: &Runtime, config: &Config, raw: &str, json: bool) -> anyhow::Result<()> {
    let code = parse_code(raw)?;

    let service = match LookupService::from_config(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Could not prepare lookup sources: {}", e);
            eprintln!("✗ An error occurred while searching. Please try again.");
            std::process::exit(1);
        }
    };

    if json {
        let outcome = rt.block_on(service.search(&code));
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Searching: {} ({})", code, code.code_type());
    for (format, converted) in code.alternatives() {
        println!("  {:<8} {}", format!("{}:", format), converted);
    }
    println!();

    let progress = |source: &str| println!("Consulting: {}...", source);
    let outcome = rt.block_on(service.search_with_progress(&code, &progress));

    println!();
    match outcome {
        LookupOutcome::Found(record) => print_record(&record),
        LookupOutcome::NotFound => print_not_found(&code),
    }
    Ok(())
}

fn print_record(record: &ProductRecord) {
    println!("✓ Found via {}", record.source);
    println!();
    println!("  Name:     {}", record.name);
    println!("  Brand:    {}", record.brand);
    println!("  Category: {}", record.category);
    if !record.image.is_empty() {
        println!("  Image:    {}", record.image);
    }
    if let Some(url) = &record.product_url {
        println!("  Product:  {}", url);
    }

    if !record.details.is_empty() {
        println!();
        let width = record.details.labels().iter().map(|l| l.len()).max().unwrap_or(0);
        for (label, value) in record.details.iter() {
            println!("  {:<width$}  {}", label, value, width = width);
        }
    }
}

fn print_not_found(code: &Barcode) {
    println!("✗ No source knows {}.", code);
    println!("  Try searching for it elsewhere:");
    for link in lookup::fallback_links(code) {
        println!("    {:<16} {}", link.title, link.url);
    }
}
