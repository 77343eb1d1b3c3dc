use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog::Catalog;
use crate::tui;

#[derive(Parser)]
#[command(name = "travel-planner")]
#[command(version = "0.1.0")]
#[command(about = "Plan a trip and find a hotel from the built-in catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available destination cities
    Cities,
    /// Show statistics about the hotel catalog
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::load()?;

    match &cli.command {
        Some(Commands::Cities) => {
            list_cities(&catalog);
        }
        Some(Commands::Stats) => {
            show_stats(&catalog);
        }
        None => {
            tui::run_interactive(catalog)?;
        }
    }

    Ok(())
}

fn list_cities(catalog: &Catalog) {
    println!("Available destinations:");
    for city in catalog.cities() {
        println!("  {}", city);
    }
}

fn show_stats(catalog: &Catalog) {
    println!("Hotel Catalog Statistics");
    println!("========================");
    println!("Total hotels: {}", catalog.len());

    for city in catalog.cities() {
        let count = catalog.hotels().iter().filter(|h| &h.city == city).count();
        println!("  {}: {}", city, count);
    }
    println!();

    if let Some(cheapest) = catalog.hotels().iter().min_by_key(|h| h.price_per_night) {
        println!("Cheapest: {} ({}/night)", cheapest.name, cheapest.price_per_night);
    }
    if let Some(priciest) = catalog.hotels().iter().max_by_key(|h| h.price_per_night) {
        println!("Priciest: {} ({}/night)", priciest.name, priciest.price_per_night);
    }
}
