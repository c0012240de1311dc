//! # Bootstrap Seeder
//!
//! Runs the idempotent bootstrap seeding against the hosted backend.
//!
//! ## Usage
//! ```bash
//! # Seed using BOIGHOR_DATABASE_URL / DATABASE_URL
//! cargo run -p boighor-db --bin seed
//!
//! # Specify the backend explicitly
//! cargo run -p boighor-db --bin seed -- --database-url postgres://...
//! ```
//!
//! Seeds only tables observed empty:
//! - one bootstrap admin (role `super_admin`)
//! - six stock categories

use std::env;

use tracing::Level;

use boighor_db::{ensure_seed_data, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut database_url: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--database-url" | "-d" => {
                if i + 1 < args.len() {
                    database_url = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Boighor Bootstrap Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --database-url <URL>  Backend URL (default: BOIGHOR_DATABASE_URL)");
                println!("  -h, --help                Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match database_url {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env(),
    };

    println!("🌱 Boighor Bootstrap Seeder");
    println!("===========================");
    println!();

    let db = Database::connect(config).await?;
    println!("✓ Connected to backend");

    ensure_seed_data(&db).await;

    let admins = db.admins().count().await?;
    let categories = db.categories().count().await?;
    println!("✓ Admin rows: {}", admins);
    println!("✓ Category rows: {}", categories);
    println!();
    println!("✓ Seed complete!");

    db.close().await;

    Ok(())
}
