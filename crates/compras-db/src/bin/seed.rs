//! # Seed Data Generator
//!
//! Populates an empty store with sample lists and products for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./compras_dev.db
//! cargo run -p compras-db --bin seed
//!
//! # Specify database path
//! cargo run -p compras-db --bin seed -- --db ./data/compras.db
//! ```
//!
//! ## Generated Data
//! One list per entry in `LISTS`, each with its products. The first list is
//! starred, and every third product is already ticked off. A few products are
//! left outside any list.

use std::env;
use std::time::Instant;

use compras_db::{Database, DbConfig};

/// Sample lists with their products and quantities
const LISTS: &[(&str, &[(&str, i64)])] = &[
    (
        "Groceries",
        &[
            ("Milk", 2),
            ("Bread", 1),
            ("Eggs", 12),
            ("Butter", 1),
            ("Coffee", 1),
            ("Bananas", 6),
            ("Rice", 2),
            ("Beans", 2),
        ],
    ),
    (
        "Barbecue",
        &[
            ("Charcoal", 1),
            ("Sausages", 10),
            ("Picanha", 2),
            ("Farofa", 1),
            ("Soda", 6),
        ],
    ),
    (
        "Pharmacy",
        &[("Toothpaste", 2), ("Sunscreen", 1), ("Bandages", 1)],
    ),
];

/// Products that belong to no list
const LOOSE: &[(&str, i64)] = &[("Light bulbs", 4), ("Batteries", 8)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./compras_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(path) = args.get(i + 1) {
                    db_path = path.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Compras Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./compras_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Compras Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::open(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema initialized");

    let existing = db.products().count().await? + db.shopping_lists().count().await?;
    if existing > 0 {
        println!("⚠ Database already has data");
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = Instant::now();
    let mut generated = 0;

    for (list_idx, (list_name, products)) in LISTS.iter().enumerate() {
        let list_id = db.shopping_lists().insert(list_name).await?;
        if list_idx == 0 {
            db.shopping_lists().toggle_favorite(list_id, false).await?;
        }

        for (name, quantity) in products.iter() {
            let id = db.products().insert_in_list(name, *quantity, list_id).await?;

            generated += 1;
            if generated % 3 == 0 {
                if let Some(product) = db.products().get_by_id(id).await? {
                    db.products().toggle_completed(&product).await?;
                }
            }
        }

        println!("  {}: {} products", list_name, products.len());
    }

    for (name, quantity) in LOOSE {
        db.products().insert(name, *quantity).await?;
        generated += 1;
    }

    println!();
    println!(
        "✓ Generated {} lists and {} products in {:?}",
        LISTS.len(),
        generated,
        start.elapsed()
    );

    db.close().await;
    Ok(())
}
