//! Demo command implementation.
//!
//! Builds a synthetic catalog and searches for the key that sorted insertion
//! pushes to the bottom of the tree.

use crate::render::SearchReport;
use libris_core::{synthetic_records, Catalog, Field, Requester};
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::info;

const AUTHORS: usize = 10;

/// Summary of the demo catalog shape.
#[derive(Debug, Serialize)]
pub struct DemoResult {
    /// Number of records inserted.
    pub records: usize,
    /// Insertion order used.
    pub order: String,
    /// Height of the ISBN tree.
    pub isbn_tree_height: Option<usize>,
    /// Longest chain in the ISBN hash table.
    pub isbn_longest_bucket: Option<usize>,
    /// Comparison for the worst-case ISBN.
    pub isbn_search: SearchReport,
    /// Comparison for one author.
    pub author_search: SearchReport,
}

/// Runs the demo.
pub fn run(records: usize, order: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if records == 0 {
        return Err("--records must be at least 1".into());
    }

    let mut seed = synthetic_records(records, AUTHORS);
    let worst_isbn = format!("{:010}", records - 1);
    match order {
        "sorted" => {}
        "shuffled" => seed.shuffle(&mut rand::thread_rng()),
        other => return Err(format!("unknown order {other:?}, expected sorted or shuffled").into()),
    }

    info!(records, order, "Building demo catalog");
    let catalog = Catalog::new(seed);
    let requester = Requester::new("demo", "Demo");

    let isbn = catalog.search(Field::Isbn, &worst_isbn, &requester)?;
    let author = catalog.search(Field::Author, "Author 0", &requester)?;

    let result = DemoResult {
        records,
        order: order.to_string(),
        isbn_tree_height: catalog.tree_height(Field::Isbn),
        isbn_longest_bucket: catalog.longest_bucket(Field::Isbn),
        isbn_search: SearchReport::new(&worst_isbn, &isbn),
        author_search: SearchReport::new("Author 0", &author),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &DemoResult) {
    println!("Demo Catalog");
    println!("============");
    println!("Records:             {}", result.records);
    println!("Insertion order:     {}", result.order);
    if let Some(height) = result.isbn_tree_height {
        println!("ISBN tree height:    {height}");
    }
    if let Some(longest) = result.isbn_longest_bucket {
        println!("Longest hash chain:  {longest}");
    }

    println!();
    println!("ISBN search for {}:", result.isbn_search.query);
    print!("{}", result.isbn_search.to_text());

    println!();
    println!("Author search for {}:", result.author_search.query);
    print!("{}", result.author_search.to_text());
}
