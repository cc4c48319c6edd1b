/// Basic Table Example
///
/// This example demonstrates:
/// - Building a dataset from records
/// - Sorting by clicking the same header repeatedly
/// - Filtering on a text field and on a numeric field
/// - Exporting the visible rows

use datatable::{Dataset, Record, TableConfig, TableState, WorkingSet};

fn print_rows(rows: WorkingSet<'_>) {
    for record in rows.iter() {
        println!(
            "      {:>2}  {:<20} {:>6}",
            record.id(),
            record.display_text("title"),
            record.display_text("price")
        );
    }
    println!();
}

fn main() {
    println!("=== DataTable Basic Example ===\n");

    // 1. Build the dataset
    println!("1. Loading products...");
    let dataset = Dataset::new(vec![
        Record::new(1).with("title", "iPhone 9").with("brand", "Apple").with("price", 549),
        Record::new(2).with("title", "iPhone X").with("brand", "Apple").with("price", 899),
        Record::new(3).with("title", "Samsung Universe 9").with("brand", "Samsung").with("price", 1249),
        Record::new(4).with("title", "OPPOF19").with("brand", "OPPO").with("price", 280),
        Record::new(5).with("title", "Huawei P30").with("brand", "Huawei").with("price", 499),
    ])
    .unwrap();
    println!("   {} products, columns {:?}\n", dataset.len(), dataset.columns());

    let mut table = TableState::new(dataset, TableConfig::default());

    // 2. Sort by price, first click is descending
    println!("2. Clicking the price header...");
    print_rows(table.sort("price"));

    println!("   ...and again (ascending)");
    print_rows(table.sort("price"));

    // 3. Filter on title; sort order is kept
    println!("3. Searching titles for \"iphone\"...");
    print_rows(table.set_filter("title", "iphone"));

    // 4. Numbers match on their decimal text
    println!("4. Searching prices for \"49\"...");
    print_rows(table.set_filter("price", "49"));

    // 5. Clearing the search shows everything again, still sorted
    println!("5. Clearing the search...");
    print_rows(table.set_filter("price", ""));

    // 6. Export what is shown
    println!("6. Exporting the two cheapest products as JSON...");
    let cheapest: Vec<Record> = table.working_set().to_records().into_iter().take(2).collect();
    match serde_json::to_string_pretty(&cheapest) {
        Ok(json) => println!("{}\n", json),
        Err(e) => println!("   export failed: {}\n", e),
    }

    println!("=== Example Complete ===");
}
