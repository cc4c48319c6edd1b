/// Selection Example
///
/// This example demonstrates:
/// - A selectable table
/// - Selections surviving filter changes
/// - The ordered "selected products" summary

use datatable::{Dataset, TableConfig, TableState};

const PRODUCTS: &str = r#"[
    {"id": 1, "name": "apple", "title": "iPhone 9", "price": 549},
    {"id": 2, "name": "apple", "title": "iPhone X", "price": 899},
    {"id": 3, "name": "samsung", "title": "Samsung Universe 9", "price": 1249},
    {"id": 4, "name": "oppo", "title": "OPPOF19", "price": 280}
]"#;

fn print_summary(table: &TableState) {
    let summary = table.selection_summary();
    if summary.is_empty() {
        println!("   (nothing selected)");
    }
    for entry in summary {
        println!("   {}", entry);
    }
    println!();
}

fn main() {
    println!("=== DataTable Selection Example ===\n");

    let dataset = Dataset::from_json_str(PRODUCTS).unwrap();
    let mut table = TableState::new(dataset, TableConfig::selectable().with_filter_field("title"));

    println!("1. Checking rows 3 and 1...");
    table.toggle_selection(3);
    table.toggle_selection(1);
    print_summary(&table);

    println!("2. Searching titles for \"iphone\" (row 3 is hidden)...");
    let visible = table.set_filter("title", "iphone").ids();
    println!("   Visible ids: {:?}", visible);
    print_summary(&table);

    println!("3. Unchecking row 1 and checking row 2...");
    table.toggle_selection(1);
    table.toggle_selection(2);
    print_summary(&table);

    println!("4. Toggling an id that does not exist (ignored)...");
    table.toggle_selection(99);
    print_summary(&table);

    println!("=== Example Complete ===");
}
