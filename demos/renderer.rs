/// Renderer Example
///
/// This example demonstrates:
/// - Subscribing a renderer to the table state
/// - Driving the table with JSON events, as a front end would
/// - Repainting only what a change affected

use datatable::{Dataset, Record, TableConfig, TableEvent, TableState, ViewSnapshot};

fn paint(snapshot: &ViewSnapshot) {
    println!("-- render #{} --", snapshot.generation);

    if snapshot.rows_changed() {
        let header: Vec<String> = snapshot
            .columns
            .iter()
            .map(|column| match snapshot.sort.indicator(column) {
                Some(direction) => format!("{} ({:?})", column, direction),
                None => column.clone(),
            })
            .collect();
        println!("   [ ] {}", header.join(" | "));

        for row in &snapshot.rows {
            let checkbox = match row.checked {
                Some(true) => "[x]",
                Some(false) => "[ ]",
                None => "   ",
            };
            let cells: Vec<String> = row.record.fields().map(|(_, value)| value.to_string()).collect();
            println!("   {} {}  menu:{:?}", checkbox, cells.join(" | "), row.menu_anchor);
        }
    }

    for entry in &snapshot.selection {
        println!("   selected: {}", entry);
    }
    println!();
}

fn main() {
    println!("=== DataTable Renderer Example ===\n");

    let records = (1..=8)
        .map(|i| {
            Record::new(i)
                .with("name", format!("vendor-{}", i % 3))
                .with("title", format!("Product {}", i))
                .with("price", (i * 37 % 100) as f64 + 0.99)
        })
        .collect();
    let dataset = Dataset::new(records).unwrap();

    let mut table = TableState::new(dataset, TableConfig::selectable());
    table.subscribe(paint);
    table.refresh();

    let events = [
        r#"{"type": "HeaderActivated", "column": "price"}"#,
        r#"{"type": "SelectionToggled", "id": 4}"#,
        r#"{"type": "FilterChanged", "field": "name", "query": "vendor-1"}"#,
        r#"{"type": "FilterFieldChanged", "field": "title"}"#,
    ];

    for line in events {
        match TableEvent::from_json(line) {
            Ok(event) => table.dispatch(event),
            Err(e) => eprintln!("bad event {}: {}", line, e),
        }
    }

    println!("=== Example Complete ===");
}
