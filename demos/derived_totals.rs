//! Derived stores computed from a record of line-item prices

use ripple::{Record, Store};
use std::sync::Arc;

fn main() {
    println!("=== Derived Totals ===\n");

    let prices = Store::new(Record::from([
        ("bread", 3i64),
        ("milk", 2),
        ("coffee", 9),
    ]));

    // One derived store per view of the same source
    let doubled = prices.derive(|state: &Record<i64>| {
        let state = state.clone();
        move || state.iter().map(|(k, v)| (k, v * 2)).collect::<Record<i64>>()
    });

    let total = prices.derive(|state: &Record<i64>| {
        let sum = state.values().sum::<i64>();
        move || Record::from([("total", sum)])
    });

    // A second-order derivation combining a derived store with the root
    let report = total.derive_with(vec![prices.as_source()], |states: &[Arc<Record<i64>>]| {
        let items = states[1].len() as i64;
        let total = states[0]["total"];
        move || Record::from([("items", items), ("total", total)])
    });

    println!("prices:  {:?}", prices.get_state());
    println!("doubled: {:?}", doubled.get_state());
    println!("total:   {:?}", total.get_state());
    println!("report:  {:?}", report.get_state());

    println!("\nCoffee goes on sale...");
    prices.set(Record::from([("coffee", 6)]));
    println!("doubled: {:?}", doubled.get_state());
    println!("report:  {:?}", report.get_state());

    println!("\nAdding a new item...");
    prices.set(Record::from([("tea", 4)]));
    println!("report:  {:?}", report.get_state());

    println!("\nDetaching the report...");
    report.destroy();
    prices.set(Record::from([("bread", 5)]));
    println!("report stays at: {:?}", report.get_state());
    println!("total moved on:  {:?}", total.get_state());
}
