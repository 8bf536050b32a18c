//! Counter store with struct state and partial updates

use ripple::{State, Store};

#[derive(Clone, Debug)]
struct CounterState {
    count: i64,
    step: i64,
}

#[derive(Default)]
struct CounterPatch {
    count: Option<i64>,
    step: Option<i64>,
}

impl State for CounterState {
    type Partial = CounterPatch;

    fn merge(&self, patch: CounterPatch) -> Self {
        CounterState {
            count: patch.count.unwrap_or(self.count),
            step: patch.step.unwrap_or(self.step),
        }
    }
}

fn main() {
    println!("=== Counter Store ===\n");

    let store = Store::new(CounterState { count: 0, step: 1 });

    // Subscribe to state changes
    let subscription = store.subscribe(|new: &CounterState, previous: &CounterState| {
        println!("count: {} -> {}", previous.count, new.count);
    });

    println!("Incrementing...");
    store.set_with(|state| CounterPatch {
        count: Some(state.count + state.step),
        ..Default::default()
    });
    store.set_with(|state| CounterPatch {
        count: Some(state.count + state.step),
        ..Default::default()
    });

    println!("\nChanging step to 10, then incrementing...");
    store.set(CounterPatch {
        step: Some(10),
        ..Default::default()
    });
    store.set_with(|state| CounterPatch {
        count: Some(state.count + state.step),
        ..Default::default()
    });

    println!("\nUnsubscribing; further writes are silent...");
    subscription.unsubscribe();
    store.set(CounterPatch {
        count: Some(100),
        ..Default::default()
    });

    println!("\nFinal state: {:#?}", store.get_state());
}
