//! Counter store with named actions

use canister::{Actions, Store};

fn main() {
    env_logger::init();

    println!("=== Counter Demo ===\n");

    let store = Store::new(0);

    // Subscribe to every accepted change
    let _sub = store.subscribe(|count: &i32| {
        println!("count is now {count}");
    });

    let actions = Actions::new(&store)
        .with("increment", |n: &i32| n + 1)
        .with("decrement", |n: &i32| n - 1)
        .with("reset", |_n: &i32| 0);

    println!("Incrementing twice...");
    actions.dispatch("increment");
    actions.dispatch("increment");

    println!("\nDecrementing...");
    actions.dispatch("decrement");

    println!("\nResetting twice (the second one is a no-op)...");
    actions.dispatch("reset");
    actions.dispatch("reset");

    println!("\nFinal count: {}", store.get());
}
