//! Merging store with selector-scoped subscriptions

use canister::{Merge, Store};

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    name: String,
    email: Option<String>,
    visits: u32,
}

impl Merge for Profile {
    fn merge(current: &Self, incoming: Self) -> Self {
        Profile {
            name: incoming.name,
            email: incoming.email.or_else(|| current.email.clone()),
            visits: incoming.visits,
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Profile Demo ===\n");

    let store = Store::new(Profile {
        name: "ada".to_string(),
        email: Some("ada@example.com".to_string()),
        visits: 0,
    })
    .merging();

    // Fires only when the name projection changes
    let _name_sub = store.subscribe_with(
        |name: &String| println!("name changed to {name:?}"),
        |p: &Profile| p.name.clone(),
    );

    // Fires on any accepted change
    let _any_sub = store.subscribe(|p: &Profile| {
        println!("profile updated: {p:?}");
    });

    println!("Bumping the visit counter (name subscription stays quiet)...");
    store.update(|p| Profile {
        visits: p.visits + 1,
        ..p.clone()
    });

    println!("\nRenaming without touching the email (merge keeps it)...");
    store.set(Profile {
        name: "grace".to_string(),
        email: None,
        visits: store.get().visits,
    });

    println!("\nFinal profile: {:#?}", store.get());
}
