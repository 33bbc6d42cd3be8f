//! Example: resolving a handful of card names.
//!
//! Run with: cargo run --example lookup

use scrydeck::{Identifier, ScryfallClient};

#[tokio::main]
async fn main() -> scrydeck::Result<()> {
    let client = ScryfallClient::new();

    let cards = client
        .cards()
        .collection(&[
            Identifier::name("Lightning Bolt"),
            Identifier::name("Counterspell"),
            Identifier::name("Llanowar Elves"),
        ])
        .await?;

    for card in cards {
        match &card.mana_cost {
            Some(cost) => println!("{} {} — {}", card.name, cost, card.type_line),
            None => println!("{} — {}", card.name, card.type_line),
        }
    }

    Ok(())
}
