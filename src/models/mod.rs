pub mod card;
pub mod deck;

pub use card::*;
pub use deck::*;
