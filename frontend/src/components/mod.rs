pub mod card;
pub mod catalog;
pub mod filter_bar;
pub mod hero;
pub mod layout;
