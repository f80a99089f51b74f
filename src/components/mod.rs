//! UI Components
//!
//! Leptos components for the character roster.

mod character_card;
mod character_list;
mod undo_button;

pub use character_card::CharacterCard;
pub use character_list::CharacterList;
pub use undo_button::UndoButton;
