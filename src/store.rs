//! Roster Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Character, DeletionRecord};
use crate::roster::{remove_character, reinsert_character, RosterState, RosterStateStoreFields};

/// Type alias for the store
pub type RosterStore = Store<RosterState>;

/// Get the roster store from context
pub fn use_roster_store() -> RosterStore {
    expect_context::<RosterStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed list
pub fn store_populate(store: &RosterStore, characters: Vec<Character>) {
    *store.characters().write() = characters;
}

/// Push a deletion record, then remove the character by ID
pub fn store_delete_character(store: &RosterStore, id: u32, index: usize) {
    store.history().write().push(DeletionRecord { id, index });
    remove_character(&mut store.characters().write(), id);
}

/// Pop the most recent deletion record. An empty history is left untouched.
pub fn store_pop_deletion(store: &RosterStore) -> Option<DeletionRecord> {
    if store.history().with_untracked(Vec::is_empty) {
        return None;
    }
    store.history().write().pop()
}

/// Current index of a character, looked up without subscribing
pub fn store_index_of(store: &RosterStore, id: u32) -> Option<usize> {
    store.characters().with_untracked(|list| list.iter().position(|c| c.id == id))
}

/// Reinsert a re-fetched character at its recorded index
pub fn store_reinsert(store: &RosterStore, record: DeletionRecord, character: Character) -> usize {
    reinsert_character(&mut store.characters().write(), record.index, character)
}
