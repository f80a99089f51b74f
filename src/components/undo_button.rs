//! Undo Button Component
//!
//! Undoes the most recent delete and shows how many are left.

use leptos::prelude::*;

use crate::context::use_roster;
use crate::roster::{undo_label, RosterStateStoreFields};
use crate::store::use_roster_store;

#[component]
pub fn UndoButton() -> impl IntoView {
    let roster = use_roster();
    let store = use_roster_store();

    let remaining = move || undo_label(store.history().with(|history| history.len()));

    view! {
        <button on:click=move |_| roster.undo()>
            "Undo " <span>{remaining}</span>
        </button>
    }
}
