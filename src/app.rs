//! Character Roster App
//!
//! Main application component: title bar with undo, then the character list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CharacterList, UndoButton};
use crate::config::ApiConfig;
use crate::context::RosterContext;
use crate::roster::RosterState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(RosterState::default());
    let roster = RosterContext::new(store, ApiConfig::default());

    // Provide context to all children
    provide_context(store);
    provide_context(roster);

    // Load characters on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading characters".into());
        roster.load();
    });

    view! {
        <main>
            <div class="title">
                <h1>"Rick and Morty API"</h1>
                <UndoButton />
            </div>

            <CharacterList />
        </main>
    }
}
