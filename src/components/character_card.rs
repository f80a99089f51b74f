//! Character Card Component
//!
//! One list entry: portrait, name, status and a delete button.

use leptos::prelude::*;

use crate::context::use_roster;
use crate::models::Character;
use crate::store::{store_index_of, use_roster_store};

/// A single character row in the list
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let roster = use_roster();
    let store = use_roster_store();

    let id = character.id;
    let status = character.status;
    let name = character.name.clone();

    view! {
        <li>
            <img src=character.image.clone() alt=name.clone() />

            <div class="info-container">
                <h2>{name}</h2>
                <div class="status">
                    // Colour keyed by status
                    <div class=format!("circle {}", status.css_class())></div>
                    <p>{format!("{} - {}", status.label(), character.species)}</p>
                </div>

                <button on:click=move |_| {
                    // Position at click time, not render time
                    if let Some(index) = store_index_of(&store, id) {
                        roster.delete(id, index);
                    }
                }>"Delete"</button>
            </div>
        </li>
    }
}
