//! Character List Component

use leptos::prelude::*;

use crate::components::CharacterCard;
use crate::roster::RosterStateStoreFields;
use crate::store::use_roster_store;

#[component]
pub fn CharacterList() -> impl IntoView {
    let store = use_roster_store();

    view! {
        <ul>
            <For
                each=move || store.characters().get()
                key=|character| character.id
                children=move |character| {
                    view! { <CharacterCard character=character /> }
                }
            />
        </ul>
    }
}
