//! Roster Context
//!
//! Single writer for roster state, provided via Leptos Context API.
//! Network work runs on `spawn_local`, so every state write lands on the
//! one browser thread, one at a time.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::ApiConfig;
use crate::error::FetchResult;
use crate::models::{Character, DeletionRecord};
use crate::store::{store_delete_character, store_pop_deletion, store_populate, store_reinsert, RosterStore};

/// Delete/undo controller shared by all components
#[derive(Clone, Copy)]
pub struct RosterContext {
    store: RosterStore,
    config: StoredValue<ApiConfig>,
}

impl RosterContext {
    pub fn new(store: RosterStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Fetch the character list once and display it as returned
    pub fn load(&self) {
        let store = self.store;
        let config = self.config.get_value();
        spawn_local(async move {
            match commands::list_characters(&config).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[ROSTER] Loaded {} characters", loaded.len()).into());
                    store_populate(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROSTER] {}", e).into());
                }
            }
        });
    }

    /// Remove a character from the list, remembering where it was
    pub fn delete(&self, id: u32, index: usize) {
        web_sys::console::log_1(&format!("[ROSTER] Delete id={} at index={}", id, index).into());
        store_delete_character(&self.store, id, index);
    }

    /// Undo the most recent delete.
    ///
    /// The record is popped before the re-fetch starts; if the fetch fails
    /// the record is gone and the character stays removed.
    pub fn undo(&self) {
        let config = self.config.get_value();
        let Some((record, restoring)) = begin_undo(self.store, move |id| async move {
            commands::get_character(&config, id).await
        }) else {
            return;
        };

        spawn_local(async move {
            match restoring.await {
                Ok(at) => {
                    web_sys::console::log_1(&format!("[ROSTER] Restored id={} at index={}", record.id, at).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROSTER] Undo of id={} lost: {}", record.id, e).into());
                }
            }
        });
    }
}

/// Pop the most recent deletion now and return it with the future that
/// re-fetches the character and reinserts it at the recorded index.
///
/// Returns `None`, without calling `fetch`, when there is nothing to undo.
pub fn begin_undo<F, Fut>(
    store: RosterStore,
    fetch: F,
) -> Option<(DeletionRecord, impl Future<Output = FetchResult<usize>>)>
where
    F: FnOnce(u32) -> Fut,
    Fut: Future<Output = FetchResult<Character>>,
{
    let record = store_pop_deletion(&store)?;
    let fetching = fetch(record.id);
    Some((record, async move {
        let character = fetching.await?;
        Ok(store_reinsert(&store, record, character))
    }))
}

/// Get the roster controller from context
pub fn use_roster() -> RosterContext {
    expect_context::<RosterContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::Status;
    use crate::roster::{RosterState, RosterStateStoreFields};
    use futures::executor::block_on;
    use futures::future::ready;
    use reactive_stores::Store;
    use serde_json::Map;
    use std::cell::Cell;

    fn make_character(id: u32) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
            status: Status::Dead,
            species: "Alien".to_string(),
            extra: Map::new(),
        }
    }

    fn loaded_store(ids: &[u32]) -> RosterStore {
        let store = Store::new(RosterState::default());
        store_populate(&store, ids.iter().copied().map(make_character).collect());
        store
    }

    fn ids(store: &RosterStore) -> Vec<u32> {
        store.characters().get_untracked().iter().map(|c| c.id).collect()
    }

    fn pending(store: &RosterStore) -> usize {
        store.history().get_untracked().len()
    }

    #[test]
    fn test_undo_empty_history_never_fetches() {
        let store = loaded_store(&[1, 2]);
        let fetched = Cell::new(false);

        let started = begin_undo(store, |id| {
            fetched.set(true);
            ready(Ok(make_character(id)))
        });

        assert!(started.is_none());
        assert!(!fetched.get());
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(pending(&store), 0);
    }

    #[test]
    fn test_undo_refetch_reinserts_at_recorded_index() {
        let store = loaded_store(&[1, 2, 3]);
        store_delete_character(&store, 2, 1);

        let requested = Cell::new(None);
        let (record, restoring) = begin_undo(store, |id| {
            requested.set(Some(id));
            ready(Ok(make_character(id)))
        })
        .unwrap();

        assert_eq!(record, DeletionRecord { id: 2, index: 1 });
        assert_eq!(requested.get(), Some(2));
        assert_eq!(block_on(restoring).unwrap(), 1);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(pending(&store), 0);
    }

    #[test]
    fn test_undo_failed_refetch_keeps_record_popped() {
        let store = loaded_store(&[1, 2, 3]);
        store_delete_character(&store, 1, 0);
        store_delete_character(&store, 3, 1);

        let (record, restoring) = begin_undo(store, |id| {
            ready(Err::<Character, _>(FetchError::Status {
                url: format!("https://rickandmortyapi.com/api/character/{}", id),
                status: 500,
            }))
        })
        .unwrap();

        // Popped before the fetch has even been awaited
        assert_eq!(record.id, 3);
        assert_eq!(pending(&store), 1);

        let err = block_on(restoring).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));

        // No rollback: history stays one shorter, list is unchanged
        assert_eq!(pending(&store), 1);
        assert_eq!(store.history().get_untracked(), vec![DeletionRecord { id: 1, index: 0 }]);
        assert_eq!(ids(&store), vec![2]);
    }
}
