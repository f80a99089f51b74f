//! Roster State
//!
//! The displayed character list plus its LIFO deletion history, and the
//! pure transitions applied to them by delete and undo.

use reactive_stores::Store;

use crate::models::{Character, DeletionRecord};

/// Displayed characters and the deletes that can still be undone
#[derive(Clone, Debug, Default, Store)]
pub struct RosterState {
    /// Characters in display order
    pub characters: Vec<Character>,
    /// Deletion history, most recent last
    pub history: Vec<DeletionRecord>,
}

/// Remove every entry with `id`. Returns the index of the first one removed.
pub fn remove_character(list: &mut Vec<Character>, id: u32) -> Option<usize> {
    let first = list.iter().position(|c| c.id == id);
    list.retain(|c| c.id != id);
    first
}

/// Insert `character` at `index`, shifting later entries right.
///
/// The index is not checked against what moved since it was recorded; an
/// index past the end appends. Returns the position actually used.
pub fn reinsert_character(list: &mut Vec<Character>, index: usize, character: Character) -> usize {
    let at = index.min(list.len());
    list.insert(at, character);
    at
}

/// Annotation shown next to the undo control
pub fn undo_label(pending: usize) -> String {
    if pending > 0 {
        format!("({} remaining)", pending)
    } else {
        "(No remaining)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use serde_json::Map;

    fn make_character(id: u32) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
            status: Status::Alive,
            species: "Human".to_string(),
            extra: Map::new(),
        }
    }

    fn list(ids: &[u32]) -> Vec<Character> {
        ids.iter().copied().map(make_character).collect()
    }

    fn ids(list: &[Character]) -> Vec<u32> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_remove_character() {
        let mut characters = list(&[1, 2, 3]);
        assert_eq!(remove_character(&mut characters, 2), Some(1));
        assert_eq!(ids(&characters), vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut characters = list(&[1, 2]);
        assert_eq!(remove_character(&mut characters, 9), None);
        assert_eq!(ids(&characters), vec![1, 2]);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut characters = list(&[4, 1, 4]);
        assert_eq!(remove_character(&mut characters, 4), Some(0));
        assert_eq!(ids(&characters), vec![1]);
    }

    #[test]
    fn test_reinsert_shifts_right() {
        let mut characters = list(&[1, 3]);
        assert_eq!(reinsert_character(&mut characters, 1, make_character(2)), 1);
        assert_eq!(ids(&characters), vec![1, 2, 3]);

        assert_eq!(reinsert_character(&mut characters, 0, make_character(0)), 0);
        assert_eq!(ids(&characters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reinsert_past_end_appends() {
        let mut characters = list(&[1]);
        assert_eq!(reinsert_character(&mut characters, 5, make_character(2)), 1);
        assert_eq!(ids(&characters), vec![1, 2]);

        let mut empty = Vec::new();
        assert_eq!(reinsert_character(&mut empty, 3, make_character(7)), 0);
        assert_eq!(ids(&empty), vec![7]);
    }

    #[test]
    fn test_undo_label() {
        assert_eq!(undo_label(0), "(No remaining)");
        assert_eq!(undo_label(1), "(1 remaining)");
        assert_eq!(undo_label(12), "(12 remaining)");
    }
}
