//! Character Commands
//!
//! Bindings for the list and single-character endpoints.

use crate::config::ApiConfig;
use crate::error::FetchResult;
use crate::models::{Character, CharacterPage};
use super::fetch_text;

/// Fetch the default page of characters, in API order
pub async fn list_characters(config: &ApiConfig) -> FetchResult<Vec<Character>> {
    let body = fetch_text(&config.list_url()).await?;
    let characters = decode_character_page(&body)?;
    Ok(config.limit(characters))
}

/// Fetch one character by id
pub async fn get_character(config: &ApiConfig, id: u32) -> FetchResult<Character> {
    let body = fetch_text(&config.character_url(id)).await?;
    decode_character(&body)
}

pub fn decode_character_page(body: &str) -> FetchResult<Vec<Character>> {
    let page: CharacterPage = serde_json::from_str(body)?;
    Ok(page.results)
}

pub fn decode_character(body: &str) -> FetchResult<Character> {
    Ok(serde_json::from_str(body)?)
}
