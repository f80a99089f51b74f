//! API Configuration
//!
//! Compiled-in settings, provided to components via the Leptos Context API.

/// Character endpoint of the public Rick and Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// List endpoint; single characters live at `{base_url}/{id}`
    pub base_url: String,
    /// Keep only the first N characters of the initial load (None = all)
    pub display_limit: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            display_limit: None,
        }
    }
}

impl ApiConfig {
    pub fn list_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn character_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    /// Apply `display_limit` to a freshly loaded list
    pub fn limit<T>(&self, mut list: Vec<T>) -> Vec<T> {
        if let Some(max) = self.display_limit {
            list.truncate(max);
        }
        list
    }
}
