use arcadia_core::{
    FilterState, Game, Genre, GenreId, Platform, PlatformId, PriceRange, SortKey, visible_games,
};
use log::warn;

use crate::{ServiceResult, gateway::ArcStoreGateway};

/// Owns the catalog view's filter state and base set, and decides the
/// fetch strategy: a non-empty search delegates to the server-side
/// keyword search, everything else filters the full list client-side.
pub struct CatalogController {
    gateway: ArcStoreGateway,
    filter: FilterState,
    games: Vec<Game>,
    last_error: Option<String>,
}

impl CatalogController {
    pub fn new(gateway: ArcStoreGateway) -> Self {
        Self {
            gateway,
            filter: FilterState::new(),
            games: Vec::new(),
            last_error: None,
        }
    }

    /// Seeds `search` and `genre` from a shared link's query string, so
    /// the same filtered view is reproduced on load.
    pub fn seed_from_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "search" => self.filter.search = value.replace('+', " "),
                "genre" => self.filter.genre = value.parse::<GenreId>().ok(),
                _ => {}
            }
        }
    }

    /// The navigable query string for the current view; only search and
    /// genre travel in the URL.
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.filter.search.is_empty() {
            parts.push(format!("search={}", self.filter.search.replace(' ', "+")));
        }
        if let Some(genre) = self.filter.genre {
            parts.push(format!("genre={}", genre));
        }
        parts.join("&")
    }

    pub async fn refresh(&mut self) -> ServiceResult<()> {
        let fetched = if self.filter.search.is_empty() {
            self.gateway.list_games().await
        } else {
            self.gateway.search_games(&self.filter.search).await
        };
        match fetched {
            Ok(games) => {
                self.games = games;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("catalog fetch failed: {}", err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-issues the same fetch that last failed.
    pub async fn retry(&mut self) -> ServiceResult<()> {
        self.refresh().await
    }

    pub fn visible(&self) -> Vec<Game> {
        visible_games(&self.games, &self.filter)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_genre(&mut self, genre: Option<GenreId>) {
        self.filter.genre = genre;
    }

    pub fn set_platform(&mut self, platform: Option<PlatformId>) {
        self.filter.platform = platform;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.filter.sort = sort;
    }

    pub fn set_price_bounds(&mut self, min: u32, max: u32) {
        self.filter.price = PriceRange::new(min, max);
    }

    pub fn price_range_mut(&mut self) -> &mut PriceRange {
        &mut self.filter.price
    }

    /// Changing the search text changes the fetch strategy, so it
    /// triggers a refresh; the other filter dimensions recompute locally.
    pub async fn submit_search(&mut self, text: &str) -> ServiceResult<()> {
        self.filter.search = text.trim().to_string();
        self.refresh().await
    }

    /// Genres and platforms are fetched together; one failure fails the
    /// pair.
    pub async fn load_dimensions(&self) -> ServiceResult<(Vec<Genre>, Vec<Platform>)> {
        tokio::try_join!(self.gateway.list_genres(), self.gateway.list_platforms())
    }
}
