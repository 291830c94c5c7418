use crate::{Game, GenreId, PlatformId, price_range::PriceRange};

/// The five catalog sort orders. Anything else on the wire means "leave
/// the list in fetch order".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortKey {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
        }
    }
}

/// Everything the catalog view filters and orders by. Owned by the view
/// for the duration of a navigation, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub genre: Option<GenreId>,
    pub platform: Option<PlatformId>,
    pub price: PriceRange,
    pub sort: Option<SortKey>,
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            genre: None,
            platform: None,
            price: PriceRange::full(),
            sort: None,
            search: String::new(),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the active filters and the sort order to a base set of games,
/// returning a fresh sequence. Free-text search is not applied here: a
/// non-empty `filter.search` means the caller fetched the base set from
/// the server-side keyword search already.
pub fn visible_games(games: &[Game], filter: &FilterState) -> Vec<Game> {
    let mut result: Vec<Game> = games
        .iter()
        .filter(|game| filter.genre.is_none_or(|id| game.genre_id == id))
        .filter(|game| filter.platform.is_none_or(|id| game.platform_id == id))
        .filter(|game| filter.price.contains(game.price))
        .cloned()
        .collect();
    if let Some(sort) = filter.sort {
        sort_games(&mut result, sort);
    }
    result
}

// `sort_by` is stable, so equal keys keep their fetch order.
fn sort_games(games: &mut [Game], sort: SortKey) {
    match sort {
        SortKey::Newest => games.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        SortKey::Oldest => games.sort_by(|a, b| a.release_date.cmp(&b.release_date)),
        SortKey::PriceAsc => games.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => games.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => games.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
