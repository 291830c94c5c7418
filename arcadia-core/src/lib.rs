use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod featured;
pub mod joins;
pub mod price_range;

pub use catalog::{FilterState, SortKey, visible_games};
pub use price_range::PriceRange;

pub type GameId = u32;
pub type GenreId = u32;
pub type PlatformId = u32;
pub type UserId = u32;
pub type OrderId = u32;
pub type ReviewId = u32;

/// A catalog entry as served by the backend. Read-only on this side;
/// `rating` is 0.0 for games that have not been rated yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub release_date: NaiveDate,
    pub genre_id: GenreId,
    pub platform_id: PlatformId,
}

impl Game {
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// `game_price` is the price at purchase time and is deliberately kept
/// separate from `Game::price`, which may change later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub game_id: GameId,
    pub game_price: f64,
    pub purchase_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub game_id: GameId,
    pub rating: u8,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub user_id: UserId,
    pub game_id: GameId,
}
