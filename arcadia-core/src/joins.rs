use std::collections::HashMap;

use crate::{Game, GameId, LibraryEntry, Order, Review};

/// Catalog lookup used to attach display titles to records that reference
/// games by id. A reference that does not resolve gets the placeholder
/// label `#<id>` instead of being dropped.
pub struct GameIndex<'a> {
    by_id: HashMap<GameId, &'a Game>,
}

impl<'a> GameIndex<'a> {
    pub fn new(games: &'a [Game]) -> Self {
        Self {
            by_id: games.iter().map(|game| (game.id, game)).collect(),
        }
    }

    pub fn get(&self, id: GameId) -> Option<&'a Game> {
        self.by_id.get(&id).copied()
    }

    pub fn display_title(&self, id: GameId) -> String {
        match self.by_id.get(&id) {
            Some(game) => game.title.clone(),
            None => format!("#{}", id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderView {
    pub order: Order,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryView {
    pub entry: LibraryEntry,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewView {
    pub review: Review,
    pub title: String,
}

pub fn order_views(index: &GameIndex, orders: &[Order]) -> Vec<OrderView> {
    orders
        .iter()
        .map(|order| OrderView {
            title: index.display_title(order.game_id),
            order: order.clone(),
        })
        .collect()
}

pub fn library_views(index: &GameIndex, entries: &[LibraryEntry]) -> Vec<LibraryView> {
    entries
        .iter()
        .map(|entry| LibraryView {
            title: index.display_title(entry.game_id),
            entry: entry.clone(),
        })
        .collect()
}

pub fn review_views(index: &GameIndex, reviews: &[Review]) -> Vec<ReviewView> {
    reviews
        .iter()
        .map(|review| ReviewView {
            title: index.display_title(review.game_id),
            review: review.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(id: u32, title: &str) -> Game {
        Game {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 10.0,
            rating: 0.0,
            release_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            genre_id: 1,
            platform_id: 1,
        }
    }

    #[test]
    fn test_display_title_resolves_or_placeholders() {
        let games = vec![game(1, "Starfall"), game(2, "Deep Mines")];
        let index = GameIndex::new(&games);
        assert_eq!(index.display_title(2), "Deep Mines");
        assert_eq!(index.display_title(999), "#999");
    }

    #[test]
    fn test_order_join_keeps_unresolvable_rows() {
        let games = vec![game(1, "Starfall")];
        let index = GameIndex::new(&games);
        let orders = vec![
            Order {
                id: 1,
                user_id: 7,
                game_id: 1,
                game_price: 10.0,
                purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            },
            Order {
                id: 2,
                user_id: 7,
                game_id: 999,
                game_price: 20.0,
                purchase_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            },
        ];
        let views = order_views(&index, &orders);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].title, "Starfall");
        assert_eq!(views[1].title, "#999");
    }

    #[test]
    fn test_library_and_review_joins() {
        let games = vec![game(3, "Harvest Sky")];
        let index = GameIndex::new(&games);

        let entries = vec![LibraryEntry {
            user_id: 7,
            game_id: 3,
        }];
        assert_eq!(library_views(&index, &entries)[0].title, "Harvest Sky");

        let reviews = vec![Review {
            id: 1,
            user_id: 7,
            game_id: 42,
            rating: 4,
            comment: "solid".to_string(),
        }];
        assert_eq!(review_views(&index, &reviews)[0].title, "#42");
    }
}
