use std::collections::HashMap;

use crate::{Game, GameId, Order};

/// Highest-rated games, unrated ones excluded. Ties keep fetch order.
pub fn top_rated(games: &[Game], count: usize) -> Vec<Game> {
    let mut rated: Vec<Game> = games.iter().filter(|g| g.is_rated()).cloned().collect();
    rated.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rated.truncate(count);
    rated
}

/// Positional fallback: the front of the catalog as fetched.
pub fn featured_head(games: &[Game], count: usize) -> Vec<Game> {
    games.iter().take(count).cloned().collect()
}

/// Most-purchased games first, tallied over all orders. Ties keep catalog
/// order; when fewer than `count` distinct games have been purchased the
/// remainder is padded with the rest of the catalog in order.
pub fn featured_by_purchases(games: &[Game], orders: &[Order], count: usize) -> Vec<Game> {
    let mut purchases: HashMap<GameId, usize> = HashMap::new();
    for order in orders {
        *purchases.entry(order.game_id).or_insert(0) += 1;
    }

    let mut featured: Vec<Game> = games
        .iter()
        .filter(|g| purchases.contains_key(&g.id))
        .cloned()
        .collect();
    featured.sort_by_key(|g| std::cmp::Reverse(purchases[&g.id]));
    featured.truncate(count);

    if featured.len() < count {
        for game in games {
            if featured.len() == count {
                break;
            }
            if !featured.iter().any(|g| g.id == game.id) {
                featured.push(game.clone());
            }
        }
    }
    featured
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(id: u32, rating: f64) -> Game {
        Game {
            id,
            title: format!("Game {}", id),
            description: String::new(),
            price: 10.0,
            rating,
            release_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            genre_id: 1,
            platform_id: 1,
        }
    }

    fn order(id: u32, game_id: u32) -> Order {
        Order {
            id,
            user_id: 1,
            game_id,
            game_price: 10.0,
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_top_rated_excludes_unrated() {
        let games = vec![game(1, 0.0), game(2, 4.0), game(3, 5.0), game(4, 0.0)];
        let top = top_rated(&games, 3);
        let ids: Vec<u32> = top.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_top_rated_ties_keep_fetch_order() {
        let games = vec![game(1, 4.0), game(2, 4.0), game(3, 5.0)];
        let ids: Vec<u32> = top_rated(&games, 3).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_featured_by_purchases_orders_by_count_and_pads() {
        let games = vec![game(1, 0.0), game(2, 0.0), game(3, 0.0)];
        let orders = vec![order(10, 1), order(11, 1), order(12, 2)];
        let featured = featured_by_purchases(&games, &orders, 3);
        let ids: Vec<u32> = featured.iter().map(|g| g.id).collect();
        assert_eq!(ids[0], 1);
        assert_eq!(ids[1], 2);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[2], 3);
    }

    #[test]
    fn test_featured_by_purchases_without_orders_degrades_to_head() {
        let games = vec![game(1, 0.0), game(2, 0.0), game(3, 0.0)];
        let featured = featured_by_purchases(&games, &[], 2);
        assert_eq!(featured, featured_head(&games, 2));
    }

    #[test]
    fn test_featured_head_respects_count() {
        let games = vec![game(1, 0.0), game(2, 0.0)];
        assert_eq!(featured_head(&games, 4).len(), 2);
        assert_eq!(featured_head(&games, 1).len(), 1);
    }
}
