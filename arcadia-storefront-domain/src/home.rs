use arcadia_core::{
    Game,
    featured::{featured_by_purchases, featured_head, top_rated},
};
use log::warn;

use crate::{ServiceResult, gateway::ArcStoreGateway};

pub const FEATURED_COUNT: usize = 4;
pub const TOP_RATED_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct HomePage {
    pub featured: Vec<Game>,
    pub top_rated: Vec<Game>,
}

pub struct HomeController {
    gateway: ArcStoreGateway,
}

impl HomeController {
    pub fn new(gateway: ArcStoreGateway) -> Self {
        Self { gateway }
    }

    /// The featured row prefers the purchase-count derivation; if the
    /// orders fetch fails only that derivation degrades (to the catalog
    /// head) instead of failing the page.
    pub async fn load(&self) -> ServiceResult<HomePage> {
        let games = self.gateway.list_games().await?;
        let featured = match self.gateway.list_orders().await {
            Ok(orders) => featured_by_purchases(&games, &orders, FEATURED_COUNT),
            Err(err) => {
                warn!("order tally unavailable, using catalog head: {}", err);
                featured_head(&games, FEATURED_COUNT)
            }
        };
        Ok(HomePage {
            featured,
            top_rated: top_rated(&games, TOP_RATED_COUNT),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::gateway::MockStoreGateway;
    use arcadia_core::Order;
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

    fn order(id: u32, game: u32) -> Order {
        Order {
            id,
            user_id: 1,
            game_id: game,
            game_price: 10.0,
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_derives_featured_and_top_rated() {
        let mock = MockStoreGateway::default();
        *mock.games.lock().unwrap() = vec![game(1, 2.0), game(2, 4.5), game(3, 0.0)];
        *mock.orders.lock().unwrap() = vec![order(1, 3), order(2, 3), order(3, 1)];
        let page = HomeController::new(Arc::new(Box::new(mock)))
            .load()
            .await
            .unwrap();

        let featured: Vec<u32> = page.featured.iter().map(|g| g.id).collect();
        assert_eq!(featured, vec![3, 1, 2]);

        let top: Vec<u32> = page.top_rated.iter().map(|g| g.id).collect();
        assert_eq!(top, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_orders_failure_degrades_featured_only() {
        let mock = MockStoreGateway::default();
        *mock.games.lock().unwrap() = vec![game(1, 2.0), game(2, 4.5)];
        mock.fail("list_orders");
        let page = HomeController::new(Arc::new(Box::new(mock)))
            .load()
            .await
            .unwrap();

        let featured: Vec<u32> = page.featured.iter().map(|g| g.id).collect();
        assert_eq!(featured, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_games_failure_fails_the_page() {
        let mock = MockStoreGateway::default();
        mock.fail("list_games");
        let controller = HomeController::new(Arc::new(Box::new(mock)));
        assert!(controller.load().await.is_err());
    }
}
