use arcadia_core::{
    GameId, User, UserId,
    joins::{GameIndex, LibraryView, OrderView, ReviewView, library_views, order_views, review_views},
};

use crate::{ServiceError, ServiceResult, gateway::ArcStoreGateway};

/// Display-ready profile page: the user's orders, library, and reviews,
/// each joined against the catalog for a title. Records whose game no
/// longer resolves keep their row with a `#<id>` label.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub user: User,
    pub orders: Vec<OrderView>,
    pub library: Vec<LibraryView>,
    pub reviews: Vec<ReviewView>,
}

pub struct ProfileController {
    gateway: ArcStoreGateway,
}

impl ProfileController {
    pub fn new(gateway: ArcStoreGateway) -> Self {
        Self { gateway }
    }

    /// All five reads are issued together and awaited jointly; the page
    /// renders only once everything resolved, and any failure fails the
    /// whole batch.
    pub async fn load(&self, user_id: UserId) -> ServiceResult<Profile> {
        let (user, games, orders, library, reviews) = tokio::try_join!(
            self.gateway.get_user(user_id),
            self.gateway.list_games(),
            self.gateway.list_user_orders(user_id),
            self.gateway.get_library(user_id),
            self.gateway.list_reviews(),
        )?;

        let index = GameIndex::new(&games);
        let own_reviews: Vec<_> = reviews
            .into_iter()
            .filter(|review| review.user_id == user_id)
            .collect();

        Ok(Profile {
            user,
            orders: order_views(&index, &orders),
            library: library_views(&index, &library),
            reviews: review_views(&index, &own_reviews),
        })
    }

    /// Pass-through review creation; the backend owns real validation.
    pub async fn submit_review(
        &self,
        user: UserId,
        game: GameId,
        rating: u8,
        comment: &str,
    ) -> ServiceResult<()> {
        if !(1..=5).contains(&rating) {
            return ServiceError::bad_request("Rating must be between 1 and 5");
        }
        if comment.trim().is_empty() {
            return ServiceError::bad_request("Review comment must not be empty");
        }
        self.gateway
            .create_review(user, game, rating, comment.trim())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::gateway::MockStoreGateway;
    use arcadia_core::{Game, LibraryEntry, Order, Review};
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

    fn order(id: u32, user: u32, game: u32) -> Order {
        Order {
            id,
            user_id: user,
            game_id: game,
            game_price: 10.0,
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    fn seeded_mock() -> MockStoreGateway {
        let mock = MockStoreGateway::default();
        *mock.users.lock().unwrap() = vec![User {
            id: 7,
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
        }];
        *mock.games.lock().unwrap() = vec![game(1, "Starfall")];
        *mock.orders.lock().unwrap() = vec![order(1, 7, 1), order(2, 7, 999), order(3, 8, 1)];
        *mock.library.lock().unwrap() = vec![
            LibraryEntry {
                user_id: 7,
                game_id: 1,
            },
            LibraryEntry {
                user_id: 8,
                game_id: 1,
            },
        ];
        *mock.reviews.lock().unwrap() = vec![
            Review {
                id: 1,
                user_id: 7,
                game_id: 1,
                rating: 5,
                comment: "great".to_string(),
            },
            Review {
                id: 2,
                user_id: 8,
                game_id: 1,
                rating: 2,
                comment: "meh".to_string(),
            },
        ];
        mock
    }

    #[tokio::test]
    async fn test_load_joins_collections_with_placeholders() {
        let mock = seeded_mock();
        let profile = ProfileController::new(Arc::new(Box::new(mock)))
            .load(7)
            .await
            .unwrap();

        assert_eq!(profile.user.name, "ada");
        assert_eq!(profile.orders.len(), 2);
        assert_eq!(profile.orders[0].title, "Starfall");
        assert_eq!(profile.orders[1].title, "#999");
        assert_eq!(profile.library.len(), 1);
        assert_eq!(profile.reviews.len(), 1);
        assert_eq!(profile.reviews[0].review.user_id, 7);
    }

    #[tokio::test]
    async fn test_load_fails_as_a_batch() {
        let mock = seeded_mock();
        mock.fail("get_library");
        let controller = ProfileController::new(Arc::new(Box::new(mock)));
        assert!(controller.load(7).await.is_err());
    }

    #[tokio::test]
    async fn test_submit_review_checks_inputs() {
        let mock = seeded_mock();
        let controller = ProfileController::new(Arc::new(Box::new(mock.clone())));

        assert!(controller.submit_review(7, 1, 0, "bad").await.is_err());
        assert!(controller.submit_review(7, 1, 6, "bad").await.is_err());
        assert!(controller.submit_review(7, 1, 4, "  ").await.is_err());

        controller.submit_review(7, 1, 4, " solid ").await.unwrap();
        let reviews = mock.reviews.lock().unwrap();
        let created = reviews.last().unwrap();
        assert_eq!(created.comment, "solid");
        assert_eq!(created.rating, 4);
    }
}
