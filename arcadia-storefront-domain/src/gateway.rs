use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use arcadia_core::{Game, GameId, Genre, LibraryEntry, Order, Platform, Review, User, UserId};
use async_trait::async_trait;

use crate::{ServiceError, ServiceResult};

pub type ArcStoreGateway = Arc<Box<dyn StoreGateway + Send + Sync + 'static>>;

/// What a successful register or login hands back.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
}

/// Order confirmation as returned by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderReceipt {
    pub message: String,
    pub game_title: String,
    pub game_price: f64,
}

/// One method per backend operation. Every call is a single fresh request;
/// nothing here retries or caches.
#[async_trait]
pub trait StoreGateway {
    async fn list_games(&self) -> ServiceResult<Vec<Game>>;
    async fn get_game(&self, id: GameId) -> ServiceResult<Game>;
    async fn search_games(&self, keyword: &str) -> ServiceResult<Vec<Game>>;
    async fn list_genres(&self) -> ServiceResult<Vec<Genre>>;
    async fn list_platforms(&self) -> ServiceResult<Vec<Platform>>;
    async fn list_users(&self) -> ServiceResult<Vec<User>>;
    async fn get_user(&self, id: UserId) -> ServiceResult<User>;
    async fn register(&self, name: &str, email: &str, password: &str)
    -> ServiceResult<AuthSession>;
    async fn login(&self, name: &str, password: &str) -> ServiceResult<AuthSession>;
    async fn create_user(&self, name: &str, email: &str, password: &str) -> ServiceResult<User>;
    async fn get_library(&self, user: UserId) -> ServiceResult<Vec<LibraryEntry>>;
    async fn update_user_email(&self, user: UserId, email: &str) -> ServiceResult<User>;
    async fn create_order(&self, user: UserId, game: GameId) -> ServiceResult<OrderReceipt>;
    async fn list_orders(&self) -> ServiceResult<Vec<Order>>;
    async fn list_user_orders(&self, user: UserId) -> ServiceResult<Vec<Order>>;
    async fn delete_order(&self, user: UserId, game: GameId) -> ServiceResult<()>;
    async fn create_review(
        &self,
        user: UserId,
        game: GameId,
        rating: u8,
        comment: &str,
    ) -> ServiceResult<Review>;
    async fn reviews_for_game(&self, game: GameId) -> ServiceResult<Vec<Review>>;
    async fn list_reviews(&self) -> ServiceResult<Vec<Review>>;
}

/// Canned in-memory gateway for controller tests: preload the collections,
/// inject per-method failures, and inspect the recorded call log.
#[derive(Clone, Default)]
pub struct MockStoreGateway {
    pub games: Arc<Mutex<Vec<Game>>>,
    pub search_results: Arc<Mutex<Vec<Game>>>,
    pub genres: Arc<Mutex<Vec<Genre>>>,
    pub platforms: Arc<Mutex<Vec<Platform>>>,
    pub users: Arc<Mutex<Vec<User>>>,
    pub orders: Arc<Mutex<Vec<Order>>>,
    pub library: Arc<Mutex<Vec<LibraryEntry>>>,
    pub reviews: Arc<Mutex<Vec<Review>>>,
    pub receipts: Arc<Mutex<Vec<OrderReceipt>>>,
    pub failing: Arc<Mutex<HashSet<&'static str>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[allow(unused)]
impl MockStoreGateway {
    pub fn fail(&self, method: &'static str) {
        self.failing.lock().unwrap().insert(method);
    }

    pub fn recover(&self, method: &'static str) {
        self.failing.lock().unwrap().remove(method);
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn visit(&self, method: &'static str) -> ServiceResult<()> {
        self.calls.lock().unwrap().push(method.to_string());
        if self.failing.lock().unwrap().contains(method) {
            return ServiceError::backend(format!("{} unavailable", method));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreGateway for MockStoreGateway {
    async fn list_games(&self) -> ServiceResult<Vec<Game>> {
        self.visit("list_games")?;
        Ok(self.games.lock().unwrap().clone())
    }

    async fn get_game(&self, id: GameId) -> ServiceResult<Game> {
        self.visit("get_game")?;
        match self.games.lock().unwrap().iter().find(|g| g.id == id) {
            Some(game) => Ok(game.clone()),
            None => ServiceError::not_found("Game not found"),
        }
    }

    async fn search_games(&self, _keyword: &str) -> ServiceResult<Vec<Game>> {
        self.visit("search_games")?;
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn list_genres(&self) -> ServiceResult<Vec<Genre>> {
        self.visit("list_genres")?;
        Ok(self.genres.lock().unwrap().clone())
    }

    async fn list_platforms(&self) -> ServiceResult<Vec<Platform>> {
        self.visit("list_platforms")?;
        Ok(self.platforms.lock().unwrap().clone())
    }

    async fn list_users(&self) -> ServiceResult<Vec<User>> {
        self.visit("list_users")?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.visit("get_user")?;
        match self.users.lock().unwrap().iter().find(|u| u.id == id) {
            Some(user) => Ok(user.clone()),
            None => ServiceError::not_found("User not found"),
        }
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> ServiceResult<AuthSession> {
        self.visit("register")?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        });
        Ok(AuthSession {
            access_token: format!("token-{}", name),
            token_type: "bearer".to_string(),
        })
    }

    async fn login(&self, name: &str, _password: &str) -> ServiceResult<AuthSession> {
        self.visit("login")?;
        Ok(AuthSession {
            access_token: format!("token-{}", name),
            token_type: "bearer".to_string(),
        })
    }

    async fn create_user(&self, name: &str, email: &str, _password: &str) -> ServiceResult<User> {
        self.visit("create_user")?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn get_library(&self, user: UserId) -> ServiceResult<Vec<LibraryEntry>> {
        self.visit("get_library")?;
        Ok(self
            .library
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user)
            .cloned()
            .collect())
    }

    async fn update_user_email(&self, user: UserId, email: &str) -> ServiceResult<User> {
        self.visit("update_user_email")?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user) {
            Some(entry) => {
                entry.email = email.to_string();
                Ok(entry.clone())
            }
            None => ServiceError::not_found("User not found"),
        }
    }

    async fn create_order(&self, user: UserId, game: GameId) -> ServiceResult<OrderReceipt> {
        self.visit("create_order")?;
        let games = self.games.lock().unwrap();
        let Some(entry) = games.iter().find(|g| g.id == game) else {
            return ServiceError::not_found("Game not found");
        };
        let receipt = OrderReceipt {
            message: format!("Order placed for user {}", user),
            game_title: entry.title.clone(),
            game_price: entry.price,
        };
        self.receipts.lock().unwrap().push(receipt.clone());
        Ok(receipt)
    }

    async fn list_orders(&self) -> ServiceResult<Vec<Order>> {
        self.visit("list_orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn list_user_orders(&self, user: UserId) -> ServiceResult<Vec<Order>> {
        self.visit("list_user_orders")?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user)
            .cloned()
            .collect())
    }

    async fn delete_order(&self, user: UserId, game: GameId) -> ServiceResult<()> {
        self.visit("delete_order")?;
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| !(o.user_id == user && o.game_id == game));
        if orders.len() == before {
            return ServiceError::not_found("Order not found");
        }
        Ok(())
    }

    async fn create_review(
        &self,
        user: UserId,
        game: GameId,
        rating: u8,
        comment: &str,
    ) -> ServiceResult<Review> {
        self.visit("create_review")?;
        let mut reviews = self.reviews.lock().unwrap();
        let review = Review {
            id: reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            user_id: user,
            game_id: game,
            rating,
            comment: comment.to_string(),
        };
        reviews.push(review.clone());
        Ok(review)
    }

    async fn reviews_for_game(&self, game: GameId) -> ServiceResult<Vec<Review>> {
        self.visit("reviews_for_game")?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.game_id == game)
            .cloned()
            .collect())
    }

    async fn list_reviews(&self) -> ServiceResult<Vec<Review>> {
        self.visit("list_reviews")?;
        Ok(self.reviews.lock().unwrap().clone())
    }
}
