use arcadia_core::{Game, GameId, Genre, LibraryEntry, Order, Platform, Review, User, UserId};
use arcadia_storefront_domain::{
    ServiceError, ServiceResult,
    gateway::{AuthSession, OrderReceipt, StoreGateway},
};
use async_trait::async_trait;

use crate::{
    ApiClient, ApiError,
    wire::{
        AuthResponse, CreateOrderRequest, CreateReviewRequest, CreateUserRequest, LoginRequest,
        OrderCreatedResponse, RegisterRequest, UpdateUserRequest,
    },
};

fn backend_err(err: ApiError) -> ServiceError {
    ServiceError::Backend(err.to_string())
}

#[async_trait]
impl StoreGateway for ApiClient {
    async fn list_games(&self) -> ServiceResult<Vec<Game>> {
        self.get_json("/games/").await.map_err(backend_err)
    }

    async fn get_game(&self, id: GameId) -> ServiceResult<Game> {
        self.get_json(&format!("/games/{}", id))
            .await
            .map_err(backend_err)
    }

    async fn search_games(&self, keyword: &str) -> ServiceResult<Vec<Game>> {
        self.get_json(&format!("/games/search/{}", keyword))
            .await
            .map_err(backend_err)
    }

    async fn list_genres(&self) -> ServiceResult<Vec<Genre>> {
        self.get_json("/genres/").await.map_err(backend_err)
    }

    async fn list_platforms(&self) -> ServiceResult<Vec<Platform>> {
        self.get_json("/platforms/").await.map_err(backend_err)
    }

    async fn list_users(&self) -> ServiceResult<Vec<User>> {
        self.get_json("/users/").await.map_err(backend_err)
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.get_json(&format!("/users/{}", id))
            .await
            .map_err(backend_err)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<AuthSession> {
        let auth: AuthResponse = self
            .post_json(
                "/users/register",
                &RegisterRequest {
                    name,
                    email,
                    password,
                },
            )
            .await
            .map_err(backend_err)?;
        self.set_token(&auth.access_token);
        Ok(AuthSession {
            access_token: auth.access_token,
            token_type: auth.token_type,
        })
    }

    async fn login(&self, name: &str, password: &str) -> ServiceResult<AuthSession> {
        let auth: AuthResponse = self
            .post_json("/users/login", &LoginRequest { name, password })
            .await
            .map_err(backend_err)?;
        self.set_token(&auth.access_token);
        Ok(AuthSession {
            access_token: auth.access_token,
            token_type: auth.token_type,
        })
    }

    async fn create_user(&self, name: &str, email: &str, password: &str) -> ServiceResult<User> {
        self.post_json(
            "/users",
            &CreateUserRequest {
                name,
                email,
                password,
            },
        )
        .await
        .map_err(backend_err)
    }

    async fn get_library(&self, user: UserId) -> ServiceResult<Vec<LibraryEntry>> {
        self.get_json(&format!("/users/{}/library", user))
            .await
            .map_err(backend_err)
    }

    async fn update_user_email(&self, user: UserId, email: &str) -> ServiceResult<User> {
        self.put_json(&format!("/users/{}", user), &UpdateUserRequest { email })
            .await
            .map_err(backend_err)
    }

    async fn create_order(&self, user: UserId, game: GameId) -> ServiceResult<OrderReceipt> {
        let created: OrderCreatedResponse = self
            .post_json(
                "/orders",
                &CreateOrderRequest {
                    user_id: user,
                    game_id: game,
                },
            )
            .await
            .map_err(backend_err)?;
        Ok(OrderReceipt {
            message: created.message,
            game_title: created.game_title,
            game_price: created.game_price,
        })
    }

    async fn list_orders(&self) -> ServiceResult<Vec<Order>> {
        self.get_json("/orders/").await.map_err(backend_err)
    }

    async fn list_user_orders(&self, user: UserId) -> ServiceResult<Vec<Order>> {
        self.get_json(&format!("/orders/{}", user))
            .await
            .map_err(backend_err)
    }

    async fn delete_order(&self, user: UserId, game: GameId) -> ServiceResult<()> {
        self.delete(&format!("/orders/{}/{}", user, game))
            .await
            .map_err(backend_err)
    }

    async fn create_review(
        &self,
        user: UserId,
        game: GameId,
        rating: u8,
        comment: &str,
    ) -> ServiceResult<Review> {
        self.post_json(
            "/reviews",
            &CreateReviewRequest {
                user_id: user,
                game_id: game,
                rating,
                comment,
            },
        )
        .await
        .map_err(backend_err)
    }

    async fn reviews_for_game(&self, game: GameId) -> ServiceResult<Vec<Review>> {
        self.get_json(&format!("/reviews/game/{}", game))
            .await
            .map_err(backend_err)
    }

    async fn list_reviews(&self) -> ServiceResult<Vec<Review>> {
        self.get_json("/reviews/").await.map_err(backend_err)
    }
}
