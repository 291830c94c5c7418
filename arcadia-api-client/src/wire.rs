use arcadia_core::{GameId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CreateUserRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct UpdateUserRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub game_id: GameId,
}

#[derive(Serialize)]
pub struct CreateReviewRequest<'a> {
    pub user_id: UserId,
    pub game_id: GameId,
    pub rating: u8,
    pub comment: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Deserialize, Debug)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub game_title: String,
    pub game_price: f64,
}

#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub detail: String,
}
