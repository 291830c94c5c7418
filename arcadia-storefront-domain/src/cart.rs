use arcadia_core::{Game, GameId, UserId};
use log::info;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    ServiceError, ServiceResult,
    gateway::{ArcStoreGateway, OrderReceipt},
    state::{Store, SubscriberId},
};

/// Observable cart contents: a deduplicated list of game ids, kept in the
/// order they were added. Lives for the duration of a run only.
pub struct CartStore {
    inner: Store<Vec<GameId>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            inner: Store::new(Vec::new()),
        }
    }

    pub fn items(&self) -> Vec<GameId> {
        self.inner.get()
    }

    pub fn len(&self) -> usize {
        self.inner.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get().is_empty()
    }

    pub fn contains(&self, game: GameId) -> bool {
        self.inner.get().contains(&game)
    }

    /// Returns false when the game is already in the cart.
    pub fn add(&self, game: GameId) -> bool {
        let mut added = false;
        self.inner.update(|items| {
            if !items.contains(&game) {
                items.push(game);
                added = true;
            }
        });
        added
    }

    pub fn remove(&self, game: GameId) -> bool {
        let mut removed = false;
        self.inner.update(|items| {
            let before = items.len();
            items.retain(|id| *id != game);
            removed = items.len() != before;
        });
        removed
    }

    pub fn clear(&self) {
        self.inner.set(Vec::new());
    }

    /// Cart total priced from the current catalog snapshot; ids that no
    /// longer resolve contribute nothing.
    pub fn total(&self, games: &[Game]) -> f64 {
        self.inner
            .get()
            .iter()
            .filter_map(|id| games.iter().find(|game| game.id == *id))
            .map(|game| game.price)
            .sum()
    }

    pub fn subscribe(&self) -> (SubscriberId, UnboundedReceiver<Vec<GameId>>) {
        self.inner.subscribe()
    }

    pub fn unsubscribe(&self, id: &SubscriberId) {
        self.inner.unsubscribe(id);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutOutcome {
    pub placed: Vec<OrderReceipt>,
    pub failed: Vec<(GameId, ServiceError)>,
}

pub struct CartController {
    gateway: ArcStoreGateway,
    cart: std::sync::Arc<CartStore>,
}

impl CartController {
    pub fn new(gateway: ArcStoreGateway, cart: std::sync::Arc<CartStore>) -> Self {
        Self { gateway, cart }
    }

    /// One order per cart line. Lines that the backend accepted leave the
    /// cart; rejected lines stay so the user can retry them.
    pub async fn checkout(&self, user: UserId) -> ServiceResult<CheckoutOutcome> {
        let items = self.cart.items();
        if items.is_empty() {
            return ServiceError::not_possible("Cart is empty");
        }

        let mut placed = Vec::new();
        let mut failed = Vec::new();
        for game in items {
            match self.gateway.create_order(user, game).await {
                Ok(receipt) => {
                    info!("order placed: {}", receipt.game_title);
                    self.cart.remove(game);
                    placed.push(receipt);
                }
                Err(err) => failed.push((game, err)),
            }
        }
        Ok(CheckoutOutcome { placed, failed })
    }

    pub async fn cancel_order(&self, user: UserId, game: GameId) -> ServiceResult<()> {
        self.gateway.delete_order(user, game).await
    }
}
