use std::sync::Arc;

use crate::{
    account::{AccountController, SessionStore},
    cart::{CartController, CartStore},
    catalog::CatalogController,
    gateway::ArcStoreGateway,
    home::HomeController,
    profile::ProfileController,
};

/// Everything the views share: the gateway, the two observable state
/// containers, and the shared controllers. Created once at startup and
/// passed by reference; no process-wide mutable globals.
#[derive(Clone)]
pub struct AppState {
    pub gateway: ArcStoreGateway,
    pub cart: Arc<CartStore>,
    pub session: Arc<SessionStore>,

    pub account: Arc<AccountController>,
    pub cart_orders: Arc<CartController>,
    pub profile: Arc<ProfileController>,
    pub home: Arc<HomeController>,
}

impl AppState {
    /// Each catalog view owns its own filter state, so controllers are
    /// minted per view rather than shared.
    pub fn new_catalog(&self) -> CatalogController {
        CatalogController::new(self.gateway.clone())
    }
}

pub fn construct_app(gateway: ArcStoreGateway) -> AppState {
    let cart = Arc::new(CartStore::new());
    let session = Arc::new(SessionStore::new(None));

    let account = Arc::new(AccountController::new(gateway.clone(), session.clone()));
    let cart_orders = Arc::new(CartController::new(gateway.clone(), cart.clone()));
    let profile = Arc::new(ProfileController::new(gateway.clone()));
    let home = Arc::new(HomeController::new(gateway.clone()));

    AppState {
        gateway,
        cart,
        session,
        account,
        cart_orders,
        profile,
        home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockStoreGateway;

    #[test]
    fn test_construct_app_shares_the_stores() {
        let gateway: ArcStoreGateway = Arc::new(Box::new(MockStoreGateway::default()));
        let app = construct_app(gateway);

        app.cart.add(3);
        assert!(app.cart.contains(3));
        assert!(app.session.get().is_none());

        let catalog = app.new_catalog();
        assert!(catalog.filter().search.is_empty());
    }
}
