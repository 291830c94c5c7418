use std::sync::Arc;

use arcadia_api_client::ApiClient;
use arcadia_core::SortKey;
use arcadia_storefront_domain::{app::construct_app, gateway::ArcStoreGateway};

/// Scripted storefront session against a live backend: sign in, browse,
/// filter, fill the cart, check out, review, and read the profile back.
#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("STORE_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let gateway: ArcStoreGateway = Arc::new(Box::new(ApiClient::new(&base_url)));
    let app = construct_app(gateway);

    let session = match app.account.login("e2euser", "e2epassword").await {
        Ok(session) => session,
        Err(_) => app
            .account
            .register("e2euser", "e2euser@example.com", "e2epassword")
            .await
            .expect("Failed to register test user"),
    };
    println!("signed in as {} (user {})", session.user.name, session.user.id);

    let home = app.home.load().await.expect("Failed to load home page");
    println!("featured: {:?}", home.featured.iter().map(|g| &g.title).collect::<Vec<_>>());
    println!("top rated: {:?}", home.top_rated.iter().map(|g| &g.title).collect::<Vec<_>>());

    let mut catalog = app.new_catalog();
    catalog.refresh().await.expect("Failed to load catalog");
    catalog.set_sort(Some(SortKey::PriceAsc));
    catalog.set_price_bounds(0, 100);
    let visible = catalog.visible();
    println!("{} games under 100", visible.len());

    let Some(cheapest) = visible.first() else {
        println!("nothing to buy, stopping here");
        return;
    };
    app.cart.add(cheapest.id);
    let outcome = app
        .cart_orders
        .checkout(session.user.id)
        .await
        .expect("Checkout failed");
    for receipt in &outcome.placed {
        println!("{} ({} at {:.2})", receipt.message, receipt.game_title, receipt.game_price);
    }
    assert!(outcome.failed.is_empty(), "some cart lines were rejected");

    app.profile
        .submit_review(session.user.id, cheapest.id, 5, "bought it through the e2e run")
        .await
        .expect("Failed to submit review");

    let profile = app
        .profile
        .load(session.user.id)
        .await
        .expect("Failed to load profile");
    println!(
        "profile: {} orders, {} library entries, {} reviews",
        profile.orders.len(),
        profile.library.len(),
        profile.reviews.len()
    );
}
