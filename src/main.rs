use std::sync::Arc;

use arcadia_api_client::ApiClient;
use arcadia_storefront_domain::{app::construct_app, gateway::ArcStoreGateway};
use log::info;

mod logs;
mod shell;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let base_url =
        std::env::var("STORE_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    info!("storefront starting against {}", base_url);

    let gateway: ArcStoreGateway = Arc::new(Box::new(ApiClient::new(&base_url)));
    let app = construct_app(gateway);

    shell::run(app).await;

    info!("storefront shut down");
}
