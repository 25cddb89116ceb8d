mod api;
mod chain;
mod halving;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;

use api::AppState;
use chain::{BlockchairClient, DEFAULT_API_URL};
use halving::HalvingEstimator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let api_url = env::var("BLOCKS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    println!("₿ Starting halving API at http://{host}:{port}");

    let state = web::Data::new(AppState {
        estimator: HalvingEstimator::new(BlockchairClient::new(api_url)),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
