mod halving;
mod health;
mod ical;
pub mod models;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.route("/", web::get().to(halving::halving_date))
        .route("/btc-halving-date", web::get().to(halving::halving_date))
        .route("/btc-halving-ical", web::get().to(ical::halving_calendar))
        .route("/ical", web::get().to(ical::halving_calendar))
        .service(health::health_check);
}
