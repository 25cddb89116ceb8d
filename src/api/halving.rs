use actix_web::{HttpResponse, Responder, web};
use chrono::SecondsFormat;
use log::warn;

use super::models::{AppState, ErrorResponse, HalvingDateResponse};

/// Estimated date of the next halving, as JSON. Served at `/` and
/// `/btc-halving-date`.
pub async fn halving_date(state: web::Data<AppState>) -> impl Responder {
    match state.estimator.estimate().await {
        Ok(est) => HttpResponse::Ok().json(HalvingDateResponse {
            halving_date: est.next_halving.to_rfc3339_opts(SecondsFormat::Secs, true),
        }),
        Err(err) => {
            warn!("halving estimation failed: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::estimation_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::api::models::AppState;
    use crate::chain::BlockchairClient;
    use crate::halving::HalvingEstimator;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    /// A provider nobody listens on: the estimate must surface as a
    /// server error, never as a fabricated date.
    #[actix_web::test]
    async fn unreachable_provider_yields_error_status() {
        let state = web::Data::new(AppState {
            estimator: HalvingEstimator::new(BlockchairClient::new(
                "http://127.0.0.1:1/bitcoin/blocks".to_string(),
            )),
        });
        let app =
            test::init_service(App::new().app_data(state).configure(api::init_routes)).await;

        for uri in ["/", "/btc-halving-date"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        }
    }
}
