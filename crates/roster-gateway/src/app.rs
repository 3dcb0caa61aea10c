use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    count_records_handler, create_record_handler, get_record_by_nickname_handler,
    get_record_handler, health_handler, search_records_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/pessoas",
                post(create_record_handler).get(search_records_handler),
            )
            .route("/pessoas/{id}", get(get_record_handler))
            .route(
                "/pessoas/apelido/{apelido}",
                get(get_record_by_nickname_handler),
            )
            .route("/contagem-pessoas", get(count_records_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
