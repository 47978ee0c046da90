pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /employee        create
/// GET    /employee        list
/// GET    /employee/{id}   get_by_id
/// PUT    /employee/{id}   update
/// DELETE /employee/{id}   delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let employee_routes = Router::new()
        .route(
            "/",
            get(handlers::employee::list).post(handlers::employee::create),
        )
        .route(
            "/{id}",
            get(handlers::employee::get_by_id)
                .put(handlers::employee::update)
                .delete(handlers::employee::delete),
        );

    Router::new().nest("/employee", employee_routes)
}
