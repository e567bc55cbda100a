pub mod echo;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /echo          GET   greeting message
///                POST  echo JSON body as data
/// ```
///
/// Every route here sits behind content negotiation (see [`crate::router`]).
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(echo::router())
}
