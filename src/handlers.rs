use crate::{
    AppConfig,
    models::{Route, RouteAction},
    pages,
};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

/// serve_route
///
/// Carries out the action of a matched route.
///
/// * `Render` returns the page document with `200 OK`.
/// * `Redirect` answers `303 See Other` with a `Location` header. The browser
///   follows it without keeping the original URL in its history, which gives
///   the replace-mode redirect. The query string of the original request is
///   not forwarded.
pub async fn serve_route(route: &'static Route, State(config): State<AppConfig>) -> Response {
    match route.action {
        RouteAction::Redirect { to } => {
            tracing::debug!(path = route.path, to, "redirecting");
            Redirect::to(to).into_response()
        }
        RouteAction::Render { page } => {
            tracing::debug!(path = route.path, ?page, "rendering page");
            pages::render(page.page(), &config).into_response()
        }
    }
}
