use crate::{
    AppConfig, AppState, handlers,
    models::{PageKind, Route, RouteAction},
};
use axum::{Router, extract::State, routing::get};

/// The shell's route table.
///
/// Every path is a literal; there are no wildcard or parameterized segments,
/// so at most one entry matches any given path.
pub const ROUTES: &[Route] = &[
    // GET /
    // Root has no page of its own and sends the visitor to the login screen.
    Route {
        path: "/",
        action: RouteAction::Redirect { to: "/login" },
    },
    // GET /login
    Route {
        path: "/login",
        action: RouteAction::Render {
            page: PageKind::Login,
        },
    },
    // GET /signup
    Route {
        path: "/signup",
        action: RouteAction::Render {
            page: PageKind::Signup,
        },
    },
];

/// resolve
///
/// Matches a request path against `ROUTES`. Matching is exact and
/// case-sensitive: `/login2`, `/login/` and `/Login` all resolve to `None`.
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// shell_routes
///
/// Registers one GET route per table entry. No fallback is installed, so a
/// path outside the table gets the router's default empty 404.
pub fn shell_routes() -> Router<AppState> {
    ROUTES.iter().fold(Router::new(), |router, route: &'static Route| {
        router.route(
            route.path,
            get(move |state: State<AppConfig>| handlers::serve_route(route, state)),
        )
    })
}
