use serde::Serialize;
use ts_rs::TS;

// --- Route Table Schemas (exported to the frontend as TypeScript) ---

/// PageKind
///
/// Identifies one of the placeholder pages a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PageKind {
    Login,
    Signup,
}

/// RouteAction
///
/// What the shell does once a path has matched.
///
/// A `Redirect` always replaces the current history entry: it is issued as an
/// HTTP redirect, and browsers never keep the redirected-from URL in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RouteAction {
    Redirect {
        #[ts(type = "string")]
        to: &'static str,
    },
    Render { page: PageKind },
}

/// Route
///
/// A static mapping from a literal URL path to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Route {
    // Literal path; matched exactly and case-sensitively.
    #[ts(type = "string")]
    pub path: &'static str,
    pub action: RouteAction,
}
