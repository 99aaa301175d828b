use crate::{AppConfig, models::PageKind};
use axum::response::Html;
use maud::{DOCTYPE, Markup, html};

mod login;
mod signup;

pub use login::Login;
pub use signup::Signup;

/// Page
///
/// A page component the shell can mount on a route. Pages take no inputs of
/// their own; the shared layout supplies everything host-specific.
pub trait Page: Send + Sync {
    /// Short name shown first in the document title.
    fn title(&self) -> &'static str;

    /// The page body, placed inside the shared layout.
    fn content(&self) -> Markup;
}

impl PageKind {
    pub fn page(self) -> &'static dyn Page {
        match self {
            PageKind::Login => &Login,
            PageKind::Signup => &Signup,
        }
    }
}

/// render
///
/// Wraps a page in the shared HTML document. Spliced values, including the
/// configured app title, are escaped by maud.
pub fn render(page: &dyn Page, config: &AppConfig) -> Html<String> {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title()) " · " (config.app_title) }
            }
            body {
                header {
                    a href="/" { (config.app_title) }
                }
                (page.content())
            }
        }
    };
    Html(markup.into_string())
}
