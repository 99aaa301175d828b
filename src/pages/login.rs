use super::Page;
use maud::{Markup, html};

/// Login page placeholder. Holds the `/login` slot until the sign-in form lands.
pub struct Login;

impl Page for Login {
    fn title(&self) -> &'static str {
        "Login"
    }

    fn content(&self) -> Markup {
        html! {
            main data-page="login" {
                h1 { "Login" }
                p {
                    "Don't have an account? "
                    a href="/signup" { "Sign up" }
                }
            }
        }
    }
}
