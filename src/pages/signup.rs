use super::Page;
use maud::{Markup, html};

/// Signup page placeholder.
pub struct Signup;

impl Page for Signup {
    fn title(&self) -> &'static str {
        "Sign up"
    }

    fn content(&self) -> Markup {
        html! {
            main data-page="signup" {
                h1 { "Sign up" }
                p {
                    "Already registered? "
                    a href="/login" { "Log in" }
                }
            }
        }
    }
}
