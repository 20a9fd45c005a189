use crate::templates::{components::form_error, desktop_layout};
use maud::{html, Markup};

/// Sign-in and sign-up forms side by side. `error` is shown above both.
pub fn login_page(error: Option<&str>, email: &str) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            div class="container narrow" {
                h1 { "Sign in" }
                (form_error(error))

                section class="card" {
                    h3 { "Log in" }
                    form method="post" action="/login" {
                        label for="login-email" { "Email" }
                        input type="email" id="login-email" name="email" value=(email) autocomplete="email" required;
                        label for="login-password" { "Password" }
                        input type="password" id="login-password" name="password" autocomplete="current-password" required;
                        button type="submit" class="primary" { "Log in" }
                    }
                }

                section class="card" {
                    h3 { "Create an account" }
                    form method="post" action="/register" {
                        label for="reg-name" { "Name" }
                        input type="text" id="reg-name" name="name" autocomplete="name" required;
                        label for="reg-email" { "Email" }
                        input type="email" id="reg-email" name="email" autocomplete="email" required;
                        label for="reg-password" { "Password" }
                        input type="password" id="reg-password" name="password" autocomplete="new-password" minlength="8" required;
                        button type="submit" class="primary" { "Sign up" }
                    }
                }
            }
        },
    )
}
