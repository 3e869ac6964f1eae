pub mod forgot_password;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;

use forgot_password::ForgotPassword;
use login::Login;
use not_found::NotFound;

/// Application routes. The `/auth` nest is the sign-in stack; its initial
/// screen is `Login`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[nest("/auth")]
        #[route("/login")]
        Login {},
        #[route("/forgot-password")]
        ForgotPassword {},
    #[end_nest]
    #[redirect("/", || Route::Login {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
