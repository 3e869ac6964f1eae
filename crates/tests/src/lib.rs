#[cfg(test)]
mod common;

#[cfg(test)]
mod storefront_client_tests;

#[cfg(test)]
mod forgot_password_rest_tests;

#[cfg(test)]
mod health_tests;
