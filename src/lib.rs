pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod markup;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
pub mod test_utils;
