pub mod content_service;
pub mod generator;
pub mod http_helpers;
pub mod wikipedia_service;
