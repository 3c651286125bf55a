pub mod prize_author_service;
pub mod service;
