pub mod author_books_service;
pub mod service;
