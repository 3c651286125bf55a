pub mod editorial_books_service;
pub mod service;
