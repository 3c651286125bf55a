pub mod editorial_repository;
