pub mod prize_repository_impl;

pub use prize_repository_impl::PrizeRepositoryImpl;
