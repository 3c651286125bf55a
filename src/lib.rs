pub mod modules;
pub mod shared;
