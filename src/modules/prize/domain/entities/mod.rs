pub mod prize;
