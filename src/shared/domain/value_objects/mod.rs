pub mod replace_policy;

pub use replace_policy::ReplacePolicy;
