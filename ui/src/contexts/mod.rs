pub mod environment;

pub use environment::{Environment, use_environment};
