// One handler per method+path, each issuing a single store statement.
pub mod directors;
pub mod health;
pub mod movies;

pub use health::health;
