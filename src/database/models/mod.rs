pub mod movie;

pub use movie::{MovieFields, MovieName};
