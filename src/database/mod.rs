pub mod directors;
pub mod models;
pub mod movies;
pub mod record;
pub mod store;
pub mod value;

pub use record::Record;
pub use store::{DatabaseError, Store};
pub use value::SqlValue;
