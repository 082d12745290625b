pub mod payload;

pub use payload::MoviePayload;
