pub mod message;
pub mod story;
