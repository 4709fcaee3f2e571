pub mod catalog;
pub mod health;
pub mod poster;
pub mod prayer;
