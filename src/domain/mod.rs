pub mod artifact;
pub mod catalog;
pub mod poster;
pub mod prayer;
