pub mod accessors;
pub mod error;
pub mod misc;
pub mod predicates;
