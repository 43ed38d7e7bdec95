pub mod baseline;
pub mod compare;
