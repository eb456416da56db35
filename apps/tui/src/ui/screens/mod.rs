pub mod help;
pub mod map;
pub mod search;
