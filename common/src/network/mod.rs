pub mod interface;
pub mod neighbor;
pub mod range;
pub mod target;
