pub mod point;
pub mod rect;
pub mod surface;
