pub mod geom;
pub mod util;
