pub mod blur;
pub mod replace_svg;

pub use blur::*;
pub use replace_svg::*;
