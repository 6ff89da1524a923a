pub mod map;
pub mod normalize;

pub use map::red_grey_color;
pub use normalize::MidpointNormalize;
