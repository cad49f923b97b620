pub mod angle;
pub mod point;

pub use angle::AngleConvention;
pub use point::Point;
