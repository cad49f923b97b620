pub mod info;
pub mod sensor;

pub use info::DetectInfo;
pub use sensor::Sensor;
