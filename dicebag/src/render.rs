pub mod face;
pub mod roll;
