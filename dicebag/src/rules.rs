pub mod bounds;
pub mod dice;
