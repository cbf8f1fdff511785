pub mod dice;
pub mod window;
