pub mod set;
pub mod store;

pub use set::DiceSetConfig;
pub use store::{SetConfigStore, SetId};
