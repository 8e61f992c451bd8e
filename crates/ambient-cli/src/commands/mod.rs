pub mod check;
pub mod generate;
pub mod inspect;
pub mod list;
pub mod loader;
