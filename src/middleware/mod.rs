pub mod catcher;
pub mod cors;
