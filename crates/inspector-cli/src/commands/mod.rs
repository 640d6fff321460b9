pub mod kinds;
pub mod show;
