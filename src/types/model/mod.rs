pub mod place;
pub mod weather;
