pub mod foursquare;
pub mod geom;
pub mod openweather;
pub mod place;
