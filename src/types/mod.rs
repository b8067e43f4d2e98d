pub mod forecast;
pub mod location;
pub mod weather_condition;
