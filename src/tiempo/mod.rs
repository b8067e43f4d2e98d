//! The Tiempo (ilmeteo.net) forecast provider.

pub mod driver;
pub mod error;
pub mod parser;
