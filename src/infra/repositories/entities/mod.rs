//! SeaORM entity definitions
//!
//! Database rows, kept separate from the domain types they convert into.

pub mod car;
pub mod car_driver;
pub mod driver;
pub mod manufacturer;
