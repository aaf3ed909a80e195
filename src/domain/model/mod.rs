pub mod fleet;
pub mod vehicle;

pub use fleet::Fleet;
pub use vehicle::{Vehicle, VehicleDecode};
