//! Import uom si system and add unit constants
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*"
//! Non-zero values should be created using standard uom syntax ($Quantity::new::<$unit>($value)) or multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::acceleration::meter_per_second_squared;
pub use si::energy::joule;
pub use si::f64::{Acceleration, Energy, Force, Length, Mass, Power, Ratio, Time, Velocity};
pub use si::force::{newton, pound_force, ton_force};
pub use si::length::{foot, kilometer, meter, mile};
pub use si::mass::{kilogram, megagram};
pub use si::power::{horsepower, kilowatt, watt};
pub use si::ratio::{percent, ratio};
pub use si::time::{hour, second};
pub use si::velocity::{kilometer_per_hour, meter_per_second, mile_per_hour};
