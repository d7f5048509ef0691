//! Unit-system convention at the raw-number boundary.  All internal
//! computation is dimension-typed; [UnitSystem] only governs how plain
//! numbers supplied by callers are interpreted and how report output is
//! rendered.

use crate::imports::*;

/// Unit convention for caller-facing numbers: US customary (tons, miles,
/// miles per hour, horsepower) or si (kilograms, meters, meters per second,
/// watts).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    US,
    SI,
}

impl UnitSystem {
    pub fn mass(&self, val: f64) -> si::Mass {
        match self {
            Self::US => val * uc::TON,
            Self::SI => val * uc::KG,
        }
    }

    pub fn speed(&self, val: f64) -> si::Velocity {
        match self {
            Self::US => val * uc::MPH,
            Self::SI => val * uc::MPS,
        }
    }

    pub fn distance(&self, val: f64) -> si::Length {
        match self {
            Self::US => val * uc::MI,
            Self::SI => val * uc::M,
        }
    }

    pub fn power(&self, val: f64) -> si::Power {
        match self {
            Self::US => val * uc::HP,
            Self::SI => val * uc::W,
        }
    }

    pub fn fmt_mass(&self, mass: si::Mass) -> String {
        match self {
            Self::US => format!("{:.1} tons", (mass / uc::TON).get::<si::ratio>()),
            Self::SI => format!("{:.0} kg", mass.get::<si::kilogram>()),
        }
    }

    pub fn fmt_speed(&self, speed: si::Velocity) -> String {
        match self {
            Self::US => format!("{:.1} MPH", speed.get::<si::mile_per_hour>()),
            Self::SI => format!("{:.1} m/s", speed.get::<si::meter_per_second>()),
        }
    }

    pub fn fmt_distance(&self, distance: si::Length) -> String {
        match self {
            Self::US => format!("{:.2} mi", distance.get::<si::mile>()),
            Self::SI => format!("{:.0} m", distance.get::<si::meter>()),
        }
    }

    pub fn fmt_power(&self, power: si::Power) -> String {
        match self {
            Self::US => format!("{:.0} HP", power.get::<si::horsepower>()),
            Self::SI => format!("{:.0} kW", power.get::<si::kilowatt>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_number_interpretation() {
        assert!(almost_eq_uom(
            &UnitSystem::US.mass(2.0),
            &(2.0 * uc::TON),
            None
        ));
        assert!(almost_eq_uom(&UnitSystem::SI.mass(2.0), &(2.0 * uc::KG), None));
        assert!(almost_eq(
            UnitSystem::US.speed(40.0).get::<si::meter_per_second>(),
            40.0 * 0.447_04,
            Some(1e-12)
        ));
        assert!(almost_eq_uom(
            &UnitSystem::US.distance(1.0),
            &(1_609.344 * uc::M),
            None
        ));
    }

    #[test]
    fn test_formatting_follows_convention() {
        let mass = 839.0 * uc::TON;
        assert_eq!(UnitSystem::US.fmt_mass(mass), "839.0 tons");
        let speed = 40.0 * uc::MPH;
        assert_eq!(UnitSystem::US.fmt_speed(speed), "40.0 MPH");
        assert_eq!(UnitSystem::SI.fmt_distance(2.0 * uc::KM), "2000 m");
    }
}
