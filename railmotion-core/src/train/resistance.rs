//! Resistance forces opposing train motion.  All functions take the train
//! weight as a force (mass times standard gravity) so that resistances scale
//! directly with it.

use crate::imports::*;

/// Static (bearing) adhesion component of rolling resistance.
pub const STATIC_ADHESION: f64 = 0.0016;
/// Flange adhesion component of rolling resistance per km/h of speed.
pub const FLANGE_ADHESION_PER_KMPH: f64 = 0.000_08;

/// Force component due to track slope.  Positive grade (uphill) opposes
/// motion; negative grade assists it.
pub fn grade_resistance(weight: si::Force, grade: si::Ratio) -> si::Force {
    weight * grade
}

/// Combined static and speed-dependent friction opposing motion.
pub fn rolling_resistance(weight: si::Force, speed: si::Velocity) -> si::Force {
    (STATIC_ADHESION + FLANGE_ADHESION_PER_KMPH * speed.get::<si::kilometer_per_hour>().abs())
        * weight
}

/// Bearing breakaway resistance of a train at rest.  Journal (friction)
/// bearings and sub-freezing temperatures both raise it.
pub fn starting_resistance(
    weight: si::Force,
    journal_bearings: bool,
    above_freezing: bool,
) -> si::Force {
    let lb_per_ton = match (journal_bearings, above_freezing) {
        (true, true) => 25.0,
        (true, false) => 35.0,
        (false, true) => 5.0,
        (false, false) => 15.0,
    };
    weight * (lb_per_ton / 2_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_resistance() {
        // zero grade yields zero resistance for any weight
        assert_eq!(
            grade_resistance(2_000.0 * uc::TONF, si::Ratio::ZERO),
            si::Force::ZERO
        );
        // 1% grade on 2000 tons yields 20 tons of resistance
        assert!(almost_eq_uom(
            &grade_resistance(2_000.0 * uc::TONF, 0.01 * uc::R),
            &(20.0 * uc::TONF),
            None
        ));
        // odd symmetry in grade
        assert!(almost_eq_uom(
            &grade_resistance(2_000.0 * uc::TONF, -0.01 * uc::R),
            &(-grade_resistance(2_000.0 * uc::TONF, 0.01 * uc::R)),
            None
        ));
    }

    #[test]
    fn test_rolling_resistance() {
        // at rest only the static term remains
        assert!(almost_eq_uom(
            &rolling_resistance(1_000.0 * uc::TONF, si::Velocity::ZERO),
            &(1.6 * uc::TONF),
            None
        ));
        // resistance grows with speed and is even in its sign
        let slow = rolling_resistance(1_000.0 * uc::TONF, 10.0 * uc::MPH);
        let fast = rolling_resistance(1_000.0 * uc::TONF, 40.0 * uc::MPH);
        assert!(fast > slow);
        assert!(almost_eq_uom(
            &rolling_resistance(1_000.0 * uc::TONF, -40.0 * uc::MPH),
            &fast,
            None
        ));
        // 40 MPH = 64.37376 km/h -> (0.0016 + 0.00008 * 64.37376) * 1000 tons
        assert!(almost_eq_uom(
            &fast,
            &((0.0016 + 0.000_08 * 64.373_76) * 1_000.0 * uc::TONF),
            Some(1e-6)
        ));
    }

    #[test]
    fn test_starting_resistance_table() {
        let weight = 2_000.0 * uc::TONF;
        assert!(almost_eq_uom(
            &starting_resistance(weight, true, true),
            &(25.0 * uc::TONF),
            None
        ));
        assert!(almost_eq_uom(
            &starting_resistance(weight, true, false),
            &(35.0 * uc::TONF),
            None
        ));
        assert!(almost_eq_uom(
            &starting_resistance(weight, false, true),
            &(5.0 * uc::TONF),
            None
        ));
        assert!(almost_eq_uom(
            &starting_resistance(weight, false, false),
            &(15.0 * uc::TONF),
            None
        ));
    }
}
