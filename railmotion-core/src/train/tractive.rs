//! Tractive effort, force limits, and net force on the train.

use super::resistance;
use crate::imports::*;

/// Steel wheel on steel rail adhesion available for traction.
pub const WHEEL_TRACK_ADHESION: f64 = 0.25;
/// Fraction of the adhesion limit that brake systems are designed to use,
/// keeping a margin against wheel lock.
pub const BRAKE_DESIGN_LIMIT: f64 = 0.75;
/// Drivetrain efficiency in the standard tractive-effort formula.
pub const TRACTIVE_EFFICIENCY: f64 = 0.72;
/// Coupler-safe pulling force, short tons force.
pub const DRAWBAR_PULL_LIMIT_TONS: f64 = 125.0;

/// Wheel-slip limit: only the weight on powered axles contributes.
pub fn traction_force_limit(driver_weight: si::Force) -> si::Force {
    driver_weight * WHEEL_TRACK_ADHESION
}

/// Maximum coupler-safe pulling force.
pub fn drawbar_pull_limit() -> si::Force {
    DRAWBAR_PULL_LIMIT_TONS * uc::TONF
}

/// The lesser of the coupler-breaking and wheel-slip limits; pulling force
/// is capped by whichever constraint binds first.
pub fn tractive_force_limit(driver_weight: si::Force) -> si::Force {
    drawbar_pull_limit().min(traction_force_limit(driver_weight))
}

/// Standard tractive-effort formula: `2650 * efficiency * P[HP] / v[km/h]`
/// newtons.  Undefined at rest; callers must use [tractive_force_limit] for
/// a train at speed zero rather than this formula.
pub fn tractive_force(power: si::Power, speed: si::Velocity) -> si::Force {
    debug_assert!(speed > si::Velocity::ZERO);
    2_650.0 * TRACTIVE_EFFICIENCY * power.get::<si::horsepower>()
        / speed.get::<si::kilometer_per_hour>()
        * uc::N
}

/// Braking uses the full train weight (all axles braked), derated by the
/// brake design margin.
pub fn braking_force_limit(weight: si::Force) -> si::Force {
    WHEEL_TRACK_ADHESION * BRAKE_DESIGN_LIMIT * weight
}

/// Net motive force on a moving train.  May be negative (net deceleration)
/// near the speed limit or on steep grades; callers must not clamp it.
pub fn net_force(
    power: si::Power,
    speed: si::Velocity,
    weight: si::Force,
    driver_weight: si::Force,
    grade: si::Ratio,
) -> si::Force {
    tractive_force_limit(driver_weight).min(tractive_force(power, speed))
        - resistance::rolling_resistance(weight, speed)
        - resistance::grade_resistance(weight, grade)
}

/// Net force available to break a train away from rest, where tractive
/// effort is governed by the adhesion limit and bearing breakaway
/// resistance replaces rolling resistance.
pub fn net_force_at_rest(
    weight: si::Force,
    driver_weight: si::Force,
    grade: si::Ratio,
    journal_bearings: bool,
    above_freezing: bool,
) -> si::Force {
    tractive_force_limit(driver_weight)
        - resistance::starting_resistance(weight, journal_bearings, above_freezing)
        - resistance::grade_resistance(weight, grade)
}

pub fn acceleration(net_force: si::Force, mass: si::Mass) -> si::Acceleration {
    net_force / mass
}
