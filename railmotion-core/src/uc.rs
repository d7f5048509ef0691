//! Unit constants for multiplication-syntax quantity construction
//! (`2.0 * uc::MPH`, `364.0 * uc::TON`).  Values are the si base-unit
//! magnitudes of each unit.

use crate::si;
use std::marker::PhantomData;

/// meter
pub const M: si::Length = si::Length {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// kilometer
pub const KM: si::Length = si::Length {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0e3,
};
/// statute mile
pub const MI: si::Length = si::Length {
    dimension: PhantomData,
    units: PhantomData,
    value: 1_609.344,
};
/// foot
pub const FT: si::Length = si::Length {
    dimension: PhantomData,
    units: PhantomData,
    value: 0.3048,
};
/// second
pub const S: si::Time = si::Time {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// hour
pub const HR: si::Time = si::Time {
    dimension: PhantomData,
    units: PhantomData,
    value: 3_600.0,
};
/// meter per second
pub const MPS: si::Velocity = si::Velocity {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// mile per hour
pub const MPH: si::Velocity = si::Velocity {
    dimension: PhantomData,
    units: PhantomData,
    value: 0.447_04,
};
/// kilogram
pub const KG: si::Mass = si::Mass {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// pound mass
pub const LB: si::Mass = si::Mass {
    dimension: PhantomData,
    units: PhantomData,
    value: 0.453_592_37,
};
/// short ton (2000 lb)
pub const TON: si::Mass = si::Mass {
    dimension: PhantomData,
    units: PhantomData,
    value: 907.184_74,
};
/// newton
pub const N: si::Force = si::Force {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// pound force
pub const LBF: si::Force = si::Force {
    dimension: PhantomData,
    units: PhantomData,
    value: 4.448_221_615_260_5,
};
/// short ton force (2000 lbf)
pub const TONF: si::Force = si::Force {
    dimension: PhantomData,
    units: PhantomData,
    value: 8_896.443_230_521,
};
/// watt
pub const W: si::Power = si::Power {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// kilowatt
pub const KW: si::Power = si::Power {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0e3,
};
/// mechanical horsepower (550 ft lbf/s)
pub const HP: si::Power = si::Power {
    dimension: PhantomData,
    units: PhantomData,
    value: 745.699_871_582_270_2,
};
/// dimensionless ratio of one
pub const R: si::Ratio = si::Ratio {
    dimension: PhantomData,
    units: PhantomData,
    value: 1.0,
};
/// standard acceleration of gravity
pub const ACC_GRAV: si::Acceleration = si::Acceleration {
    dimension: PhantomData,
    units: PhantomData,
    value: 9.806_65,
};
