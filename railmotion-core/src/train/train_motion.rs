use crate::imports::*;

/// Simulation phases in the order they occur along a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Accelerate,
    Cruise,
    Decelerate,
}

impl Phase {
    /// Column label used in motion reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accelerate => "start",
            Self::Cruise => "cruise",
            Self::Decelerate => "finish",
        }
    }
}

/// Map from phase to its time-ordered motion samples.  Built fresh per
/// [super::TrainMotionSim::get_train_motions] call and not mutated after
/// construction.
pub type TrainMotions = BTreeMap<Phase, Vec<TrainMotion>>;

/// One simulation sample of kinematic and control state.  `throttle` and
/// `brake` are mutually exclusive: the model assumes powered or braking
/// operation at any instant, never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainMotion {
    /// time elapsed since the prior sample
    pub dt: si::Time,
    /// cumulative time from segment start
    pub time: si::Time,
    /// cumulative distance from segment start
    pub offset: si::Length,
    pub speed: si::Velocity,
    pub accel: si::Acceleration,
    /// net force on the train
    pub force: si::Force,
    /// power applied at the wheels
    pub power: si::Power,
    /// fraction of rated power applied
    pub throttle: si::Ratio,
    /// fraction of the braking force limit applied
    pub brake: si::Ratio,
}

impl TrainMotion {
    /// Identity sample representing "no motion occurred".
    pub const ZERO: Self = Self {
        dt: si::Time::ZERO,
        time: si::Time::ZERO,
        offset: si::Length::ZERO,
        speed: si::Velocity::ZERO,
        accel: si::Acceleration::ZERO,
        force: si::Force::ZERO,
        power: si::Power::ZERO,
        throttle: si::Ratio::ZERO,
        brake: si::Ratio::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for TrainMotion {
    fn default() -> Self {
        Self::ZERO
    }
}

#[ext(TrainMotionsExt)]
pub impl [TrainMotion] {
    /// Total time spent in this phase.
    fn elapsed(&self) -> si::Time {
        self.iter().fold(si::Time::ZERO, |acc, m| acc + m.dt)
    }

    fn max_throttle(&self) -> si::Ratio {
        self.iter().fold(si::Ratio::ZERO, |acc, m| acc.max(m.throttle))
    }

    fn max_brake(&self) -> si::Ratio {
        self.iter().fold(si::Ratio::ZERO, |acc, m| acc.max(m.brake))
    }

    /// True when every sample is the identity sample.
    fn is_motionless(&self) -> bool {
        self.iter().all(|m| m.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sample_is_identity() {
        assert!(TrainMotion::ZERO.is_zero());
        assert!(TrainMotion::default().is_zero());
        let moving = TrainMotion {
            speed: 1.0 * uc::MPH,
            ..Default::default()
        };
        assert!(!moving.is_zero());
    }

    #[test]
    fn test_phase_ordering() {
        assert!(Phase::Accelerate < Phase::Cruise);
        assert!(Phase::Cruise < Phase::Decelerate);
        assert_eq!(Phase::Accelerate.label(), "start");
        assert_eq!(Phase::Decelerate.label(), "finish");
    }

    #[test]
    fn test_slice_aggregates() {
        let motions = [
            TrainMotion {
                dt: 1.0 * uc::S,
                time: 1.0 * uc::S,
                throttle: 0.5 * uc::R,
                ..Default::default()
            },
            TrainMotion {
                dt: 2.0 * uc::S,
                time: 3.0 * uc::S,
                brake: 0.1 * uc::R,
                ..Default::default()
            },
        ];
        assert!(almost_eq_uom(&motions.elapsed(), &(3.0 * uc::S), None));
        assert!(almost_eq_uom(&motions.max_throttle(), &(0.5 * uc::R), None));
        assert!(almost_eq_uom(&motions.max_brake(), &(0.1 * uc::R), None));
        assert!(!motions.is_motionless());
        assert!([TrainMotion::ZERO].is_motionless());
    }
}
