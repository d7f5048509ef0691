use super::train_imports::*;

/// Free coupler/drawbar travel taken up per car when starting, feet.
pub const SLACK_PER_CAR_FEET: f64 = 1.8;
/// Speed ceiling while stretching slack, miles per hour.
pub const STRETCH_SPEED_LIMIT_MPH: f64 = 2.0;
/// Accelerations below this are treated as already cruising, miles per hour
/// per second.
pub const MIN_ACCELERATION_MPH_PER_S: f64 = 0.01;

/// Step-wise train motion simulation over one route segment.  Produces the
/// phase-tagged [TrainMotions] sample sequences: slack stretch and
/// acceleration samples under [Phase::Accelerate], a single steady-state
/// [Phase::Cruise] sample, and a mirrored [Phase::Decelerate] profile.
///
/// Purely computational; each instance is independent, so simulations for
/// different segments may run concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainMotionSim {
    pub params: TrainMotionParams,
}

impl TrainMotionSim {
    pub fn new(params: TrainMotionParams) -> Self {
        Self { params }
    }

    /// Runs all phases and returns the per-phase sample lists.  A segment
    /// the train cannot move over (net force non-positive at rest) yields
    /// identity samples throughout rather than an error; callers should
    /// check for that case explicitly.
    pub fn get_train_motions(&self) -> TrainMotions {
        let mut accel_motions = vec![self.stretch_motion()];
        if self.params.car_weights.is_empty() || !accel_motions[0].is_zero() {
            self.update_accel_motions(&mut accel_motions);
        }
        let cruise = self.cruise_motion(accel_motions.last().copied().unwrap_or(TrainMotion::ZERO));
        let decel_motions = self.invert_accel_motions(&accel_motions, &cruise);

        let mut motions = TrainMotions::new();
        motions.insert(Phase::Accelerate, accel_motions);
        motions.insert(Phase::Cruise, vec![cruise]);
        motions.insert(Phase::Decelerate, decel_motions);
        debug_assert!(motions.values().all(|list| !list.is_empty()));
        motions
    }

    /// Slack takeup from rest: the engine accelerates alone, then couples
    /// each car in turn.  Couplings are modeled as perfectly inelastic
    /// (momentum conserved, kinetic energy not), so each one knocks the
    /// speed down by the ratio of old to new weight.  Returns a single
    /// aggregate sample synthesized as if the whole stretch happened under
    /// constant acceleration and power, or [TrainMotion::ZERO] when the
    /// engine cannot move the full train even at the stretch speed ceiling.
    pub fn stretch_motion(&self) -> TrainMotion {
        let params = &self.params;
        if params.car_weights.is_empty() {
            return TrainMotion::ZERO;
        }

        let stretch_speed_limit = STRETCH_SPEED_LIMIT_MPH * uc::MPH;
        if tractive::net_force(
            params.full_power,
            stretch_speed_limit,
            params.train_weight(),
            params.driver_weight_static(),
            params.grade,
        ) < si::Force::ZERO
        {
            return TrainMotion::ZERO;
        }

        let slack = SLACK_PER_CAR_FEET * uc::FT;
        let mut mass = params.engine_weight;
        let mut speed = si::Velocity::ZERO;
        let mut time = si::Time::ZERO;

        for (i, &car_mass) in params.car_weights.iter().enumerate() {
            let weight = mass * uc::ACC_GRAV;
            let force = if i == 0 {
                // engine breakaway from rest
                tractive::net_force_at_rest(
                    weight,
                    params.driver_weight_static(),
                    params.grade,
                    params.journal_bearings,
                    params.above_freezing,
                )
            } else {
                tractive::net_force(
                    params.full_power,
                    speed,
                    weight,
                    params.driver_weight_static(),
                    params.grade,
                )
            };
            let accel = tractive::acceleration(force, mass);
            let Some((dt, new_speed)) =
                slack_takeup_time(slack, speed, accel, stretch_speed_limit)
            else {
                return TrainMotion::ZERO;
            };
            time += dt;
            speed = new_speed;

            // perfectly inelastic coupling with the next car, which is at rest
            let coupled_mass = mass + car_mass;
            speed = speed * (mass / coupled_mass);
            mass = coupled_mass;
        }

        let offset = params.car_count() as f64 * slack;
        let accel = speed / time;
        let force = params.train_mass() * accel;
        // back-compute constant power from total kinetic plus potential energy
        let kinetic = 0.5 * params.train_mass() * speed * speed;
        let potential = params.train_weight() * (offset * params.grade);
        let power = (kinetic + potential).max(si::Energy::ZERO) / time;
        TrainMotion {
            dt: time,
            time,
            offset,
            speed,
            accel,
            force,
            power,
            throttle: throttle_ratio(power, params.full_power),
            brake: si::Ratio::ZERO,
        }
    }

    /// Steps forward in one-second increments from the last sample,
    /// appending one sample per step, until the train reaches the speed
    /// limit or half the segment distance (snapping the final partial step
    /// onto the boundary), or until net force or acceleration dwindles to
    /// the point of cruising.
    pub fn update_accel_motions(&self, motions: &mut Vec<TrainMotion>) {
        let params = &self.params;
        let mass = params.train_mass();
        let weight = params.train_weight();
        let driver_weight = params.driver_weight_static();
        let dt = 1.0 * uc::S;
        let half_distance = 0.5 * params.distance;
        let min_accel = MIN_ACCELERATION_MPH_PER_S * uc::MPH / uc::S;

        while let Some(&last) = motions.last() {
            if last.offset >= half_distance || last.speed >= params.speed_limit {
                break;
            }
            let force = if last.speed > si::Velocity::ZERO {
                tractive::net_force(
                    params.full_power,
                    last.speed,
                    weight,
                    driver_weight,
                    params.grade,
                )
            } else {
                tractive::net_force_at_rest(
                    weight,
                    driver_weight,
                    params.grade,
                    params.journal_bearings,
                    params.above_freezing,
                )
            };
            if force <= si::Force::ZERO {
                break;
            }
            let mut accel = tractive::acceleration(force, mass);
            if accel < min_accel {
                break;
            }
            let mut force = force;
            let mut step_dt = dt;
            let mut speed = last.speed + accel * dt;
            let mut offset = last.offset + last.speed * dt + 0.5 * accel * dt * dt;
            let mut hit_boundary = false;

            if let Some(snap) = snap_to_boundary(
                &last,
                accel,
                dt,
                offset,
                speed,
                half_distance,
                params.speed_limit,
            ) {
                step_dt = snap.dt;
                offset = snap.offset;
                speed = snap.speed;
                hit_boundary = true;
                if snap.at_speed_limit {
                    // force and acceleration must be consistent at the
                    // clamped speed
                    force = tractive::net_force(
                        params.full_power,
                        speed,
                        weight,
                        driver_weight,
                        params.grade,
                    );
                    accel = tractive::acceleration(force, mass);
                }
            }

            let applied_force =
                tractive::tractive_force_limit(driver_weight)
                    .min(tractive::tractive_force(params.full_power, speed));
            let power = applied_force * speed;
            motions.push(TrainMotion {
                dt: step_dt,
                time: last.time + step_dt,
                offset,
                speed,
                accel,
                force,
                power,
                throttle: throttle_ratio(power, params.full_power),
                brake: si::Ratio::ZERO,
            });
            if hit_boundary {
                break;
            }
        }
    }

    /// Single steady-state sample covering the remaining distance at the
    /// final accelerate-phase speed, assuming deceleration will mirror
    /// acceleration in distance.  A positive holding force means power is
    /// applied; a negative one means braking holds speed on a downgrade.
    pub fn cruise_motion(&self, last: TrainMotion) -> TrainMotion {
        if last.speed <= si::Velocity::ZERO {
            return TrainMotion::ZERO;
        }
        let params = &self.params;
        let cruise_distance = (params.distance - 2.0 * last.offset).max(si::Length::ZERO);
        let speed = last.speed;
        let dt = cruise_distance / speed;
        let force = resistance::rolling_resistance(params.train_weight(), speed)
            + resistance::grade_resistance(params.train_weight(), params.grade);
        let (power, throttle, brake) = if force >= si::Force::ZERO {
            let power = force * speed;
            (
                power,
                throttle_ratio(power, params.full_power),
                si::Ratio::ZERO,
            )
        } else {
            (
                si::Power::ZERO,
                si::Ratio::ZERO,
                (-force) / tractive::braking_force_limit(params.train_weight()),
            )
        };
        TrainMotion {
            dt,
            time: last.time + dt,
            offset: last.offset + cruise_distance,
            speed,
            accel: si::Acceleration::ZERO,
            force,
            power,
            throttle,
            brake,
        }
    }

    /// Synthesizes the deceleration profile by walking the accelerate
    /// samples newest-first with acceleration, force, and power negated:
    /// the braking profile required to stop mirrors the power profile that
    /// started the train.  Negated power that comes out positive is
    /// reinterpreted as throttle; negative power becomes a brake fraction
    /// of the braking force limit.
    pub fn invert_accel_motions(
        &self,
        accel_motions: &[TrainMotion],
        cruise: &TrainMotion,
    ) -> Vec<TrainMotion> {
        let params = &self.params;
        let brake_limit = tractive::braking_force_limit(params.train_weight());
        let mut time = cruise.time;
        let mut offset = cruise.offset;
        let mut decel_motions = Vec::with_capacity(accel_motions.len());

        for i in (0..accel_motions.len()).rev() {
            let m = accel_motions[i];
            let travelled = if i == 0 {
                m.offset
            } else {
                m.offset - accel_motions[i - 1].offset
            };
            time += m.dt;
            offset += travelled;
            let power = -m.power;
            let (throttle, brake) = if power > si::Power::ZERO {
                (throttle_ratio(power, params.full_power), si::Ratio::ZERO)
            } else if m.speed > si::Velocity::ZERO {
                (si::Ratio::ZERO, ((-power) / m.speed) / brake_limit)
            } else {
                (si::Ratio::ZERO, si::Ratio::ZERO)
            };
            decel_motions.push(TrainMotion {
                dt: m.dt,
                time,
                offset,
                speed: m.speed,
                accel: -m.accel,
                force: -m.force,
                power,
                throttle,
                brake,
            });
        }
        decel_motions
    }
}

impl Default for TrainMotionSim {
    fn default() -> Self {
        Self {
            params: TrainMotionParams::valid(),
        }
    }
}

impl SerdeAPI for TrainMotionSim {}

impl Valid for TrainMotionSim {
    fn valid() -> Self {
        Self::default()
    }
}

/// Time to close `slack` starting at `speed` under constant `accel`, with
/// speed capped at `speed_cap`, along with the speed at closure.  `None`
/// when the train stalls before covering the slack.
fn slack_takeup_time(
    slack: si::Length,
    speed: si::Velocity,
    accel: si::Acceleration,
    speed_cap: si::Velocity,
) -> Option<(si::Time, si::Velocity)> {
    if accel > si::Acceleration::ZERO {
        let end_speed = (speed * speed + 2.0 * accel * slack).sqrt();
        if end_speed <= speed_cap {
            Some(((end_speed - speed) / accel, end_speed))
        } else {
            // reach the cap, then close the remaining slack at constant speed
            let dt_cap = (speed_cap - speed) / accel;
            let closed = speed * dt_cap + 0.5 * accel * dt_cap * dt_cap;
            Some((dt_cap + (slack - closed) / speed_cap, speed_cap))
        }
    } else if speed <= si::Velocity::ZERO {
        None
    } else if accel == si::Acceleration::ZERO {
        Some((slack / speed, speed))
    } else {
        // decelerating; the slack closes only if speed stays positive
        let end_speed_sq = speed * speed + 2.0 * accel * slack;
        if end_speed_sq.value <= 0.0 {
            None
        } else {
            let end_speed = end_speed_sq.sqrt();
            Some(((end_speed - speed) / accel, end_speed))
        }
    }
}

/// Truncated step landing exactly on a boundary crossed mid-step.
struct SnappedStep {
    dt: si::Time,
    offset: si::Length,
    speed: si::Velocity,
    at_speed_limit: bool,
}

/// Detects whether a full constant-acceleration step from `last` would
/// cross the half-distance or speed-limit boundary and, if so, returns the
/// interpolated fractional step that lands exactly on it.  The
/// half-distance boundary takes precedence.
fn snap_to_boundary(
    last: &TrainMotion,
    accel: si::Acceleration,
    dt: si::Time,
    new_offset: si::Length,
    new_speed: si::Velocity,
    half_distance: si::Length,
    speed_limit: si::Velocity,
) -> Option<SnappedStep> {
    if new_offset > half_distance {
        // linear interpolation between old and new distance
        let frac = (half_distance - last.offset) / (new_offset - last.offset);
        let step_dt = dt * frac;
        Some(SnappedStep {
            dt: step_dt,
            offset: half_distance,
            speed: last.speed + accel * step_dt,
            at_speed_limit: false,
        })
    } else if new_speed > speed_limit {
        let step_dt = (speed_limit - last.speed) / accel;
        Some(SnappedStep {
            dt: step_dt,
            offset: last.offset + last.speed * step_dt + 0.5 * accel * step_dt * step_dt,
            speed: speed_limit,
            at_speed_limit: true,
        })
    } else {
        None
    }
}

/// Fraction of rated power applied.  More than 100% indicates a modeling
/// inconsistency worth surfacing, not a fatal error, so the out-of-range
/// value is kept and the report stays generatable.
fn throttle_ratio(power: si::Power, full_power: si::Power) -> si::Ratio {
    let throttle = power / full_power;
    if throttle > uc::R {
        log::warn!(
            "applied power {:.0} W exceeds rated power {:.0} W ({:.1}%)",
            power.get::<si::watt>(),
            full_power.get::<si::watt>(),
            throttle.get::<si::percent>()
        );
    }
    throttle
}
