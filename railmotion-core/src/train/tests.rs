use super::train_imports::*;
use super::*;

/// Nine-car drag freight behind a heavy steam engine on a 3% grade.
fn steep_grade_params(grade: si::Ratio, full_power: si::Power) -> TrainMotionParams {
    TrainMotionParams::new(
        vec![
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
        ],
        364.0 * uc::TON,
        0.35 * 364.0 * uc::TON,
        full_power,
        grade,
        si::Velocity::ZERO,
        1.0 * uc::MI,
        true,
        true,
    )
    .unwrap()
}

#[test]
/// The stretch phase must cover exactly one car length of slack per car,
/// even with a zero running speed limit.
fn test_stretch_covers_slack_for_all_cars() {
    let params = steep_grade_params(0.03 * uc::R, 4_500.0 * uc::HP);
    let sim = TrainMotionSim::new(params);
    let stretch = sim.stretch_motion();
    assert!(!stretch.is_zero());
    assert!(almost_eq_uom(
        &stretch.offset,
        &(9.0 * SLACK_PER_CAR_FEET * uc::FT),
        Some(1e-9)
    ));
    assert!(stretch.time > si::Time::ZERO);
    assert!(stretch.speed > si::Velocity::ZERO);
    assert!(stretch.speed <= STRETCH_SPEED_LIMIT_MPH * uc::MPH);
    assert!(stretch.power > si::Power::ZERO);
    assert_eq!(stretch.brake, si::Ratio::ZERO);
}

#[test]
/// The stretch motion is the identity sample exactly when net force at the
/// stretch speed ceiling is negative for the full train.
fn test_stretch_existence_matches_net_force_sign() {
    for grade_percent in [-2.0, -1.0, 0.0, 3.0, 4.0, 6.0] {
        let grade = grade_percent / 100.0 * uc::R;
        let params = steep_grade_params(grade, 4_500.0 * uc::HP);
        let net_force = tractive::net_force(
            params.full_power,
            STRETCH_SPEED_LIMIT_MPH * uc::MPH,
            params.train_weight(),
            params.driver_weight_static(),
            params.grade,
        );
        let stretch = TrainMotionSim::new(params).stretch_motion();
        assert_eq!(
            stretch.is_zero(),
            net_force < si::Force::ZERO,
            "grade {grade_percent}%"
        );
    }
}

#[test]
/// The accelerate phase always terminates and never yields an empty list
/// across assorted consists and grades.
fn test_accelerate_terminates_across_grades_and_consists() {
    let car_lists: Vec<Vec<si::Mass>> = vec![
        vec![50.0 * uc::TON],
        vec![100.0 * uc::TON; 5],
        vec![
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
            25.0 * uc::TON,
            75.0 * uc::TON,
        ],
    ];
    for car_weights in &car_lists {
        for grade_percent in [-2.0, -1.0, 0.0, 3.0] {
            let params = TrainMotionParams::new(
                car_weights.clone(),
                364.0 * uc::TON,
                0.7 * 364.0 * uc::TON,
                4_500.0 * uc::HP,
                grade_percent / 100.0 * uc::R,
                40.0 * uc::MPH,
                3.0 * uc::MI,
                false,
                true,
            )
            .unwrap();
            let motions = TrainMotionSim::new(params.clone()).get_train_motions();
            let accel = &motions[&Phase::Accelerate];
            assert!(!accel.is_empty(), "grade {grade_percent}%");
            // bounded by the speed limit over the minimum acceleration
            assert!(accel.len() < 5_000, "grade {grade_percent}%");
            for motion in accel {
                assert!(motion.speed <= params.speed_limit + 1e-9 * uc::MPS);
                assert!(motion.offset <= 0.5 * params.distance + 1e-6 * uc::M);
            }
        }
    }
}

#[test]
/// Samples within every phase are strictly time-ordered, offsets never
/// decrease, and throttle and brake are mutually exclusive.
fn test_motion_sample_invariants() {
    let motions = TrainMotionSim::default().get_train_motions();
    for (phase, list) in &motions {
        let mut prev_time = si::Time::ZERO;
        let mut prev_offset = si::Length::ZERO;
        for motion in list {
            assert!(motion.time > prev_time, "{phase:?} times must ascend");
            assert!(motion.offset >= prev_offset, "{phase:?} offsets regressed");
            assert!(
                motion.throttle == si::Ratio::ZERO || motion.brake == si::Ratio::ZERO,
                "{phase:?} applied throttle and brake at once"
            );
            prev_time = motion.time;
            prev_offset = motion.offset;
        }
    }
}

#[test]
/// Deceleration mirrors acceleration: same elapsed time, and the final
/// sample lands on the full segment distance.
fn test_deceleration_mirrors_acceleration() {
    let motions = TrainMotionSim::default().get_train_motions();
    let accel = &motions[&Phase::Accelerate];
    let decel = &motions[&Phase::Decelerate];
    assert_eq!(accel.len(), decel.len());
    assert!(almost_eq_uom(&accel.elapsed(), &decel.elapsed(), Some(1e-9)));
    let params = TrainMotionParams::valid();
    let last = decel.last().unwrap();
    assert!(almost_eq_uom(&last.offset, &params.distance, Some(1e-6)));
    assert_eq!(last.speed, accel.first().unwrap().speed);
    // deceleration samples brake rather than throttle
    assert!(decel.max_brake() > si::Ratio::ZERO);
    assert_eq!(decel.max_throttle(), si::Ratio::ZERO);
}

#[test]
/// The cruise phase is always a single sample at the final accelerate
/// speed, holding against rolling and grade resistance.
fn test_cruise_holds_speed() {
    let motions = TrainMotionSim::default().get_train_motions();
    let accel = &motions[&Phase::Accelerate];
    let cruise = &motions[&Phase::Cruise];
    assert_eq!(cruise.len(), 1);
    assert_eq!(cruise[0].speed, accel.last().unwrap().speed);
    assert_eq!(cruise[0].accel, si::Acceleration::ZERO);
    assert!(cruise[0].throttle > si::Ratio::ZERO);
}

#[test]
/// Holding speed on a downgrade takes brake, not throttle.
fn test_cruise_brakes_on_downgrade() {
    let params = TrainMotionParams::new(
        vec![100.0 * uc::TON; 5],
        364.0 * uc::TON,
        0.7 * 364.0 * uc::TON,
        4_500.0 * uc::HP,
        -0.02 * uc::R,
        40.0 * uc::MPH,
        3.0 * uc::MI,
        false,
        true,
    )
    .unwrap();
    let motions = TrainMotionSim::new(params).get_train_motions();
    let cruise = &motions[&Phase::Cruise][0];
    assert!(cruise.force < si::Force::ZERO);
    assert!(cruise.brake > si::Ratio::ZERO);
    assert_eq!(cruise.throttle, si::Ratio::ZERO);
}

#[test]
/// A light engine (no cars) produces motion without any stretch phase.
fn test_light_engine_accelerates_from_rest() {
    let params = TrainMotionParams::new(
        Vec::new(),
        364.0 * uc::TON,
        0.7 * 364.0 * uc::TON,
        4_500.0 * uc::HP,
        si::Ratio::ZERO,
        40.0 * uc::MPH,
        2.0 * uc::MI,
        false,
        true,
    )
    .unwrap();
    let motions = TrainMotionSim::new(params).get_train_motions();
    let accel = &motions[&Phase::Accelerate];
    // identity first sample (no slack to stretch), then real steps
    assert!(accel[0].is_zero());
    assert!(accel.len() > 1);
    assert!(accel.last().unwrap().speed > si::Velocity::ZERO);
}

#[test]
/// An underpowered segment yields identity samples in every phase rather
/// than an error or a panic.
fn test_underpowered_segment_yields_no_motion() {
    let params = steep_grade_params(0.06 * uc::R, 4_500.0 * uc::HP);
    let motions = TrainMotionSim::new(params).get_train_motions();
    assert_eq!(motions.len(), 3);
    for list in motions.values() {
        assert!(!list.is_empty());
        assert!(list.is_motionless());
    }
}

#[test]
/// Force conversions round-trip between short tons force and newtons.
fn test_force_unit_round_trip() {
    let force = 42.0 * uc::TONF;
    let newtons = force.get::<si::newton>();
    assert!(almost_eq(newtons, 42.0 * 8_896.443_230_521, Some(1e-9)));
    assert!(almost_eq_uom(&(newtons * uc::N), &force, Some(1e-9)));
    assert!(almost_eq((force / uc::TONF).get::<si::ratio>(), 42.0, Some(1e-9)));
}
