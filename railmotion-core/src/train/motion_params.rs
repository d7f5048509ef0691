use crate::imports::*;

/// Immutable per-route-segment simulation parameters.  Constructed once via
/// [TrainMotionParams::new] (which fails fast on physically meaningless
/// inputs) and read-only afterwards.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainMotionParams {
    /// per-car weights, in coupling order behind the engine; may be empty
    /// (a light engine is a valid train)
    pub car_weights: Vec<si::Mass>,
    pub engine_weight: si::Mass,
    /// weight carried on the engine's powered axles
    pub driver_weight: si::Mass,
    /// rated power
    pub full_power: si::Power,
    /// signed track grade; positive is uphill
    pub grade: si::Ratio,
    pub speed_limit: si::Velocity,
    /// segment length
    pub distance: si::Length,
    /// journal (friction) bearings rather than roller bearings
    pub journal_bearings: bool,
    pub above_freezing: bool,
}

impl TrainMotionParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        car_weights: Vec<si::Mass>,
        engine_weight: si::Mass,
        driver_weight: si::Mass,
        full_power: si::Power,
        grade: si::Ratio,
        speed_limit: si::Velocity,
        distance: si::Length,
        journal_bearings: bool,
        above_freezing: bool,
    ) -> anyhow::Result<Self> {
        let params = Self {
            car_weights,
            engine_weight,
            driver_weight,
            full_power,
            grade,
            speed_limit,
            distance,
            journal_bearings,
            above_freezing,
        };
        params.validate().with_context(|| format_dbg!())?;
        Ok(params)
    }

    /// Builds from plain numbers in the caller's unit convention: weights in
    /// tons (US) or kilograms (si), speed in MPH or m/s, distance in miles
    /// or meters, power in HP or watts, grade in percent.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        units: UnitSystem,
        car_weights: &[f64],
        engine_weight: f64,
        driver_weight: f64,
        full_power: f64,
        grade_percent: f64,
        speed_limit: f64,
        distance: f64,
        journal_bearings: bool,
        above_freezing: bool,
    ) -> anyhow::Result<Self> {
        Self::new(
            car_weights.iter().map(|w| units.mass(*w)).collect(),
            units.mass(engine_weight),
            units.mass(driver_weight),
            units.power(full_power),
            grade_percent / 100.0 * uc::R,
            units.speed(speed_limit),
            units.distance(distance),
            journal_bearings,
            above_freezing,
        )
    }

    pub fn car_count(&self) -> usize {
        self.car_weights.len()
    }

    /// Total mass of cars plus engine.
    pub fn train_mass(&self) -> si::Mass {
        self.car_weights
            .iter()
            .fold(self.engine_weight, |acc, w| acc + *w)
    }

    /// Total train weight as a force.
    pub fn train_weight(&self) -> si::Force {
        self.train_mass() * uc::ACC_GRAV
    }

    /// Weight on the powered axles as a force.
    pub fn driver_weight_static(&self) -> si::Force {
        self.driver_weight * uc::ACC_GRAV
    }
}

impl ObjState for TrainMotionParams {
    fn validate(&self) -> ValidationResults {
        let mut errors = ValidationErrors::new();
        for (i, weight) in self.car_weights.iter().enumerate() {
            si_chk_num_gtz_fin(&mut errors, weight, &format!("Car {} weight", i + 1));
        }
        si_chk_num_gtz_fin(&mut errors, &self.engine_weight, "Engine weight");
        si_chk_num_gtz_fin(&mut errors, &self.driver_weight, "Driver weight");
        if self.driver_weight > self.engine_weight {
            errors.push(anyhow!(
                "Driver weight must not exceed engine weight ({:?} > {:?})!",
                self.driver_weight.value,
                self.engine_weight.value
            ));
        }
        si_chk_num_gtz_fin(&mut errors, &self.full_power, "Full power");
        si_chk_num_fin(&mut errors, &self.grade, "Grade");
        si_chk_num_gez_fin(&mut errors, &self.speed_limit, "Speed limit");
        si_chk_num_gtz_fin(&mut errors, &self.distance, "Distance");
        errors.make_err()
    }
}

impl SerdeAPI for TrainMotionParams {
    fn init(&mut self) -> Result<(), RailmotionError> {
        self.validate()
            .map_err(|errors| RailmotionError::Init(errors.to_string()))
    }
}

impl Valid for TrainMotionParams {
    fn valid() -> Self {
        Self {
            car_weights: vec![
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
            engine_weight: 364.0 * uc::TON,
            driver_weight: 0.35 * 364.0 * uc::TON,
            full_power: 4_500.0 * uc::HP,
            grade: 0.01 * uc::R,
            speed_limit: 40.0 * uc::MPH,
            distance: 2.5 * uc::MI,
            journal_bearings: false,
            above_freezing: true,
        }
    }
}
