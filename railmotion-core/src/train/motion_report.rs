use super::train_imports::*;
use rayon::prelude::*;

/// Driver-axle share of engine weight for steam engines.
// TODO: replace the fixed driver-to-engine weight ratios with per-model
// driver weights once roster data carries them.
pub const STEAMER_DRIVER_TO_ENGINE_WEIGHT_RATIO: f64 = 0.35;
/// Driver-axle share for diesel and electric units, which carry most of
/// their weight on powered trucks.
pub const DIESEL_DRIVER_TO_ENGINE_WEIGHT_RATIO: f64 = 0.70;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineType {
    Steam,
    #[default]
    Diesel,
    Electric,
}

impl EngineType {
    pub fn driver_weight_ratio(&self) -> f64 {
        match self {
            Self::Steam => STEAMER_DRIVER_TO_ENGINE_WEIGHT_RATIO,
            Self::Diesel | Self::Electric => DIESEL_DRIVER_TO_ENGINE_WEIGHT_RATIO,
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steam => write!(f, "Steam"),
            Self::Diesel => write!(f, "Diesel"),
            Self::Electric => write!(f, "Electric"),
        }
    }
}

/// Engine display metadata plus the weight/power figures the simulation
/// parameters are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSpec {
    pub model: String,
    pub engine_type: EngineType,
    pub weight: si::Mass,
    pub power: si::Power,
}

impl EngineSpec {
    pub fn new(model: &str, engine_type: EngineType, weight: si::Mass, power: si::Power) -> Self {
        Self {
            model: model.to_string(),
            engine_type,
            weight,
            power,
        }
    }

    /// Estimated weight on the powered axles, from the type-specific ratio.
    pub fn driver_weight(&self) -> si::Mass {
        self.weight * self.engine_type.driver_weight_ratio()
    }
}

impl ObjState for EngineSpec {
    fn validate(&self) -> ValidationResults {
        let mut errors = ValidationErrors::new();
        if self.model.is_empty() {
            errors.push(anyhow!("Engine model must not be empty!"));
        }
        si_chk_num_gtz_fin(&mut errors, &self.weight, "Engine weight");
        si_chk_num_gtz_fin(&mut errors, &self.power, "Engine power");
        errors.make_err()
    }
}

impl SerdeAPI for EngineSpec {}

impl Valid for EngineSpec {
    fn valid() -> Self {
        Self {
            model: "GP40".to_string(),
            engine_type: EngineType::Diesel,
            weight: 364.0 * uc::TON,
            power: 4_500.0 * uc::HP,
        }
    }
}

/// Process-wide reporting configuration supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub unit_system: UnitSystem,
    /// floor on recommended power per ton of train weight
    pub hp_per_ton: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::US,
            hp_per_ton: 1.5,
        }
    }
}

impl SerdeAPI for ReportConfig {}

/// Recommended minimum engine power for a train: an empirical grade/speed
/// term with a configurable power-per-ton floor, not a hard physical
/// derivation.
pub fn minimum_horsepower(
    speed_limit: si::Velocity,
    train_mass: si::Mass,
    grade: si::Ratio,
    hp_per_ton: f64,
) -> si::Power {
    let tons = (train_mass / uc::TON).get::<si::ratio>();
    let grade_hp =
        speed_limit.get::<si::mile_per_hour>() * tons * grade.get::<si::percent>() / 12.0;
    grade_hp.max(hp_per_ton * tons) * uc::HP
}

/// Aggregate statistics for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub elapsed: si::Time,
    pub max_throttle: si::Ratio,
    pub max_brake: si::Ratio,
}

/// Structured motion report for one route segment; [fmt::Display] renders
/// the human-readable multi-line summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionReport {
    pub segment: String,
    pub engine: EngineSpec,
    pub unit_system: UnitSystem,
    pub distance: si::Length,
    pub elapsed: si::Time,
    pub grade: si::Ratio,
    pub speed_limit: si::Velocity,
    pub car_count: usize,
    pub train_mass: si::Mass,
    pub min_power: si::Power,
    pub avg_speed: si::Velocity,
    pub phases: Vec<PhaseSummary>,
}

impl MotionReport {
    pub fn new(
        segment: &str,
        params: &TrainMotionParams,
        engine: &EngineSpec,
        config: &ReportConfig,
        motions: &TrainMotions,
    ) -> Self {
        let phases: Vec<PhaseSummary> = motions
            .iter()
            .map(|(phase, list)| PhaseSummary {
                phase: *phase,
                elapsed: list.elapsed(),
                max_throttle: list.max_throttle(),
                max_brake: list.max_brake(),
            })
            .collect();
        let elapsed = phases
            .iter()
            .fold(si::Time::ZERO, |acc, p| acc + p.elapsed);
        let travelled = motions
            .get(&Phase::Decelerate)
            .and_then(|list| list.last())
            .map(|m| m.offset)
            .unwrap_or(si::Length::ZERO);
        let avg_speed = if elapsed > si::Time::ZERO {
            travelled / elapsed
        } else {
            si::Velocity::ZERO
        };
        Self {
            segment: segment.to_string(),
            engine: engine.clone(),
            unit_system: config.unit_system,
            distance: params.distance,
            elapsed,
            grade: params.grade,
            speed_limit: params.speed_limit,
            car_count: params.car_count(),
            train_mass: params.train_mass(),
            min_power: minimum_horsepower(
                params.speed_limit,
                params.train_mass(),
                params.grade,
                config.hp_per_ton,
            ),
            avg_speed,
            phases,
        }
    }

    /// False when the simulation found the segment impossible to traverse.
    pub fn has_motion(&self) -> bool {
        self.elapsed > si::Time::ZERO
    }
}

impl SerdeAPI for MotionReport {}

impl fmt::Display for MotionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.unit_system;
        writeln!(
            f,
            "Route {}: {}, grade {:.1}%, speed limit {}",
            self.segment,
            units.fmt_distance(self.distance),
            self.grade.get::<si::percent>(),
            units.fmt_speed(self.speed_limit),
        )?;
        writeln!(
            f,
            "Engine {} ({}): {}, {}",
            self.engine.model,
            self.engine.engine_type,
            units.fmt_mass(self.engine.weight),
            units.fmt_power(self.engine.power),
        )?;
        if !self.has_motion() {
            return writeln!(
                f,
                "Train: {} cars, {}: no motion possible; minimum power {}",
                self.car_count,
                units.fmt_mass(self.train_mass),
                units.fmt_power(self.min_power),
            );
        }
        writeln!(
            f,
            "Train: {} cars, {}, minimum power {}, average speed {}",
            self.car_count,
            units.fmt_mass(self.train_mass),
            units.fmt_power(self.min_power),
            units.fmt_speed(self.avg_speed),
        )?;
        write!(f, "{:>14}", "")?;
        for summary in &self.phases {
            write!(f, "{:>10}", summary.phase.label())?;
        }
        writeln!(f)?;
        write!(f, "{:>14}", "elapsed")?;
        for summary in &self.phases {
            write!(f, "{:>10}", fmt_hms(summary.elapsed))?;
        }
        writeln!(f)?;
        write!(f, "{:>14}", "max throttle")?;
        for summary in &self.phases {
            write!(f, "{:>9.1}%", summary.max_throttle.get::<si::percent>())?;
        }
        writeln!(f)?;
        write!(f, "{:>14}", "max brake")?;
        for summary in &self.phases {
            write!(f, "{:>9.1}%", summary.max_brake.get::<si::percent>())?;
        }
        writeln!(f)
    }
}

/// `hh:mm:ss` rendering of a time quantity.
fn fmt_hms(time: si::Time) -> String {
    let total = time.get::<si::second>().round().max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", total / 3_600, total % 3_600 / 60, total % 60)
}

/// One route segment to simulate: motion parameters plus the engine pulling
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub name: String,
    pub params: TrainMotionParams,
    pub engine: EngineSpec,
}

impl ObjState for RouteSegment {
    fn validate(&self) -> ValidationResults {
        let mut errors = ValidationErrors::new();
        if self.name.is_empty() {
            errors.push(anyhow!("Segment name must not be empty!"));
        }
        validate_field_real(&mut errors, &self.params, "Motion params");
        validate_field_real(&mut errors, &self.engine, "Engine spec");
        errors.make_err()
    }
}

impl SerdeAPI for RouteSegment {
    fn init(&mut self) -> Result<(), RailmotionError> {
        self.validate()
            .map_err(|errors| RailmotionError::Init(errors.to_string()))
    }
}

impl Valid for RouteSegment {
    fn valid() -> Self {
        Self {
            name: "Mainline 1".to_string(),
            params: TrainMotionParams::valid(),
            engine: EngineSpec::valid(),
        }
    }
}

/// Runs one simulation per segment and builds its report.  Segments are
/// independent immutable inputs, so the fan-out is parallel; output order
/// matches input order.
pub fn report_route(segments: &[RouteSegment], config: &ReportConfig) -> Vec<MotionReport> {
    segments
        .par_iter()
        .map(|segment| {
            let motions = TrainMotionSim::new(segment.params.clone()).get_train_motions();
            MotionReport::new(
                &segment.name,
                &segment.params,
                &segment.engine,
                config,
                &motions,
            )
        })
        .collect()
}
