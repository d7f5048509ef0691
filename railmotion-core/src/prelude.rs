pub use crate::error::{RailmotionError, RailmotionResult};
pub use crate::traits::SerdeAPI;
pub use crate::train::{
    minimum_horsepower, report_route, EngineSpec, EngineType, MotionReport, Phase, ReportConfig,
    RouteSegment, TrainMotion, TrainMotionParams, TrainMotionSim, TrainMotions, TrainMotionsExt,
};
pub use crate::units::UnitSystem;
pub use crate::validate::{ObjState, Valid};
