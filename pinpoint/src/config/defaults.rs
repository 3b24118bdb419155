//! Default values of the [Config](super::Config).

use super::{AssumptionMode, CollapseStrategy, WeightPolicy};

pub const ASSUMPTION_MODE: AssumptionMode = AssumptionMode::NoOpt;

pub const WEIGHT_POLICY: WeightPolicy = WeightPolicy::Dominant;

pub const COLLAPSE_STRATEGY: CollapseStrategy = CollapseStrategy::Count;

/// The KRSS relation token of an equivalence.
pub const EQUIVALENCE_MARKER: &str = "(equivalent";
