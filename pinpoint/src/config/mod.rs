/*!
Configuration of an encoding or extraction.

All configuration is contained within [Config].
The encoder reads the assumption mode, weight policy, and strictness.
The extractor reads the collapse strategy and equivalence marker.
*/

mod config_option;
pub use config_option::ConfigOption;

mod assumption_mode;
pub use assumption_mode::AssumptionMode;

mod collapse;
pub use collapse::CollapseStrategy;

mod weight_policy;
pub use weight_policy::WeightPolicy;

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How assumptions are read.
    pub assumption_mode: ConfigOption<AssumptionMode>,

    /// How the weight of hard clauses is chosen.
    pub weight_policy: ConfigOption<WeightPolicy>,

    /// Whether a warning found while encoding aborts the encoding.
    pub strict: ConfigOption<bool>,

    /// Which rule collapses a pair of definitions into an equivalence.
    pub collapse: ConfigOption<CollapseStrategy>,

    /// The relation token written in place of the relation of a collapsed equivalence.
    pub equivalence_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assumption_mode: ConfigOption {
                name: "mode",
                min: AssumptionMode::MIN,
                max: AssumptionMode::MAX,
                value: defaults::ASSUMPTION_MODE,
            },

            weight_policy: ConfigOption {
                name: "weight",
                min: WeightPolicy::MIN,
                max: WeightPolicy::MAX,
                value: defaults::WEIGHT_POLICY,
            },

            strict: ConfigOption {
                name: "strict",
                min: false,
                max: true,
                value: false,
            },

            collapse: ConfigOption {
                name: "collapse",
                min: CollapseStrategy::MIN,
                max: CollapseStrategy::MAX,
                value: defaults::COLLAPSE_STRATEGY,
            },

            equivalence_marker: defaults::EQUIVALENCE_MARKER.to_string(),
        }
    }
}
