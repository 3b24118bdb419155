use std::str::FromStr;

/// How assumptions are laid out by the upstream reasoner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssumptionMode {
    /// One assumption per line, as the first token of the line.
    ///
    /// Any further tokens on a line are ignored.
    NoOpt = 0,

    /// A single line of assumptions restricted to the cone of influence of the query, ending with a terminator.
    ///
    /// Any further lines are ignored.
    Coi,
}

impl std::fmt::Display for AssumptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpt => write!(f, "no-opt"),
            Self::Coi => write!(f, "coi"),
        }
    }
}

impl AssumptionMode {
    /// The minimum AssumptionMode type.
    pub const MIN: AssumptionMode = AssumptionMode::NoOpt;

    /// The maximum AssumptionMode type.
    pub const MAX: AssumptionMode = AssumptionMode::Coi;
}

impl FromStr for AssumptionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-opt" => Ok(Self::NoOpt),

            "coi" => Ok(Self::Coi),

            _unknown_string => Err(()),
        }
    }
}
