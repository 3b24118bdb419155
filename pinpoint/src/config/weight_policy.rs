use std::str::FromStr;

use crate::structures::wcnf::Weight;

/// How the weight of hard clauses is chosen.
///
/// Soft clauses always have weight 1, so a hard weight greater than the count of soft clauses ensures no hard clause is relaxed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WeightPolicy {
    /// One more than the top variable of the clause source.
    ///
    /// Dominant only while there are no more assumptions than the top variable.
    TopVar = 0,

    /// One more than the greater of the top variable and the count of assumptions.
    Dominant,
}

impl WeightPolicy {
    /// The minimum WeightPolicy type.
    pub const MIN: WeightPolicy = WeightPolicy::TopVar;

    /// The maximum WeightPolicy type.
    pub const MAX: WeightPolicy = WeightPolicy::Dominant;

    /// The hard weight for a clause source with the given top variable and count of soft clauses.
    pub fn hard_weight(&self, top_var: usize, soft_count: usize) -> Weight {
        match self {
            Self::TopVar => top_var as Weight + 1,
            Self::Dominant => std::cmp::max(top_var, soft_count) as Weight + 1,
        }
    }
}

impl std::fmt::Display for WeightPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopVar => write!(f, "top-var"),
            Self::Dominant => write!(f, "dominant"),
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-var" => Ok(Self::TopVar),

            "dominant" => Ok(Self::Dominant),

            _unknown_string => Err(()),
        }
    }
}
