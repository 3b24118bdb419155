/*!
Reports from an encoding.

Warnings do not stop an encoding, unless the [strict](crate::config::Config::strict) option is set.
Each warning likely points to malformed upstream data, and so each is logged as it is found.
*/

use crate::{
    config::AssumptionMode,
    structures::{literal::Literal, wcnf::Weight},
};

/// Something unexpected, though not invalid, found while encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// No assumptions were read, so the encoding has no soft clauses.
    EmptyAssumptions(AssumptionMode),

    /// The variable of the query is greater than the top variable of the clause source.
    QueryBeyondTopVar { query: Literal, top_var: usize },

    /// The variable of an assumption is greater than the top variable of the clause source.
    AssumptionBeyondTopVar { assumption: Literal, top_var: usize },

    /// The hard weight was raised above the top variable, to exceed the sum of soft weights.
    WeightRaised { hard_weight: Weight, top_var: usize },

    /// The sum of soft weights is not less than the hard weight, so a hard clause may be relaxed.
    HardWeightDominated {
        hard_weight: Weight,
        soft_weight: Weight,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAssumptions(mode) => write!(f, "no assumptions read ({mode})"),
            Self::QueryBeyondTopVar { query, top_var } => {
                write!(f, "query {query} is beyond the top variable {top_var}")
            }
            Self::AssumptionBeyondTopVar {
                assumption,
                top_var,
            } => write!(f, "assumption {assumption} is beyond the top variable {top_var}"),
            Self::WeightRaised {
                hard_weight,
                top_var,
            } => write!(f, "hard weight raised to {hard_weight}, above top variable {top_var}"),
            Self::HardWeightDominated {
                hard_weight,
                soft_weight,
            } => write!(f, "hard weight {hard_weight} does not exceed soft weight {soft_weight}"),
        }
    }
}
