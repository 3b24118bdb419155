use std::str::FromStr;

/// Which rule decides whether a pair of definitions sharing an identifier is an equivalence.
///
/// See [Collapse](crate::procedures::collapse::Collapse) for the rules themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollapseStrategy {
    /// Any two definitions of an axiom are an equivalence.
    Count = 0,

    /// Two definitions of an axiom are an equivalence if the second is the converse of the first.
    Converse,
}

impl CollapseStrategy {
    /// The minimum CollapseStrategy type.
    pub const MIN: CollapseStrategy = CollapseStrategy::Count;

    /// The maximum CollapseStrategy type.
    pub const MAX: CollapseStrategy = CollapseStrategy::Converse;
}

impl std::fmt::Display for CollapseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Converse => write!(f, "converse"),
        }
    }
}

impl FromStr for CollapseStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),

            "converse" => Ok(Self::Converse),

            _unknown_string => Err(()),
        }
    }
}
