/// The level a constraint penalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreLevel {
    /// Any violation makes the layout infeasible.
    Hard,
    /// Ranks feasible layouts.
    Soft,
}

impl ScoreLevel {
    pub const fn suffix(self) -> &'static str {
        match self {
            ScoreLevel::Hard => "hard",
            ScoreLevel::Soft => "soft",
        }
    }
}
