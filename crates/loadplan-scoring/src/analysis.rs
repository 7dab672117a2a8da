//! Score analysis types for detailed constraint tracking.
//!
//! An explanation lists, per constraint, every match with the parts
//! involved, and can be regrouped per part as indictments.

use std::collections::{BTreeMap, HashMap};

use loadplan_core::{ConstraintRef, HardSoftScore, Layout, Part, PartId, Score};
use smallvec::SmallVec;

use crate::constraints::LayoutConstraint;

/// Justification for why a constraint matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintJustification {
    /// Parts involved in the match.
    pub parts: SmallVec<[PartId; 2]>,
    /// Human-readable description of why the constraint matched.
    pub description: String,
}

impl ConstraintJustification {
    /// Creates a justification from parts, naming them by part number.
    pub fn from_parts(parts: &[&Part]) -> Self {
        let description = if parts.is_empty() {
            "No parts".to_string()
        } else {
            parts
                .iter()
                .map(|p| p.part_number())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            parts: parts.iter().map(|p| p.id()).collect(),
            description,
        }
    }

    /// Creates a justification with a custom description.
    pub fn with_description(parts: &[PartId], description: String) -> Self {
        Self {
            parts: parts.iter().copied().collect(),
            description,
        }
    }
}

/// A detailed constraint match with part information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedConstraintMatch {
    /// Reference to the constraint that matched.
    pub constraint_ref: ConstraintRef,
    /// Score impact of this match.
    pub score: HardSoftScore,
    /// Justification with involved parts.
    pub justification: ConstraintJustification,
}

impl DetailedConstraintMatch {
    pub fn new(
        constraint_ref: ConstraintRef,
        score: HardSoftScore,
        justification: ConstraintJustification,
    ) -> Self {
        Self {
            constraint_ref,
            score,
            justification,
        }
    }
}

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone)]
pub struct ConstraintAnalysis {
    pub constraint_ref: ConstraintRef,
    /// Score per unit of penalty.
    pub weight: HardSoftScore,
    /// Total score from this constraint.
    pub score: HardSoftScore,
    pub matches: Vec<DetailedConstraintMatch>,
    pub is_hard: bool,
}

impl ConstraintAnalysis {
    /// Collects every match of `constraint` in `layout`.
    pub fn of(constraint: LayoutConstraint, layout: &Layout) -> Self {
        let constraint_ref = constraint.constraint_ref();
        let mut matches = Vec::new();
        let mut score = HardSoftScore::zero();
        constraint.evaluate(layout, &mut |parts, amount| {
            let impact = constraint.penalty(amount);
            score = score + impact;
            matches.push(DetailedConstraintMatch::new(
                constraint_ref.clone(),
                impact,
                ConstraintJustification::from_parts(parts),
            ));
        });
        Self {
            constraint_ref,
            weight: constraint.weight(),
            score,
            matches,
            is_hard: constraint.is_hard(),
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone)]
pub struct ScoreExplanation {
    pub score: HardSoftScore,
    pub constraint_analyses: Vec<ConstraintAnalysis>,
}

impl ScoreExplanation {
    pub fn new(score: HardSoftScore, constraint_analyses: Vec<ConstraintAnalysis>) -> Self {
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != HardSoftScore::zero())
            .collect()
    }

    /// Looks up the analysis of a constraint by name.
    pub fn analysis(&self, name: &str) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses.iter().find(|a| a.name() == name)
    }

    /// Returns all detailed matches across all constraints.
    pub fn all_matches(&self) -> Vec<&DetailedConstraintMatch> {
        self.constraint_analyses
            .iter()
            .flat_map(|a| &a.matches)
            .collect()
    }

    /// Regroups the matches per part.
    pub fn indictments(&self) -> IndictmentMap {
        IndictmentMap::from_matches(self.all_matches().into_iter().cloned())
    }
}

/// Explains the score of `layout` constraint by constraint.
///
/// The explanation's score always equals [`calculate_score`](crate::calculate_score).
pub fn explain(layout: &Layout) -> ScoreExplanation {
    let analyses: Vec<ConstraintAnalysis> = LayoutConstraint::ALL
        .into_iter()
        .map(|c| ConstraintAnalysis::of(c, layout))
        .collect();
    let score = analyses.iter().map(|a| a.score).sum();
    ScoreExplanation::new(score, analyses)
}

/// Analysis of how a single part impacts the score.
#[derive(Debug, Clone)]
pub struct Indictment {
    pub part_id: PartId,
    /// Total score impact from this part.
    pub score: HardSoftScore,
    /// Matches involving this part, grouped by constraint.
    pub constraint_matches: HashMap<ConstraintRef, Vec<DetailedConstraintMatch>>,
}

impl Indictment {
    pub fn new(part_id: PartId) -> Self {
        Self {
            part_id,
            score: HardSoftScore::zero(),
            constraint_matches: HashMap::new(),
        }
    }

    /// Adds a match to this indictment.
    pub fn add_match(&mut self, constraint_match: DetailedConstraintMatch) {
        self.score = self.score + constraint_match.score;
        self.constraint_matches
            .entry(constraint_match.constraint_ref.clone())
            .or_default()
            .push(constraint_match);
    }

    /// Returns the total number of constraint violations.
    pub fn match_count(&self) -> usize {
        self.constraint_matches.values().map(Vec::len).sum()
    }

    pub fn violated_constraints(&self) -> Vec<&ConstraintRef> {
        self.constraint_matches.keys().collect()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraint_matches.len()
    }
}

/// Indictments keyed by part id.
#[derive(Debug, Clone, Default)]
pub struct IndictmentMap {
    pub indictments: BTreeMap<PartId, Indictment>,
}

impl IndictmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an indictment map from a collection of detailed matches.
    ///
    /// A match involving two parts indicts both.
    pub fn from_matches(matches: impl IntoIterator<Item = DetailedConstraintMatch>) -> Self {
        let mut map = Self::new();
        for m in matches {
            for &part in &m.justification.parts {
                map.indictments
                    .entry(part)
                    .or_insert_with(|| Indictment::new(part))
                    .add_match(m.clone());
            }
        }
        map
    }

    pub fn get(&self, part: PartId) -> Option<&Indictment> {
        self.indictments.get(&part)
    }

    pub fn parts(&self) -> impl Iterator<Item = PartId> + '_ {
        self.indictments.keys().copied()
    }

    /// Returns parts sorted by worst score impact (most negative first).
    pub fn worst_parts(&self) -> Vec<PartId> {
        let mut parts: Vec<_> = self.parts().collect();
        parts.sort_by_key(|id| self.indictments[id].score);
        parts
    }

    pub fn len(&self) -> usize {
        self.indictments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indictments.is_empty()
    }
}
