//! Constraint identification.
//!
//! Every term of the layout score is attributed to a named constraint so
//! that a score can be decomposed and audited.

use crate::score::ScoreLevel;

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use loadplan_core::{ConstraintRef, ScoreLevel};
///
/// let cr = ConstraintRef::hard("layout", "Overlap");
/// assert_eq!(cr.full_name(), "layout/Overlap");
/// assert_eq!(cr.level, ScoreLevel::Hard);
///
/// let bare = ConstraintRef::soft("", "NotPreferredSide");
/// assert_eq!(bare.full_name(), "NotPreferredSide");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
    /// Score level the constraint penalizes.
    pub level: ScoreLevel,
}

impl ConstraintRef {
    /// Creates a reference to a hard constraint.
    pub fn hard(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            level: ScoreLevel::Hard,
        }
    }

    /// Creates a reference to a soft constraint.
    pub fn soft(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            level: ScoreLevel::Soft,
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }

    /// Returns true for constraints that decide feasibility.
    pub fn is_hard(&self) -> bool {
        self.level == ScoreLevel::Hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let cr = ConstraintRef::hard("layout", "OutsideSurface");
        assert_eq!(cr.full_name(), "layout/OutsideSurface");
        assert!(cr.is_hard());
    }

    #[test]
    fn test_empty_package() {
        let cr = ConstraintRef::soft("", "MandatoryDistance");
        assert_eq!(cr.full_name(), "MandatoryDistance");
        assert!(!cr.is_hard());
    }
}
