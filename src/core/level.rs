//! Hierarchy levels.
//!
//! The thirteen seniority tiers a job title can be composed from, ordered
//! from lowest (`Officer`) to highest (`Chief`). The derived `Ord` follows
//! declaration order, so comparisons between levels are rank comparisons.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{JtError, Result};

/// One of the 13 ranked job-seniority tiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HierarchyLevel {
    Officer,
    SeniorOfficer,
    AssociateAnalyst,
    Analyst,
    #[default]
    Specialist,
    SeniorSpecialist,
    Manager,
    SeniorManager,
    Director,
    SeniorDirector,
    VicePresident,
    SeniorVicePresident,
    /// Top of the organization.
    Chief,
}

impl HierarchyLevel {
    /// All levels, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Officer,
        Self::SeniorOfficer,
        Self::AssociateAnalyst,
        Self::Analyst,
        Self::Specialist,
        Self::SeniorSpecialist,
        Self::Manager,
        Self::SeniorManager,
        Self::Director,
        Self::SeniorDirector,
        Self::VicePresident,
        Self::SeniorVicePresident,
        Self::Chief,
    ];

    /// Iterate over all levels, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Zero-based rank (Officer = 0, Chief = 12).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Name shown to users and used in composed titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Officer => "Officer",
            Self::SeniorOfficer => "Senior Officer",
            Self::AssociateAnalyst => "Associate Analyst",
            Self::Analyst => "Analyst",
            Self::Specialist => "Specialist",
            Self::SeniorSpecialist => "Senior Specialist",
            Self::Manager => "Manager",
            Self::SeniorManager => "Senior Manager",
            Self::Director => "Director",
            Self::SeniorDirector => "Senior Director",
            Self::VicePresident => "Vice President",
            Self::SeniorVicePresident => "Senior Vice President",
            Self::Chief => "Chief (Top of the Org)",
        }
    }

    /// Kebab-case identifier used on the command line and in JSON.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::SeniorOfficer => "senior-officer",
            Self::AssociateAnalyst => "associate-analyst",
            Self::Analyst => "analyst",
            Self::Specialist => "specialist",
            Self::SeniorSpecialist => "senior-specialist",
            Self::Manager => "manager",
            Self::SeniorManager => "senior-manager",
            Self::Director => "director",
            Self::SeniorDirector => "senior-director",
            Self::VicePresident => "vice-president",
            Self::SeniorVicePresident => "senior-vice-president",
            Self::Chief => "chief",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for HierarchyLevel {
    type Err = JtError;

    /// Accepts the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::all()
            .find(|level| {
                level.display_name().eq_ignore_ascii_case(wanted)
                    || level.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| JtError::InvalidInput(format!("unknown hierarchy level: {s}")))
    }
}
