//! A single classified job-title record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{HierarchyLevel, classify, compose};
use crate::error::Result;

/// Field values for building a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub employee_id: String,
    pub division: String,
    pub subdivision: String,
    pub job_code: String,
    pub raw_job_text: Option<String>,
    /// Manually supplied level; `None` classifies `raw_job_text`.
    pub hierarchy_level: Option<HierarchyLevel>,
}

/// One employee/job entry after ingestion and classification.
///
/// `final_title` is private and only ever written by the constructor and
/// the setters of its three inputs, so it always equals
/// `compose(division, subdivision, hierarchy_level)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    employee_id: String,
    division: String,
    subdivision: String,
    job_code: String,
    raw_job_text: Option<String>,
    hierarchy_level: HierarchyLevel,
    final_title: String,
    created_at: DateTime<Utc>,
}

impl Record {
    /// Build a record, classifying the job text when no level is supplied.
    ///
    /// Fails with `InvalidInput` when division or subdivision is blank.
    pub fn new(input: NewRecord, created_at: DateTime<Utc>) -> Result<Self> {
        let hierarchy_level = input
            .hierarchy_level
            .unwrap_or_else(|| classify(input.raw_job_text.as_deref()));
        let final_title = compose(&input.division, &input.subdivision, hierarchy_level)?;
        Ok(Self {
            employee_id: input.employee_id,
            division: input.division,
            subdivision: input.subdivision,
            job_code: input.job_code,
            raw_job_text: input.raw_job_text,
            hierarchy_level,
            final_title,
            created_at,
        })
    }

    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    #[must_use]
    pub fn division(&self) -> &str {
        &self.division
    }

    #[must_use]
    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    #[must_use]
    pub fn job_code(&self) -> &str {
        &self.job_code
    }

    #[must_use]
    pub fn raw_job_text(&self) -> Option<&str> {
        self.raw_job_text.as_deref()
    }

    #[must_use]
    pub const fn hierarchy_level(&self) -> HierarchyLevel {
        self.hierarchy_level
    }

    #[must_use]
    pub fn final_title(&self) -> &str {
        &self.final_title
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Change the division. The record is left untouched on error.
    pub fn set_division(&mut self, division: impl Into<String>) -> Result<()> {
        let division = division.into();
        self.final_title = compose(&division, &self.subdivision, self.hierarchy_level)?;
        self.division = division;
        Ok(())
    }

    /// Change the subdivision. The record is left untouched on error.
    pub fn set_subdivision(&mut self, subdivision: impl Into<String>) -> Result<()> {
        let subdivision = subdivision.into();
        self.final_title = compose(&self.division, &subdivision, self.hierarchy_level)?;
        self.subdivision = subdivision;
        Ok(())
    }

    /// Override the classified level.
    pub fn set_hierarchy_level(&mut self, level: HierarchyLevel) -> Result<()> {
        self.final_title = compose(&self.division, &self.subdivision, level)?;
        self.hierarchy_level = level;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JtError;

    fn input() -> NewRecord {
        NewRecord {
            employee_id: "105804".into(),
            division: "Commercial".into(),
            subdivision: "Strategy".into(),
            job_code: "A409".into(),
            raw_job_text: Some("Senior Director of Ops".into()),
            hierarchy_level: None,
        }
    }

    #[test]
    fn new_classifies_and_composes() {
        let record = Record::new(input(), Utc::now()).unwrap();
        assert_eq!(record.hierarchy_level(), HierarchyLevel::SeniorDirector);
        assert_eq!(record.final_title(), "Commercial Strategy Senior Director");
    }

    #[test]
    fn manual_level_skips_classification() {
        let record = Record::new(
            NewRecord {
                hierarchy_level: Some(HierarchyLevel::Chief),
                ..input()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(record.final_title(), "Chief Commercial Officer");
    }

    #[test]
    fn missing_job_text_defaults_to_specialist() {
        let record = Record::new(
            NewRecord {
                raw_job_text: None,
                ..input()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(record.hierarchy_level(), HierarchyLevel::Specialist);
    }

    #[test]
    fn blank_division_is_rejected() {
        let err = Record::new(
            NewRecord {
                division: "  ".into(),
                ..input()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, JtError::InvalidInput(_)));
    }

    #[test]
    fn setters_recompute_title() {
        let mut record = Record::new(input(), Utc::now()).unwrap();
        record.set_hierarchy_level(HierarchyLevel::Manager).unwrap();
        assert_eq!(record.final_title(), "Commercial Strategy Manager");
        record.set_subdivision("Pricing").unwrap();
        assert_eq!(record.final_title(), "Commercial Pricing Manager");
        record.set_division("Finance").unwrap();
        assert_eq!(record.final_title(), "Finance Pricing Manager");
    }

    #[test]
    fn failed_setter_leaves_record_unchanged() {
        let mut record = Record::new(input(), Utc::now()).unwrap();
        let before = record.clone();
        assert!(record.set_division("").is_err());
        assert!(record.set_subdivision(" ").is_err());
        assert_eq!(record, before);
    }
}
