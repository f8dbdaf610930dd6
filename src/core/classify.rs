//! Free-text hierarchy classification.
//!
//! Maps a job description to exactly one [`HierarchyLevel`] by walking an
//! ordered list of keyword rules; the first rule that fires decides. Level
//! names overlap ("senior director" also contains "director"), so the order
//! of [`RULES`] is the precedence policy and must not be rearranged.
//!
//! Keywords match at the start of a word. Abbreviations that would
//! otherwise fire inside longer words ("cto" in "director", "dir" in
//! "direct") must also end at a word boundary. Plain substring search
//! would let "cto" inside "director" classify every director as Chief.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::level::HierarchyLevel;

// =============================================================================
// RULE TABLE
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Keyword {
    /// Matches where a word starts with this text.
    Stem(&'static str),
    /// Matches only as a complete word or phrase.
    Word(&'static str),
}

use Keyword::{Stem, Word};

struct RuleSpec {
    level: HierarchyLevel,
    any: &'static [Keyword],
    unless: &'static [Keyword],
}

const NOT_SENIOR: &[Keyword] = &[Stem("senior"), Word("sr")];

const RULES: &[RuleSpec] = &[
    // 1
    RuleSpec {
        level: HierarchyLevel::Chief,
        any: &[
            Stem("chief"),
            Word("ceo"),
            Word("cfo"),
            Word("cio"),
            Word("cto"),
            Stem("president"),
            Stem("exec vp"),
        ],
        unless: &[],
    },
    // 2
    RuleSpec {
        level: HierarchyLevel::SeniorVicePresident,
        any: &[
            Word("sr vp"),
            Word("sr. vp"),
            Word("senior vp"),
            Stem("senior vice president"),
            Stem("sr vice president"),
            Word("svp"),
        ],
        unless: &[],
    },
    // 3
    RuleSpec {
        level: HierarchyLevel::VicePresident,
        any: &[Word("vp"), Stem("vice president"), Stem("vice pres")],
        unless: NOT_SENIOR,
    },
    // 4
    RuleSpec {
        level: HierarchyLevel::SeniorDirector,
        any: &[
            Stem("sr director"),
            Stem("sr. director"),
            Stem("senior director"),
            Word("sr dir"),
            Word("sr. dir"),
            Word("senior dir"),
        ],
        unless: &[],
    },
    // 5
    RuleSpec {
        level: HierarchyLevel::Director,
        any: &[Stem("director"), Word("dir")],
        unless: NOT_SENIOR,
    },
    // 6
    RuleSpec {
        level: HierarchyLevel::SeniorManager,
        any: &[
            Stem("sr manager"),
            Stem("sr. manager"),
            Stem("senior manager"),
            Stem("sr mgr"),
            Stem("sr. mgr"),
            Stem("senior mgr"),
        ],
        unless: &[],
    },
    // 7
    RuleSpec {
        level: HierarchyLevel::Manager,
        any: &[
            Stem("manager"),
            Stem("mgr"),
            Stem("supervisor"),
            Stem("supv"),
            Stem("lead"),
        ],
        unless: NOT_SENIOR,
    },
    // 8
    RuleSpec {
        level: HierarchyLevel::SeniorSpecialist,
        any: &[
            Stem("sr specialist"),
            Stem("sr. specialist"),
            Stem("senior specialist"),
            Stem("principal"),
            Stem("sr tech"),
            Stem("senior tech"),
            Stem("advisor"),
            Stem("sr prof"),
            Stem("senior prof"),
        ],
        unless: &[],
    },
    // 9
    RuleSpec {
        level: HierarchyLevel::Specialist,
        any: &[
            Stem("specialist"),
            Stem("technologist"),
            Stem("tech prof"),
            Stem("engineer"),
            Stem("tech"),
            Stem("technician"),
            Stem("scientist"),
        ],
        unless: &[],
    },
    // 10: there is no distinct senior analyst tier
    RuleSpec {
        level: HierarchyLevel::Analyst,
        any: &[
            Stem("sr analyst"),
            Stem("sr. analyst"),
            Stem("senior analyst"),
        ],
        unless: &[],
    },
    // 11
    RuleSpec {
        level: HierarchyLevel::Analyst,
        any: &[Stem("analyst")],
        unless: &[Stem("associate")],
    },
    // 12
    RuleSpec {
        level: HierarchyLevel::AssociateAnalyst,
        any: &[
            Stem("assoc analyst"),
            Stem("associate analyst"),
            Stem("jr analyst"),
            Stem("junior analyst"),
        ],
        unless: &[],
    },
    // 13
    RuleSpec {
        level: HierarchyLevel::SeniorOfficer,
        any: &[
            Stem("sr officer"),
            Stem("sr. officer"),
            Stem("senior officer"),
            Stem("sr secretary"),
            Stem("senior secretary"),
            Stem("sr assistant"),
            Stem("senior assistant"),
        ],
        unless: &[],
    },
    // 14
    RuleSpec {
        level: HierarchyLevel::Officer,
        any: &[
            Stem("officer"),
            Stem("clerk"),
            Stem("secretary"),
            Stem("assistant"),
            Stem("coordinator"),
            Stem("rep"),
            Stem("operator"),
            Stem("handler"),
        ],
        unless: &[],
    },
    // 15: bare seniority markers with no recognizable role
    RuleSpec {
        level: HierarchyLevel::SeniorSpecialist,
        any: &[Word("sr"), Stem("senior"), Stem("prin"), Stem("principal")],
        unless: &[],
    },
];

/// Rule number reported when no keyword rule fires.
pub const DEFAULT_RULE: usize = RULES.len() + 1;

struct Rule {
    level: HierarchyLevel,
    any: Regex,
    unless: Option<Regex>,
}

fn keyword_pattern(keywords: &[Keyword]) -> Regex {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|keyword| match keyword {
            Stem(text) => format!(r"\b{}", regex::escape(text)),
            Word(text) => format!(r"\b{}\b", regex::escape(text)),
        })
        .collect();
    Regex::new(&alternatives.join("|")).expect("keyword patterns are escaped literals")
}

static COMPILED_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|spec| Rule {
            level: spec.level,
            any: keyword_pattern(spec.any),
            unless: (!spec.unless.is_empty()).then(|| keyword_pattern(spec.unless)),
        })
        .collect()
});

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Outcome of classifying one job description, with the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub level: HierarchyLevel,
    /// 1-based position of the deciding rule; [`DEFAULT_RULE`] when none fired.
    pub rule: usize,
    /// The keyword text that fired, as it appears in the lower-cased input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

/// Classify a job description into a hierarchy level.
///
/// Total: absent, empty or unrecognizable text yields
/// [`HierarchyLevel::Specialist`].
#[must_use]
pub fn classify(job_text: Option<&str>) -> HierarchyLevel {
    classify_explained(job_text).level
}

/// Like [`classify`], also reporting which rule fired and on what keyword.
#[must_use]
pub fn classify_explained(job_text: Option<&str>) -> Classification {
    let text = job_text.unwrap_or_default().to_lowercase();

    for (idx, rule) in COMPILED_RULES.iter().enumerate() {
        let Some(found) = rule.any.find(&text) else {
            continue;
        };
        if rule.unless.as_ref().is_some_and(|veto| veto.is_match(&text)) {
            continue;
        }
        return Classification {
            level: rule.level,
            rule: idx + 1,
            trigger: Some(found.as_str().to_string()),
        };
    }

    Classification {
        level: HierarchyLevel::default(),
        rule: DEFAULT_RULE,
        trigger: None,
    }
}
