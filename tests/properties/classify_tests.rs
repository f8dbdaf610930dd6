use proptest::prelude::*;

use jobtitle::core::classify::DEFAULT_RULE;
use jobtitle::core::{HierarchyLevel, classify, classify_explained, compose};

fn arb_level() -> impl Strategy<Value = HierarchyLevel> {
    prop::sample::select(HierarchyLevel::ALL.to_vec())
}

const KEYWORDS: [&str; 12] = [
    "chief", "svp", "vp", "senior director", "director", "manager", "lead", "specialist",
    "engineer", "analyst", "clerk", "principal",
];

proptest! {
    #[test]
    fn classify_is_deterministic(text in ".{0,80}") {
        prop_assert_eq!(classify(Some(&text)), classify(Some(&text)));
    }

    #[test]
    fn classify_ignores_case(text in "[a-zA-Z .]{0,60}") {
        prop_assert_eq!(
            classify(Some(&text.to_uppercase())),
            classify(Some(&text.to_lowercase()))
        );
    }

    #[test]
    fn default_rule_means_specialist_without_trigger(text in ".{0,80}") {
        let explained = classify_explained(Some(&text));
        prop_assert!(explained.rule >= 1 && explained.rule <= DEFAULT_RULE);
        if explained.rule == DEFAULT_RULE {
            prop_assert_eq!(explained.level, HierarchyLevel::Specialist);
            prop_assert!(explained.trigger.is_none());
        } else {
            let trigger = explained.trigger.unwrap();
            prop_assert!(text.to_lowercase().contains(&trigger));
        }
    }

    #[test]
    fn chief_keywords_win_anywhere(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        keyword in prop::sample::select(KEYWORDS.to_vec()),
    ) {
        let text = format!("{prefix} {keyword} chief {suffix}");
        prop_assert_eq!(classify(Some(&text)), HierarchyLevel::Chief);
    }

    #[test]
    fn compose_accepts_any_nonblank_names(
        division in "[A-Za-z][A-Za-z -]{0,20}",
        subdivision in "[A-Za-z][A-Za-z -]{0,20}",
        level in arb_level(),
    ) {
        let title = compose(&division, &subdivision, level).unwrap();
        prop_assert!(title.contains(division.as_str()));
        if level == HierarchyLevel::Chief {
            prop_assert!(title.starts_with("Chief ") && title.ends_with(" Officer"));
        } else {
            prop_assert!(title.ends_with(level.display_name()));
            prop_assert!(title.contains(subdivision.as_str()));
        }
    }

    #[test]
    fn compose_rejects_blank_division(
        blank in "[ \t]{0,4}",
        subdivision in "[A-Za-z]{1,10}",
        level in arb_level(),
    ) {
        prop_assert!(compose(&blank, &subdivision, level).is_err());
    }
}
