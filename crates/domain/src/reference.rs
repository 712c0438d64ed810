//! Reference data — subjects and grade levels, fetched once and read-only.

use serde::{Deserialize, Serialize};

use crate::id::{GradeLevelId, SubjectId};

/// A taught subject (Math, Physics, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

/// A sub-level within an academic domain, e.g. `O-level` / `O2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeLevel {
    pub id: GradeLevelId,
    pub domain: String,
    pub sub_level: String,
}

/// Whether a submitted label names a reference entry.
///
/// Every label (subject, domain, sub-level) is compared the same way:
/// surrounding whitespace ignored, ASCII case ignored.
#[must_use]
pub fn same_label(reference: &str, submitted: &str) -> bool {
    reference.trim().eq_ignore_ascii_case(submitted.trim())
}

/// Distinct domains present in `levels`, in first-seen order.
#[must_use]
pub fn domains(levels: &[GradeLevel]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for level in levels {
        if !out.iter().any(|d| same_label(d, &level.domain)) {
            out.push(level.domain.clone());
        }
    }
    out
}

/// Grade levels belonging to `selected` domains.
///
/// Ordered by the selection first, then by reference order within a domain.
#[must_use]
pub fn sub_levels_for<'a>(levels: &'a [GradeLevel], selected: &[String]) -> Vec<&'a GradeLevel> {
    selected
        .iter()
        .flat_map(|domain| {
            levels
                .iter()
                .filter(move |lvl| same_label(&lvl.domain, domain))
        })
        .collect()
}

/// Find a subject by its display name.
#[must_use]
pub fn find_subject<'a>(subjects: &'a [Subject], name: &str) -> Option<&'a Subject> {
    subjects
        .iter()
        .find(|subject| same_label(&subject.name, name))
}

/// The reference spelling of a submitted domain label.
#[must_use]
pub fn find_domain<'a>(levels: &'a [GradeLevel], name: &str) -> Option<&'a str> {
    levels
        .iter()
        .find(|lvl| same_label(&lvl.domain, name))
        .map(|lvl| lvl.domain.as_str())
}

/// Find the grade level named `sub_level` within one of the `selected` domains.
#[must_use]
pub fn find_sub_level<'a>(
    levels: &'a [GradeLevel],
    selected: &[String],
    sub_level: &str,
) -> Option<&'a GradeLevel> {
    sub_levels_for(levels, selected)
        .into_iter()
        .find(|lvl| same_label(&lvl.sub_level, sub_level))
}


#[cfg(test)]
mod tests {
    use super::fixtures::{grade_levels, subjects};
    use super::*;

    #[test]
    fn should_list_distinct_domains_in_reference_order() {
        assert_eq!(
            domains(&grade_levels()),
            vec!["O-level", "A-level", "Intermediate"]
        );
    }

    #[test]
    fn should_return_no_sub_levels_when_no_domain_selected() {
        assert!(sub_levels_for(&grade_levels(), &[]).is_empty());
    }

    #[test]
    fn should_order_sub_levels_by_selection() {
        let levels = grade_levels();
        let selected = vec!["Intermediate".to_string(), "A-level".to_string()];
        let names: Vec<&str> = sub_levels_for(&levels, &selected)
            .iter()
            .map(|lvl| lvl.sub_level.as_str())
            .collect();
        assert_eq!(names, vec!["Part 1", "Part 2", "AS", "A2"]);
    }

    #[test]
    fn should_match_every_label_kind_ignoring_case_and_spaces() {
        let levels = grade_levels();
        let selected = vec![" o-LEVEL ".to_string()];

        assert_eq!(sub_levels_for(&levels, &selected).len(), 3);
        assert_eq!(
            find_sub_level(&levels, &selected, "o2 ").unwrap().id,
            GradeLevelId::new(2)
        );
        assert_eq!(find_domain(&levels, "a-level"), Some("A-level"));
        assert!(find_subject(&subjects(), " PHYSICS").is_some());
    }

    #[test]
    fn should_not_find_unknown_domain() {
        assert!(find_domain(&grade_levels(), "University").is_none());
    }

    #[test]
    fn should_find_subject_ignoring_case() {
        let subjects = subjects();
        assert_eq!(find_subject(&subjects, "math").unwrap().id, SubjectId::new(1));
        assert!(find_subject(&subjects, "Biology").is_none());
    }

    #[test]
    fn should_not_find_sub_level_outside_selected_domains() {
        let levels = grade_levels();
        let selected = vec!["O-level".to_string()];
        assert!(find_sub_level(&levels, &selected, "O2").is_some());
        assert!(find_sub_level(&levels, &selected, "AS").is_none());
    }
}
