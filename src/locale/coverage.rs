//! Translation coverage of a candidate locale against the base locale.

use serde::{
    Deserialize,
    Serialize,
};

use super::tree::{
    LocaleNode,
    LocaleTree,
    join_key,
};

/// Decides whether a candidate leaf counts as translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationPolicy {
    /// The candidate leaf must be non-empty and differ from the base text.
    ///
    /// Strings that are legitimately identical in both languages (proper
    /// nouns, brand names) are counted as untranslated.
    #[default]
    DistinctValue,
    /// Any non-empty candidate leaf counts.
    Presence,
}

impl TranslationPolicy {
    /// Whether `candidate` counts as a translation of `base`.
    fn is_translated(self, base: &str, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match self {
            Self::DistinctValue => candidate != base,
            Self::Presence => true,
        }
    }
}

/// Counters collected while walking the base tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// String leaves in the base tree.
    pub total: usize,
    /// Leaves the candidate translates.
    pub translated: usize,
    /// Dotted keys of the untranslated leaves, in traversal order.
    pub missing: Vec<String>,
}

impl CoverageReport {
    /// Percentage of translated leaves, 0 to 100.
    ///
    /// A base tree without any leaf yields `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.translated as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.translated == self.total
    }
}

/// Percentage of base leaves translated by `candidate`, judged by value.
///
/// ```
/// use chat_ui_core::locale::{LocaleTree, compute_coverage};
///
/// let base = LocaleTree::parse(r#"{"a": "x", "b": {"c": "y", "d": "z"}}"#).unwrap();
/// let candidate = LocaleTree::parse(r#"{"a": "translated-x", "b": {"c": "y"}}"#).unwrap();
///
/// let percent = compute_coverage(&base, Some(&candidate));
/// assert!((percent - 100.0 / 3.0).abs() < 1e-9);
/// assert_eq!(compute_coverage(&base, None), 0.0);
/// ```
#[must_use]
pub fn compute_coverage(base: &LocaleTree, candidate: Option<&LocaleTree>) -> f64 {
    compute_coverage_with(base, candidate, TranslationPolicy::default())
}

#[must_use]
pub fn compute_coverage_with(
    base: &LocaleTree,
    candidate: Option<&LocaleTree>,
    policy: TranslationPolicy,
) -> f64 {
    coverage_report(base, candidate, policy, ".").percent()
}

/// Walks `base` and compares every leaf with the same path in `candidate`.
///
/// Keys present only in `candidate` are ignored. A namespace missing from the
/// candidate counts all of its leaves as untranslated.
#[must_use]
pub fn coverage_report(
    base: &LocaleTree,
    candidate: Option<&LocaleTree>,
    policy: TranslationPolicy,
    separator: &str,
) -> CoverageReport {
    let mut report = CoverageReport::default();
    walk(base, candidate, policy, separator, None, &mut report);
    tracing::debug!(
        total = report.total,
        translated = report.translated,
        ?policy,
        "Computed locale coverage"
    );
    report
}

/// Counts the leaves of `base` at `prefix` into `report`.
fn walk(
    base: &LocaleTree,
    candidate: Option<&LocaleTree>,
    policy: TranslationPolicy,
    separator: &str,
    prefix: Option<&str>,
    report: &mut CoverageReport,
) {
    for (key, node) in base.iter() {
        let full_key = join_key(prefix, key, separator);
        let counterpart = candidate.and_then(|tree| tree.get(key));

        match node {
            LocaleNode::Leaf(base_text) => {
                report.total += 1;
                let translated = counterpart
                    .and_then(LocaleNode::as_leaf)
                    .is_some_and(|text| policy.is_translated(base_text, text));
                if translated {
                    report.translated += 1;
                } else {
                    report.missing.push(full_key);
                }
            }
            LocaleNode::Namespace(subtree) => {
                let nested = counterpart.and_then(LocaleNode::as_namespace);
                walk(subtree, nested, policy, separator, Some(&full_key), report);
            }
            LocaleNode::Malformed(kind) => {
                tracing::warn!(key = %full_key, kind, "Ignoring non-string locale value");
            }
        }
    }
}
