//! Provider directory and insurance plan lookup.
//!
//! A small static table drives both the provider profile screens and the
//! insurance modal. Plan search is a pure in-memory filter: scope to one
//! provider (or the deduplicated union of all of them), then keep plans
//! whose name contains the query, compared case- and accent-insensitively
//! so "cigna", "CIGNA", and "Cígna" all land on the same row.

use crate::util::search_key;

/// One clinician on staff.
#[derive(Clone, Copy, Debug)]
pub struct Provider {
    /// Stable identifier used for the profile route.
    pub id: &'static str,
    /// Display name, as printed on the door.
    pub name: &'static str,
    /// Dictionary key of the specialty label.
    pub specialty_key: &'static str,
    /// Dictionary key of the biography paragraph.
    pub bio_key: &'static str,
    /// Languages spoken in consultation.
    pub languages: &'static [&'static str],
    /// Insurance plans this provider accepts, in display order.
    pub plans: &'static [&'static str],
}

/// The clinic's providers, in directory order.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        id: "jaime-acosta",
        name: "Dr. Jaime A. Acosta",
        specialty_key: "provider.specialty.family",
        bio_key: "provider.bio.acosta",
        languages: &["English", "Español"],
        plans: &[
            "AETNA",
            "AMBETTER",
            "AVMED",
            "BLUE CROSS BLUE SHIELD",
            "CIGNA",
            "FLORIDA BLUE",
            "HUMANA",
            "MEDICARE",
            "OSCAR HEALTH",
            "SIMPLY HEALTHCARE",
            "TRICARE",
            "UNITED HEALTHCARE",
        ],
    },
    Provider {
        id: "maria-perez",
        name: "Dra. María Pérez",
        specialty_key: "provider.specialty.peds",
        bio_key: "provider.bio.perez",
        languages: &["English", "Español"],
        plans: &[
            "AETNA",
            "AMBETTER",
            "CIGNA",
            "FLORIDA BLUE",
            "FLORIDA KIDCARE",
            "HUMANA",
            "MEDICAID",
            "SIMPLY HEALTHCARE",
            "SUNSHINE HEALTH",
            "UNITED HEALTHCARE",
        ],
    },
];

/// Find a provider by its stable id.
pub fn provider_by_id(id: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Find a provider by display name, accent- and case-insensitively.
pub fn provider_by_name(name: &str) -> Option<&'static Provider> {
    let key = search_key(name);
    PROVIDERS.iter().find(|p| search_key(p.name) == key)
}

/// What: Search accepted insurance plans.
///
/// Inputs:
/// - `provider_filter`: provider display name or id scoping the search;
///   `None`/empty means all providers. An unknown provider yields an empty
///   result, not an error.
/// - `query`: free-text substring, matched case- and accent-insensitively;
///   empty means no filtering.
///
/// Output:
/// - Matching plan names, deduplicated and alphabetically ordered by their
///   folded key so the list is stable between renders.
pub fn search(provider_filter: Option<&str>, query: &str) -> Vec<String> {
    let mut candidates: Vec<&'static str> = match provider_filter.map(str::trim) {
        None | Some("") => {
            let mut all: Vec<&'static str> = PROVIDERS
                .iter()
                .flat_map(|p| p.plans.iter().copied())
                .collect();
            all.sort_by_key(|p| search_key(p));
            all.dedup_by_key(|p| search_key(*p));
            all
        }
        Some(name) => match provider_by_name(name).or_else(|| provider_by_id(name)) {
            Some(p) => p.plans.to_vec(),
            None => Vec::new(),
        },
    };
    let needle = search_key(query.trim());
    if !needle.is_empty() {
        candidates.retain(|p| search_key(p).contains(&needle));
    }
    candidates.sort_by_key(|p| search_key(p));
    candidates.into_iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Empty query equals no filter
    ///
    /// - Input: search with empty and whitespace queries
    /// - Output: Identical result sets
    fn insurance_empty_query_is_no_filter() {
        let all = search(None, "");
        let ws = search(None, "   ");
        assert_eq!(all, ws);
        assert!(!all.is_empty());
    }

    #[test]
    /// What: Union across providers deduplicates shared plans
    ///
    /// - Input: Unscoped search
    /// - Output: CIGNA appears exactly once though both providers take it
    fn insurance_union_dedups() {
        let all = search(None, "");
        assert_eq!(all.iter().filter(|p| p.as_str() == "CIGNA").count(), 1);
        // Sorted by folded key.
        let mut sorted = all.clone();
        sorted.sort_by_key(|p| crate::util::search_key(p));
        assert_eq!(all, sorted);
    }

    #[test]
    /// What: Provider scoping with case/accent-insensitive matching
    ///
    /// - Input: Provider "Dr. Jaime A. Acosta", query "cigna"
    /// - Output: Exactly ["CIGNA"]
    fn insurance_provider_scoped_query() {
        let hits = search(Some("Dr. Jaime A. Acosta"), "cigna");
        assert_eq!(hits, vec!["CIGNA".to_string()]);
    }

    #[test]
    /// What: Accent-folded provider and query matching
    ///
    /// - Input: Provider name typed without accents; accented query
    /// - Output: Scoping and matching both succeed
    fn insurance_accent_folding() {
        let hits = search(Some("dra. maria perez"), "");
        assert_eq!(hits.len(), PROVIDERS[1].plans.len());
        let kid = search(Some("maria-perez"), "kídcare");
        assert_eq!(kid, vec!["FLORIDA KIDCARE".to_string()]);
    }

    #[test]
    /// What: Unknown provider yields empty, not an error
    ///
    /// - Input: A name not in the directory
    /// - Output: Empty vec
    fn insurance_unknown_provider_empty() {
        assert!(search(Some("Dr. Nobody"), "").is_empty());
        assert!(search(Some("Dr. Nobody"), "cigna").is_empty());
    }

    #[test]
    /// What: Search is idempotent and stably ordered
    ///
    /// - Input: The same arguments twice
    /// - Output: Identical vectors
    fn insurance_idempotent() {
        assert_eq!(search(Some("jaime-acosta"), "health"), search(Some("jaime-acosta"), "health"));
        assert_eq!(
            search(Some("jaime-acosta"), "health"),
            vec!["OSCAR HEALTH".to_string(), "SIMPLY HEALTHCARE".to_string(), "UNITED HEALTHCARE".to_string()]
        );
    }
}
