//! Profile Finder — one search per job description, filtered to profile links.
//!
//! Results are cached per normalized query in a bounded, expiring cache owned
//! by the finder. Search failures degrade to zero candidates and are not cached.

use std::time::Duration;

use moka::future::Cache;
use tracing::{info, warn};

use crate::models::candidate::Candidate;
use crate::search::serpapi::{SearchResult, SerpApiClient};

/// Only links containing this marker are profiles.
pub const PROFILE_PATH_MARKER: &str = "linkedin.com/in";
/// Result-count hint sent to the provider.
pub const RESULT_COUNT: u32 = 20;

const UNKNOWN_NAME: &str = "Unknown";
const MISSING_HEADLINE: &str = "N/A";
const NAME_SEPARATORS: &[&str] = &["–", "—", " - ", " | "];

pub struct ProfileFinder {
    client: SerpApiClient,
    cache: Cache<String, Vec<Candidate>>,
}

impl ProfileFinder {
    pub fn new(client: SerpApiClient, cache_capacity: u64, cache_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_capacity)
            .time_to_live(cache_ttl)
            .build();
        Self { client, cache }
    }

    /// Bare candidates (no scores) for a job description.
    pub async fn find(&self, job_description: &str) -> Vec<Candidate> {
        let key = cache_key(job_description);
        if let Some(profiles) = self.cache.get(&key).await {
            info!("Search cache hit: {} profiles", profiles.len());
            return profiles;
        }

        let results = match self
            .client
            .search(&search_query(job_description), RESULT_COUNT)
            .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!("Profile search failed: {e}");
                return Vec::new();
            }
        };

        let total = results.len();
        let profiles = to_profiles(results);
        info!("Profiles found: {}/{} search results", profiles.len(), total);

        self.cache.insert(key, profiles.clone()).await;
        profiles
    }
}

/// Lower-cased, trimmed job description.
pub fn cache_key(job_description: &str) -> String {
    job_description.trim().to_lowercase()
}

pub fn search_query(job_description: &str) -> String {
    format!("site:{PROFILE_PATH_MARKER} \"{job_description}\"")
}

/// Keeps profile links and maps them to bare candidates, preserving order.
pub fn to_profiles(results: Vec<SearchResult>) -> Vec<Candidate> {
    results
        .into_iter()
        .filter_map(|result| {
            let link = result.link.filter(|l| l.contains(PROFILE_PATH_MARKER))?;
            let headline = result
                .snippet
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| MISSING_HEADLINE.to_string());

            let mut candidate = Candidate::new(display_name(result.title.as_deref()), headline, &link);
            candidate.github_url = github_guess(&link);
            Some(candidate)
        })
        .collect()
}

/// Text before the first dash-like separator in a result title.
fn display_name(title: Option<&str>) -> String {
    let Some(title) = title else {
        return UNKNOWN_NAME.to_string();
    };

    let end = NAME_SEPARATORS
        .iter()
        .filter_map(|sep| title.find(sep))
        .min()
        .unwrap_or(title.len());

    let name = title[..end].trim();
    if name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// `https://github.com/<profile slug>`, a guess from the last path segment.
fn github_guess(link: &str) -> Option<String> {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .filter(|slug| *slug != "in" && !slug.contains('.'))
        .map(|slug| format!("https://github.com/{slug}"))
}
