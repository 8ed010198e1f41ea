//! Keyword tables for headline scoring, plus the term matcher they share.
//!
//! Tiers are listed highest first. A dimension takes the score of the first
//! tier with any matching term; tiers never add up.

/// One scoring tier: any of `terms` present in the headline yields `score`.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub score: f64,
    pub terms: &'static [&'static str],
}

pub const EDUCATION_TIERS: &[Tier] = &[
    Tier {
        score: 9.5,
        terms: &["phd", "ph.d", "doctorate", "doctoral", "postdoc"],
    },
    Tier {
        score: 8.5,
        terms: &["master's", "masters", "master of", "msc", "m.sc", "m.s.", "mba", "m.tech"],
    },
    Tier {
        score: 7.5,
        terms: &["bachelor's", "bachelors", "bachelor of", "bsc", "b.sc", "b.s.", "b.tech", "b.e."],
    },
];
pub const EDUCATION_BASELINE: f64 = 6.0;

pub const TRAJECTORY_TIERS: &[Tier] = &[
    Tier {
        score: 9.5,
        terms: &[
            "cto",
            "chief technology officer",
            "vp",
            "vice president",
            "director",
            "head of",
        ],
    },
    Tier {
        score: 8.5,
        terms: &[
            "senior",
            "sr.",
            "principal",
            "staff engineer",
            "tech lead",
            "technical lead",
            "lead engineer",
            "lead developer",
            "lead software",
            "lead",
        ],
    },
    Tier {
        score: 7.5,
        terms: &["manager"],
    },
    Tier {
        score: 5.5,
        terms: &[
            "junior",
            "jr.",
            "entry level",
            "entry-level",
            "intern",
            "internship",
            "new grad",
            "recent graduate",
            "graduate engineer",
        ],
    },
];
pub const TRAJECTORY_BASELINE: f64 = 6.0;

/// Team-lead titles rank with management, not with the senior tier's `lead`.
/// Longest first: they are cut out of the headline in this order.
pub const TEAM_LEAD_TERMS: &[&str] = &["team leader", "team lead", "team-lead"];
pub const TEAM_LEAD_SCORE: f64 = 7.5;

pub const COMPANY_TIERS: &[Tier] = &[
    Tier {
        score: 9.0,
        terms: &[
            "google",
            "googler",
            "googlers",
            "xoogler",
            "microsoft",
            "microsoftie",
            "apple",
            "amazon",
            "amazonian",
            "amazonians",
            "meta",
            "netflix",
        ],
    },
    Tier {
        score: 8.5,
        terms: &["founder", "co-founder", "cofounder", "startup", "startups"],
    },
    Tier {
        score: 7.0,
        terms: &["consultant", "consulting", "freelance", "freelancer"],
    },
];
pub const COMPANY_BASELINE: f64 = 6.0;

pub const LOCATION_TIERS: &[Tier] = &[
    Tier {
        score: 8.5,
        terms: &[
            "san francisco",
            "sf",
            "bay area",
            "silicon valley",
            "seattle",
            "new york",
            "nyc",
            "austin",
            "boston",
        ],
    },
    Tier {
        score: 7.5,
        terms: &["remote", "wfh", "work from home"],
    },
];
pub const LOCATION_BASELINE: f64 = 6.0;

pub const TENURE_TIERS: &[Tier] = &[
    Tier {
        score: 9.0,
        terms: &["10+", "15+", "20+", "25+", "30+"],
    },
    Tier {
        score: 8.0,
        terms: &["5+", "7+"],
    },
    Tier {
        score: 7.0,
        terms: &["3+", "4+"],
    },
    Tier {
        score: 6.0,
        terms: &["1+", "2+"],
    },
];
pub const TENURE_BASELINE: f64 = 6.0;

/// Technology vocabulary counted by the skills dimension. Each entry is one
/// skill with its spellings; a skill counts once however many of them appear.
pub const TECH_SKILLS: &[&[&str]] = &[
    &["python"],
    &["java"],
    &["javascript"],
    &["typescript"],
    &["react", "reactjs", "react.js"],
    &["node.js", "nodejs"],
    &["angular", "angularjs"],
    &["vue", "vuejs", "vue.js"],
    &["aws"],
    &["azure"],
    &["gcp"],
    &["docker"],
    &["kubernetes", "k8s"],
    &["sql"],
    &["postgresql", "postgres"],
    &["mongodb", "mongo"],
    &["machine learning"],
    &["ai"],
    &["ml"],
    &["data science"],
    &["golang"],
    &["rust"],
    &["c++"],
    &["devops"],
];
pub const SKILLS_BASELINE: f64 = 6.0;
pub const SKILL_INCREMENT: f64 = 0.8;

/// Score of the first tier with a matching term, or `baseline`.
/// `text` must already be lower-cased.
pub fn tier_score(text: &str, tiers: &[Tier], baseline: f64) -> f64 {
    tiers
        .iter()
        .find(|tier| tier.terms.iter().any(|term| mentions(text, term)))
        .map(|tier| tier.score)
        .unwrap_or(baseline)
}

/// Trajectory tier of `text` (lower-cased). A team-lead title scores 7.5 unless
/// the rest of the headline reaches a higher tier on its own.
pub fn trajectory_score(text: &str) -> f64 {
    if !TEAM_LEAD_TERMS.iter().any(|term| mentions(text, term)) {
        return tier_score(text, TRAJECTORY_TIERS, TRAJECTORY_BASELINE);
    }
    let rest = TEAM_LEAD_TERMS
        .iter()
        .fold(text.to_string(), |rest, term| rest.replace(term, " "));
    tier_score(&rest, TRAJECTORY_TIERS, TRAJECTORY_BASELINE).max(TEAM_LEAD_SCORE)
}

/// Number of vocabulary entries with at least one spelling in `text` (lower-cased).
pub fn count_mentions(text: &str, vocabulary: &[&[&str]]) -> usize {
    vocabulary
        .iter()
        .filter(|spellings| spellings.iter().any(|term| mentions(text, term)))
        .count()
}

/// Case-sensitive containment check that refuses matches glued to further
/// letters or digits on an alphanumeric edge of `term`. Glued forms worth
/// scoring (`25+`, `googler`, `nodejs`) are listed as terms of their own.
pub fn mentions(text: &str, term: &str) -> bool {
    let starts_alnum = term.chars().next().is_some_and(|c| c.is_alphanumeric());
    let ends_alnum = term.chars().last().is_some_and(|c| c.is_alphanumeric());

    text.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let clear_before =
            !starts_alnum || !text[..start].chars().last().is_some_and(|c| c.is_alphanumeric());
        let clear_after =
            !ends_alnum || !text[end..].chars().next().is_some_and(|c| c.is_alphanumeric());
        clear_before && clear_after
    })
}
