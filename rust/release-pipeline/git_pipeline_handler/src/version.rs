use std::sync::LazyLock;

use regex::Regex;

/// e.g. `1.5.0`
static RELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// e.g. `1.5.1+3`
static CANDIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\+[0-9]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Release,
    Candidate,
    /// Anything else, including the empty version of an artifact without a `VERSION` file
    Unversioned,
}

impl VersionKind {
    pub fn of(version: &str) -> Self {
        if RELEASE_REGEX.is_match(version) {
            VersionKind::Release
        } else if CANDIDATE_REGEX.is_match(version) {
            VersionKind::Candidate
        } else {
            VersionKind::Unversioned
        }
    }
}

/// Which versions an account accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTier {
    /// Accepts releases and release candidates
    NonProduction,
    /// Accepts releases only
    Production,
    /// Accepts nothing
    Other,
}

impl AccountTier {
    pub fn of(account_name: &str) -> Self {
        match account_name.to_lowercase().as_str() {
            "acc" | "accp" | "acceptance" | "nonprod" => AccountTier::NonProduction,
            "prod" | "production" => AccountTier::Production,
            _ => AccountTier::Other,
        }
    }
}

/// Whether an artifact with `version` may be promoted into `account_name`
pub fn can_push(account_name: &str, version: &str) -> bool {
    match (AccountTier::of(account_name), VersionKind::of(version)) {
        (AccountTier::NonProduction, VersionKind::Release | VersionKind::Candidate) => true,
        (AccountTier::Production, VersionKind::Release) => true,
        _ => false,
    }
}
