use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Storage-assigned article identifier.
///
/// Any base-10 `i64` is a well-formed id; ids that were never assigned simply
/// do not resolve to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id: {raw}")))
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    Publish,
    Draft,
    Thrash,
}

impl ArticleStatus {
    pub const ALL: [Self; 3] = [Self::Publish, Self::Draft, Self::Thrash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "Publish",
            Self::Draft => "Draft",
            Self::Thrash => "Thrash",
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    /// Case-sensitive: `"publish"` is not a status.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status: {value}")))
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A limit/offset window over the id-ordered article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}
