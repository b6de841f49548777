pub mod summary;

/// Which kind of duel the feed walk should keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameType {
    /// Team duels only (`gameMode == "TeamDuels"`)
    Team,
    /// Solo duels only (everything that is not `"TeamDuels"`)
    Duels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ModeFilter {
    All,
    Competitive,
    Casual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter {
    pub value: String,
    pub expected: &'static str,
}

impl std::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not one of {}", self.value, self.expected)
    }
}

impl std::error::Error for InvalidFilter {}

impl std::str::FromStr for GameType {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(Self::Team),
            "duels" => Ok(Self::Duels),
            other => Err(InvalidFilter {
                value: other.to_owned(),
                expected: "'team', 'duels'",
            }),
        }
    }
}

impl std::str::FromStr for ModeFilter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "competitive" => Ok(Self::Competitive),
            "casual" => Ok(Self::Casual),
            other => Err(InvalidFilter {
                value: other.to_owned(),
                expected: "'all', 'competitive', 'casual'",
            }),
        }
    }
}
