use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed calendar labels for the seasonality series, January through December.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of suggestions shown per page by default.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Year-over-year direction of simulated search interest.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}

/// Ranking difficulty tier derived from a suggestion's score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify a suggestion score into a difficulty tier.
    ///
    /// Scores above 85 are Hard, above 75 Medium, everything else Easy.
    pub fn from_score(score: u32) -> Self {
        if score > 85 {
            Difficulty::Hard
        } else if score > 75 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!(
                "unknown difficulty '{s}' (expected easy, medium, or hard)"
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Classification of the user goal behind a search query.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SearchIntent {
    Informational,
    Transactional,
    Navigational,
    Commercial,
}

impl SearchIntent {
    pub fn all() -> &'static [SearchIntent] {
        &[
            SearchIntent::Informational,
            SearchIntent::Transactional,
            SearchIntent::Navigational,
            SearchIntent::Commercial,
        ]
    }
}

impl std::str::FromStr for SearchIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "informational" => Ok(SearchIntent::Informational),
            "transactional" => Ok(SearchIntent::Transactional),
            "navigational" => Ok(SearchIntent::Navigational),
            "commercial" => Ok(SearchIntent::Commercial),
            _ => Err(format!(
                "unknown intent '{s}' (expected informational, transactional, navigational, or commercial)"
            )),
        }
    }
}

impl std::fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchIntent::Informational => write!(f, "Informational"),
            SearchIntent::Transactional => write!(f, "Transactional"),
            SearchIntent::Navigational => write!(f, "Navigational"),
            SearchIntent::Commercial => write!(f, "Commercial"),
        }
    }
}

/// Twelve-point series of relative search interest per calendar month.
///
/// `trend[i]` corresponds to `months[i]`; values fall in `[80, 120)`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Seasonality {
    pub months: Vec<String>,
    pub trend: Vec<u32>,
}

/// Simulated organic/paid click split for a keyword.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClickMetrics {
    pub organic_clicks: u64,
    pub paid_clicks: u64,
    /// Percentage of impressions resulting in a click, one decimal place.
    pub click_through_rate: f64,
}

/// Simulated search-engine results page composition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SerpProfile {
    pub organic_results: u32,
    pub paid_results: u32,
    pub featured_snippets: bool,
}

/// Full synthetic analytics record for one analyzed keyword.
///
/// Volume fields are linked: `yearly_searches = monthly_searches * 12`,
/// `daily_searches = monthly_searches / 30` (floored), and `traffic`
/// mirrors `monthly_searches`. `difficulty` is always exactly
/// `competition * 0.8`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeywordMetrics {
    /// Composite "power score" in `[60, 100]`.
    pub strength: f64,
    pub traffic: u64,
    pub trend: Trend,
    /// Competition pressure in `[20, 100]`.
    pub competition: f64,
    /// Yearly search volume.
    pub search_volume: u64,
    pub difficulty: f64,
    /// Cost-per-click in `[0.5, 5.0]`, two decimal places.
    pub cpc: f64,
    pub daily_searches: u64,
    pub monthly_searches: u64,
    pub yearly_searches: u64,
    pub seasonality: Seasonality,
    pub click_metrics: ClickMetrics,
    pub serp: SerpProfile,
}

/// One related-keyword candidate built from a modifier phrase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeywordSuggestion {
    pub keyword: String,
    /// Opportunity score in `[70, 100)`.
    pub score: u32,
    pub difficulty: Difficulty,
    pub search_volume: u64,
    /// Relative trend multiplier in `[0.8, 1.2)`.
    pub trend: f64,
    pub cpc: f64,
    pub intent: SearchIntent,
    pub competition: u32,
}

/// Combined result of one search: metrics plus ranked suggestions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeywordReport {
    pub keyword: String,
    pub generated_at: DateTime<Utc>,
    pub metrics: KeywordMetrics,
    pub suggestions: Vec<KeywordSuggestion>,
}

impl KeywordReport {
    pub fn new(
        keyword: impl Into<String>,
        metrics: KeywordMetrics,
        suggestions: Vec<KeywordSuggestion>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            generated_at: Utc::now(),
            metrics,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::from_score(70), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(75), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(76), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(85), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(86), Difficulty::Hard);
        assert_eq!(Difficulty::from_score(99), Difficulty::Hard);
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(MONTH_LABELS.len(), 12);
        assert_eq!(MONTH_LABELS[0], "Jan");
        assert_eq!(MONTH_LABELS[11], "Dec");
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(SearchIntent::Informational.to_string(), "Informational");
        assert_eq!(SearchIntent::Commercial.to_string(), "Commercial");
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_intent_from_str() {
        assert_eq!(
            "commercial".parse::<SearchIntent>().unwrap(),
            SearchIntent::Commercial
        );
        assert_eq!(
            "Navigational".parse::<SearchIntent>().unwrap(),
            SearchIntent::Navigational
        );
        assert!("curious".parse::<SearchIntent>().is_err());
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"down\"");
    }
}
