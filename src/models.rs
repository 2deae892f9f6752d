use crate::errors::JournalError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub intensity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerCategory {
    Stress,
    Social,
    Work,
    Health,
    Environment,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub name: String,
    #[serde(default)]
    pub category: Option<TriggerCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sleep,
    Exercise,
    Social,
    Nutrition,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Fog,
    Windy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub condition: WeatherCondition,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub mood_level: u8,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub screen_time_minutes: Option<u32>,
    #[serde(default)]
    pub day_rating: Option<u8>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub reflection: Option<String>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, mood_level: u8) -> Self {
        Self {
            date,
            mood_level,
            symptoms: Vec::new(),
            triggers: Vec::new(),
            activities: Vec::new(),
            weather: None,
            screen_time_minutes: None,
            day_rating: None,
            notes: String::new(),
            reflection: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalData {
    pub entries: BTreeMap<NaiveDate, JournalEntry>,
}

/// Trailing windows anchored to the query date, never calendar-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn window_days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    pub fn trend_lookback_days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            _ => 30,
        }
    }

    /// Quarter and year keep the 30-day consistency denominator, so a
    /// dense history can score above 100.
    pub fn expected_entry_days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            _ => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Quarter => "quarter",
            TimeRange::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            "year" => Ok(TimeRange::Year),
            other => Err(JournalError::InvalidTimeRange(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub mood_average: f64,
    pub mood_trend: MoodTrend,
    pub top_symptoms: Vec<NamedCount>,
    pub top_triggers: Vec<NamedCount>,
    pub consistency_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub mood: Option<u8>,
    pub symptom_count: usize,
    pub trigger_count: usize,
    pub sleep: Option<f64>,
    pub exercise: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_day_tables() {
        assert_eq!(TimeRange::Week.window_days(), 7);
        assert_eq!(TimeRange::Month.window_days(), 30);
        assert_eq!(TimeRange::Quarter.window_days(), 90);
        assert_eq!(TimeRange::Year.window_days(), 365);

        assert_eq!(TimeRange::Week.trend_lookback_days(), 7);
        assert_eq!(TimeRange::Month.trend_lookback_days(), 30);
        assert_eq!(TimeRange::Year.trend_lookback_days(), 30);

        assert_eq!(TimeRange::Week.expected_entry_days(), 7);
        assert_eq!(TimeRange::Quarter.expected_entry_days(), 30);
        assert_eq!(TimeRange::Year.expected_entry_days(), 30);
    }

    #[test]
    fn time_range_parses_known_selectors_only() {
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("month".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert_eq!("quarter".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert_eq!("year".parse::<TimeRange>().unwrap(), TimeRange::Year);

        assert!("fortnight".parse::<TimeRange>().is_err());
        assert!("Week".parse::<TimeRange>().is_err());
        assert!("".parse::<TimeRange>().is_err());
    }

    #[test]
    fn time_range_displays_the_token_it_parses() {
        for range in [
            TimeRange::Week,
            TimeRange::Month,
            TimeRange::Quarter,
            TimeRange::Year,
        ] {
            assert_eq!(range.to_string().parse::<TimeRange>().unwrap(), range);
        }
        assert_eq!(TimeRange::Month.to_string(), "month");
    }

    #[test]
    fn time_range_round_trips_through_serde() {
        let json = serde_json::to_string(&TimeRange::Quarter).unwrap();
        assert_eq!(json, "\"quarter\"");
        let parsed: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TimeRange::Quarter);
        assert!(serde_json::from_str::<TimeRange>("\"decade\"").is_err());
    }
}
