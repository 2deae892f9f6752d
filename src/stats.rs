use crate::models::{
    ActivityKind, DailyPoint, JournalData, JournalEntry, MoodTrend, NamedCount, StatsSummary,
    TimeRange,
};
use chrono::{Duration, Local, NaiveDate};

const MIN_TREND_ENTRIES: usize = 3;
const TREND_SHIFT_THRESHOLD: f64 = 0.3;
const TOP_NAME_LIMIT: usize = 5;

pub fn build_stats(data: &JournalData, range: TimeRange) -> StatsSummary {
    build_stats_at(Local::now().date_naive(), data, range)
}

/// Every metric reads the full trailing window except the trend, which
/// has its own shorter lookback.
pub fn build_stats_at(today: NaiveDate, data: &JournalData, range: TimeRange) -> StatsSummary {
    let start = window_start(today, range.window_days());
    let entries = entries_in_range(data, start, today);

    StatsSummary {
        mood_average: mood_average(&entries),
        mood_trend: mood_trend_at(today, data, range.trend_lookback_days()),
        top_symptoms: top_symptoms(&entries),
        top_triggers: top_triggers(&entries),
        consistency_score: consistency_score(entries.len(), range),
    }
}

pub fn entries_in_range<'a>(
    data: &'a JournalData,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a JournalEntry> {
    if start > end {
        return Vec::new();
    }

    data.entries.range(start..=end).map(|(_, entry)| entry).collect()
}

pub fn entry_for_date(data: &JournalData, date: NaiveDate) -> Option<&JournalEntry> {
    data.entries.get(&date)
}

pub fn mood_average(entries: &[&JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let total: u32 = entries.iter().map(|entry| u32::from(entry.mood_level)).sum();
    f64::from(total) / entries.len() as f64
}

pub fn mood_trend(data: &JournalData, days: i64) -> MoodTrend {
    mood_trend_at(Local::now().date_naive(), data, days)
}

pub fn mood_trend_at(today: NaiveDate, data: &JournalData, days: i64) -> MoodTrend {
    let entries = entries_in_range(data, window_start(today, days), today);
    if entries.len() < MIN_TREND_ENTRIES {
        return MoodTrend::Stable;
    }

    // The older half is the shorter one when the count is odd.
    let mid = entries.len() / 2;
    let delta = mood_average(&entries[mid..]) - mood_average(&entries[..mid]);

    if delta > TREND_SHIFT_THRESHOLD {
        MoodTrend::Improving
    } else if delta < -TREND_SHIFT_THRESHOLD {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

pub fn top_symptoms(entries: &[&JournalEntry]) -> Vec<NamedCount> {
    rank_names(
        entries
            .iter()
            .flat_map(|entry| entry.symptoms.iter().map(|symptom| symptom.name.as_str())),
    )
}

pub fn top_triggers(entries: &[&JournalEntry]) -> Vec<NamedCount> {
    rank_names(
        entries
            .iter()
            .flat_map(|entry| entry.triggers.iter().map(|trigger| trigger.name.as_str())),
    )
}

pub fn consistency_score(entry_count: usize, range: TimeRange) -> u32 {
    (entry_count as f64 / range.expected_entry_days() as f64 * 100.0).round() as u32
}

pub fn daily_series(data: &JournalData, range: TimeRange) -> Vec<DailyPoint> {
    daily_series_at(Local::now().date_naive(), data, range)
}

/// One point per window date, oldest first; missing days keep empty values.
pub fn daily_series_at(today: NaiveDate, data: &JournalData, range: TimeRange) -> Vec<DailyPoint> {
    let days = range.window_days();
    let mut points = Vec::with_capacity(days as usize);

    for offset in (0..days).rev() {
        let date = today - Duration::days(offset);
        let entry = data.entries.get(&date);
        points.push(DailyPoint {
            date,
            mood: entry.map(|entry| entry.mood_level),
            symptom_count: entry.map_or(0, |entry| entry.symptoms.len()),
            trigger_count: entry.map_or(0, |entry| entry.triggers.len()),
            sleep: entry.and_then(|entry| activity_value(entry, ActivityKind::Sleep)),
            exercise: entry.and_then(|entry| activity_value(entry, ActivityKind::Exercise)),
        });
    }

    points
}

fn rank_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<NamedCount> {
    let mut counts: Vec<NamedCount> = Vec::new();
    for name in names {
        match counts.iter_mut().find(|item| item.name == name) {
            Some(item) => item.count += 1,
            None => counts.push(NamedCount {
                name: name.to_string(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-observed order between equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_NAME_LIMIT);
    counts
}

fn activity_value(entry: &JournalEntry, kind: ActivityKind) -> Option<f64> {
    entry
        .activities
        .iter()
        .find(|activity| activity.kind == kind)
        .map(|activity| activity.value)
}

fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days - 1)
}
