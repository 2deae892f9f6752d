use crate::errors::JournalError;
use crate::models::{JournalData, JournalEntry};
use crate::storage::{load_data, persist_data};
use chrono::NaiveDate;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

pub struct JournalStore {
    data_path: PathBuf,
    data: JournalData,
}

impl JournalStore {
    /// A missing or unreadable data file starts an empty journal.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let data_path = path.into();
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let data = load_data(&data_path).await;
        Ok(Self { data_path, data })
    }

    pub fn data(&self) -> &JournalData {
        &self.data
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.data.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    pub async fn upsert_entry(&mut self, entry: JournalEntry) -> Result<(), JournalError> {
        validate_entry(&entry)?;
        debug!(date = %entry.date, "upserting journal entry");
        self.data.entries.insert(entry.date, entry);
        persist_data(&self.data_path, &self.data).await
    }

    pub async fn remove_entry(
        &mut self,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, JournalError> {
        let removed = self.data.entries.remove(&date);
        if removed.is_some() {
            debug!(date = %date, "removed journal entry");
            persist_data(&self.data_path, &self.data).await?;
        }
        Ok(removed)
    }

    pub fn export_json(&self) -> Result<String, JournalError> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// Nothing changes unless the whole payload parses and validates.
    pub async fn import_json(&mut self, json: &str) -> Result<usize, JournalError> {
        let data: JournalData = serde_json::from_str(json)?;
        for (date, entry) in &data.entries {
            validate_entry(entry)?;
            if *date != entry.date {
                return Err(JournalError::invalid_entry(format!(
                    "entry dated {} filed under {date}",
                    entry.date
                )));
            }
        }

        self.data = data;
        persist_data(&self.data_path, &self.data).await?;
        Ok(self.data.entries.len())
    }

    pub async fn clear(&mut self) -> Result<(), JournalError> {
        self.data = JournalData::default();
        persist_data(&self.data_path, &self.data).await
    }
}

fn validate_entry(entry: &JournalEntry) -> Result<(), JournalError> {
    if !(1..=5).contains(&entry.mood_level) {
        return Err(JournalError::invalid_entry(format!(
            "mood level {} outside 1-5",
            entry.mood_level
        )));
    }

    for symptom in &entry.symptoms {
        if !(1..=7).contains(&symptom.intensity) {
            return Err(JournalError::invalid_entry(format!(
                "symptom '{}' intensity {} outside 1-7",
                symptom.name, symptom.intensity
            )));
        }
    }

    if let Some(rating) = entry.day_rating {
        if !(1..=10).contains(&rating) {
            return Err(JournalError::invalid_entry(format!(
                "day rating {rating} outside 1-10"
            )));
        }
    }

    for activity in &entry.activities {
        if !activity.value.is_finite() || activity.value < 0.0 {
            return Err(JournalError::invalid_entry(format!(
                "activity value {} is not a non-negative number",
                activity.value
            )));
        }
    }

    Ok(())
}
