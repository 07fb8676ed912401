use super::field::Field;
use serde::{Deserialize, Serialize};

/// Unsaved form values. Every field is optional; empty strings are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorDraft {
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub email: String,
    pub duration_hours: String,
    pub duration_minutes: String,
    pub notes: String,
}

impl VisitorDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DurationHours => &self.duration_hours,
            Field::DurationMinutes => &self.duration_minutes,
            Field::Location => &self.location,
            Field::Email => &self.email,
            Field::Notes => &self.notes,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DurationHours => &mut self.duration_hours,
            Field::DurationMinutes => &mut self.duration_minutes,
            Field::Location => &mut self.location,
            Field::Email => &mut self.email,
            Field::Notes => &mut self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A stored visit. ⇔ one row of `visitors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub email: String,
    pub visited_at: String, // ⇔ visitors.date_time ("DD.MM.YYYY, HH:MM:SS")
    pub duration_hours: String,
    pub duration_minutes: String,
    pub notes: String,
}

impl VisitorRecord {
    pub fn from_draft(id: i64, draft: VisitorDraft, visited_at: String) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            location: draft.location,
            email: draft.email,
            visited_at,
            duration_hours: draft.duration_hours,
            duration_minutes: draft.duration_minutes,
            notes: draft.notes,
        }
    }

    /// "Vorname Nachname", or a dash when both are empty.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "-".to_string()
        } else {
            name.to_string()
        }
    }

    /// "1h 30m" style duration; missing parts are omitted.
    pub fn display_duration(&self) -> String {
        match (self.duration_hours.trim(), self.duration_minutes.trim()) {
            ("", "") => String::new(),
            (h, "") => format!("{h}h"),
            ("", m) => format!("{m}m"),
            (h, m) => format!("{h}h {m}m"),
        }
    }
}
