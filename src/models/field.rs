use serde::{Deserialize, Serialize};

/// One editable field of the registration form, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    DurationHours,
    DurationMinutes,
    Location,
    Email,
    Notes,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::DurationHours,
        Field::DurationMinutes,
        Field::Location,
        Field::Email,
        Field::Notes,
    ];

    /// Placeholder shown in the kiosk form.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "Vorname",
            Field::LastName => "Nachname",
            Field::DurationHours => "Stunden",
            Field::DurationMinutes => "Minuten",
            Field::Location => "Ort",
            Field::Email => "Email",
            Field::Notes => "Sonstiges",
        }
    }

    pub fn index(&self) -> usize {
        Field::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field, wrapping around.
    pub fn next(&self) -> Self {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(&self) -> Self {
        let len = Field::ALL.len();
        Field::ALL[(self.index() + len - 1) % len]
    }

    pub fn is_last(&self) -> bool {
        self.index() == Field::ALL.len() - 1
    }
}
