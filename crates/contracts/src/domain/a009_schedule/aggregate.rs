use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Weekly slot of a class at a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub class_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub venue_id: Option<RecordId>,
    #[serde(deserialize_with = "lenient::option_id")]
    pub coach_id: Option<RecordId>,
    pub day_of_week: Option<Weekday>,
    /// "HH:MM" (the backend may append seconds)
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.as_str() == s)
    }

    pub fn all() -> [Weekday; 7] {
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }
}

/// Trim a backend time ("16:30:00") to the "HH:MM" shown in forms.
pub fn short_time(value: &str) -> &str {
    match value.char_indices().nth(5) {
        Some((idx, ':')) => &value[..idx],
        _ => value,
    }
}

impl Resource for Schedule {
    const ENDPOINT: &'static str = "admin/schedules";
    const ELEMENT_NAME: &'static str = "Schedule";
    const LIST_NAME: &'static str = "Schedules";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        let day = self.day_of_week.map(|d| d.display_name()).unwrap_or("-");
        format!(
            "{} {}–{}",
            day,
            short_time(&self.start_time),
            short_time(&self.end_time)
        )
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.class_id.is_none() {
            Some("Class")
        } else if self.venue_id.is_none() {
            Some("Venue")
        } else if self.day_of_week.is_none() {
            Some("Day")
        } else if !is_filled(&self.start_time) {
            Some("Start time")
        } else if !is_filled(&self.end_time) {
            Some("End time")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_time() {
        assert_eq!(short_time("16:30:00"), "16:30");
        assert_eq!(short_time("16:30"), "16:30");
        assert_eq!(short_time(""), "");
    }

    #[test]
    fn test_label() {
        let schedule = Schedule {
            day_of_week: Some(Weekday::Saturday),
            start_time: "08:00:00".into(),
            end_time: "09:30:00".into(),
            ..Default::default()
        };
        assert_eq!(schedule.label(), "Saturday 08:00–09:30");
        assert_eq!(Weekday::from_str("sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_str("funday"), None);
    }
}
