//! Hour/minute picker state.

use chrono::{NaiveTime, Timelike};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Placeholder shown while no time is picked
pub const TIME_PLACEHOLDER: &str = "选择时间";

/// Which field of the picker an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
}

impl TimeField {
    fn max(&self) -> u32 {
        match self {
            TimeField::Hours => 23,
            TimeField::Minutes => 59,
        }
    }
}

/// Optional time of day. Unset fields read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimePickerState {
    time: Option<NaiveTime>,
}

impl TimePickerState {
    pub fn new(time: Option<NaiveTime>) -> Self {
        Self { time }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn get(&self, field: TimeField) -> u32 {
        match (self.time, field) {
            (Some(t), TimeField::Hours) => t.hour(),
            (Some(t), TimeField::Minutes) => t.minute(),
            (None, _) => 0,
        }
    }

    /// Two-digit rendering of one field, as shown in the inputs
    pub fn field_text(&self, field: TimeField) -> String {
        format!("{:02}", self.get(field))
    }

    /// Trigger label: `HH:MM`, or the placeholder when unset
    pub fn display(&self) -> String {
        match self.time {
            Some(t) => t.format("%H:%M").to_string(),
            None => TIME_PLACEHOLDER.to_string(),
        }
    }

    /// Set one field. Out-of-range values are rejected and leave state as is.
    pub fn set(&mut self, field: TimeField, value: u32) -> ShowcaseResult<()> {
        if value > field.max() {
            return Err(ShowcaseError::OutOfRange(format!(
                "{:?} must be 0..={}, got {}",
                field,
                field.max(),
                value
            )));
        }
        let (hours, minutes) = match field {
            TimeField::Hours => (value, self.get(TimeField::Minutes)),
            TimeField::Minutes => (self.get(TimeField::Hours), value),
        };
        self.time = NaiveTime::from_hms_opt(hours, minutes, 0);
        Ok(())
    }

    /// Typed input. Non-numeric text is rejected like an out-of-range value.
    pub fn set_text(&mut self, field: TimeField, text: &str) -> ShowcaseResult<()> {
        let value = text
            .trim()
            .parse::<u32>()
            .map_err(|_| ShowcaseError::OutOfRange(format!("{:?}: '{}' is not a number", field, text)))?;
        self.set(field, value)
    }

    /// Arrow up (+1) or down (-1), wrapping at the field bounds
    pub fn step(&mut self, field: TimeField, up: bool) {
        let max = field.max();
        let current = self.get(field);
        let next = match (up, current) {
            (true, v) if v >= max => 0,
            (true, v) => v + 1,
            (false, 0) => max,
            (false, v) => v - 1,
        };
        // next is always within bounds
        let _ = self.set(field, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_shows_placeholder() {
        let state = TimePickerState::default();
        assert_eq!(state.display(), TIME_PLACEHOLDER);
        assert_eq!(state.field_text(TimeField::Hours), "00");
    }

    #[test]
    fn typed_values_are_validated() {
        let mut state = TimePickerState::default();
        state.set_text(TimeField::Hours, "9").unwrap();
        assert_eq!(state.display(), "09:00");

        assert!(state.set_text(TimeField::Hours, "24").is_err());
        assert!(state.set_text(TimeField::Minutes, "abc").is_err());
        assert!(state.set_text(TimeField::Minutes, "60").is_err());
        assert_eq!(state.display(), "09:00");

        state.set_text(TimeField::Minutes, " 45 ").unwrap();
        assert_eq!(state.display(), "09:45");
    }

    #[test]
    fn arrows_wrap() {
        let mut state = TimePickerState::new(NaiveTime::from_hms_opt(23, 59, 0));
        state.step(TimeField::Hours, true);
        assert_eq!(state.get(TimeField::Hours), 0);
        state.step(TimeField::Hours, false);
        assert_eq!(state.get(TimeField::Hours), 23);
        state.step(TimeField::Minutes, true);
        assert_eq!(state.display(), "23:00");
        state.step(TimeField::Minutes, false);
        assert_eq!(state.display(), "23:59");
    }
}
