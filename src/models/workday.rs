use super::interval::{Interval, IntervalKind};
use crate::utils::date::parse_dmy;
use chrono::NaiveDate;
use serde::Serialize;

pub const MAX_RESTS: usize = 8;
pub const MAX_LOAD_UNLOAD_STOPS: usize = 7;

/// A driver's day as recorded by the journey tracker.
///
/// The duration fields are pre-computed upstream and kept as the text the
/// storage layer holds (`HH:MM` in practice).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workday {
    pub driver: Option<String>,
    pub plate: Option<String>,
    pub date: Option<String>,
    pub weekday: Option<String>,
    pub observation: Option<String>,
    pub meal_time: Option<String>,
    pub inter_shift_gap: Option<String>,
    pub break_time: Option<String>,
    pub load_unload_time: Option<String>,
    pub total_shift_time: Option<String>,
    pub driving_time: Option<String>,
    pub driving_without_break: Option<String>,

    pub shift: Interval,
    pub meal: Option<Interval>,
    /// At most [`MAX_RESTS`], in source order.
    pub rests: Vec<Interval>,
    /// At most [`MAX_LOAD_UNLOAD_STOPS`], in source order.
    pub load_unload_stops: Vec<Interval>,
}

impl Workday {
    /// Every interval of the day tagged with its kind: shift first, then
    /// meal, rests and load/unload stops.
    pub fn timeline(&self) -> Vec<(IntervalKind, &Interval)> {
        let mut out = vec![(IntervalKind::Shift, &self.shift)];
        if let Some(meal) = &self.meal {
            out.push((IntervalKind::Meal, meal));
        }
        out.extend(self.rests.iter().map(|r| (IntervalKind::Rest, r)));
        out.extend(
            self.load_unload_stops
                .iter()
                .map(|s| (IntervalKind::LoadUnload, s)),
        );
        out
    }

    /// Calendar day of the row, whatever the zero padding of the stored text.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_dmy)
    }

    pub fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("driver", self.driver.as_deref()),
            ("plate", self.plate.as_deref()),
            ("date", self.date.as_deref()),
            ("weekday", self.weekday.as_deref()),
            ("observation", self.observation.as_deref()),
            ("meal_time", self.meal_time.as_deref()),
            ("inter_shift_gap", self.inter_shift_gap.as_deref()),
            ("break_time", self.break_time.as_deref()),
            ("load_unload_time", self.load_unload_time.as_deref()),
            ("total_shift_time", self.total_shift_time.as_deref()),
            ("driving_time", self.driving_time.as_deref()),
            ("driving_without_break", self.driving_without_break.as_deref()),
        ]
    }
}
