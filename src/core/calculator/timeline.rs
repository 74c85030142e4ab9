//! Workday timeline reconstruction.
//!
//! A workday row is flat: scalars first, then start/end pairs for every event
//! the tracker knows about. Pairs are read through the workday layout; an
//! event with both slots empty did not happen and is left out.

use crate::models::entity::FromPositional;
use crate::models::interval::Interval;
use crate::models::layout::{EntityKind, Slots, WORKDAY_LAYOUT};
use crate::models::value::Value;
use crate::models::workday::{MAX_LOAD_UNLOAD_STOPS, MAX_RESTS, Workday};
use std::sync::LazyLock;

/// Start/end field names of one repeating event.
type SlotPair = (&'static str, &'static str);

const SHIFT: SlotPair = ("inicio_jornada", "fim_jornada");
const MEAL: SlotPair = ("in_refeicao", "fim_refeicao");

static REST_PAIRS: LazyLock<Vec<(String, String)>> = LazyLock::new(|| {
    (1..=MAX_RESTS)
        .map(|i| (format!("in_descanso_{i}"), format!("fim_descanso_{i}")))
        .collect()
});

static LOAD_UNLOAD_PAIRS: LazyLock<Vec<(String, String)>> = LazyLock::new(|| {
    (1..=MAX_LOAD_UNLOAD_STOPS)
        .map(|i| (format!("in_car_desc_{i}"), format!("fim_car_desc_{i}")))
        .collect()
});

/// Interval from a start/end slot pair, if at least one slot carries data.
/// An empty slot next to a present one reads as null.
fn parse_event(slots: &Slots<'_>, start: &str, end: &str) -> Option<Interval> {
    let start = slots.present_text(start);
    let end = slots.present_text(end);

    if start.is_none() && end.is_none() {
        return None;
    }
    Some(Interval::new(start, end))
}

/// Present events only, in slot order. Absent slots are skipped, not
/// renumbered or padded.
fn parse_events(slots: &Slots<'_>, pairs: &[(String, String)]) -> Vec<Interval> {
    pairs
        .iter()
        .filter_map(|(start, end)| parse_event(slots, start, end))
        .collect()
}

/// Build the structured workday from a full positional record.
///
/// Short records never panic: missing slots read as null. Use
/// [`crate::core::decoder::decode`] when an arity check is wanted.
pub fn build_workday(record: &[Value]) -> Workday {
    let slots = Slots::new(&WORKDAY_LAYOUT, record);

    Workday {
        driver: slots.text("motorista"),
        plate: slots.text("placa"),
        date: slots.text("data"),
        weekday: slots.text("dia_da_semana"),
        observation: slots.text("observacao"),
        meal_time: slots.text("tempo_refeicao"),
        inter_shift_gap: slots.text("intersticio"),
        break_time: slots.text("tempo_intervalo"),
        load_unload_time: slots.text("tempo_carga_descarga"),
        total_shift_time: slots.text("jornada_total"),
        driving_time: slots.text("tempo_direcao"),
        driving_without_break: slots.text("direcao_sem_pausa"),

        // the shift is always reported, even when both ends are missing
        shift: parse_event(&slots, SHIFT.0, SHIFT.1).unwrap_or_default(),
        meal: parse_event(&slots, MEAL.0, MEAL.1),
        rests: parse_events(&slots, &REST_PAIRS),
        load_unload_stops: parse_events(&slots, &LOAD_UNLOAD_PAIRS),
    }
}

impl FromPositional for Workday {
    const KIND: EntityKind = EntityKind::Workday;

    fn from_slots(slots: Slots<'_>) -> Self {
        build_workday(slots.record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_record() -> Vec<Value> {
        vec![Value::Null; 46]
    }

    #[test]
    fn shift_is_always_present() {
        let wd = build_workday(&blank_record());
        assert_eq!(wd.shift, Interval::default());
        assert_eq!(wd.meal, None);
        assert!(wd.rests.is_empty());
        assert!(wd.load_unload_stops.is_empty());
    }

    #[test]
    fn open_intervals_are_kept() {
        let mut rec = blank_record();
        rec[4] = Value::from("06:00");
        rec[6] = Value::from("12:30");
        rec[5] = Value::from("");
        let wd = build_workday(&rec);
        assert_eq!(wd.shift, Interval::new(Some("06:00".into()), None));
        assert_eq!(wd.meal, Some(Interval::new(None, Some("12:30".into()))));
    }

    #[test]
    fn short_record_does_not_panic() {
        let rec = vec![Value::from("João"), Value::from("ABC1D23")];
        let wd = build_workday(&rec);
        assert_eq!(wd.driver.as_deref(), Some("João"));
        assert_eq!(wd.date, None);
        assert_eq!(wd.shift, Interval::default());
    }
}
