use rfleetlog::core::calculator::timeline::build_workday;
use chrono::NaiveDate;
use rfleetlog::core::decoder::decode;
use rfleetlog::core::logic::Core;
use rfleetlog::models::{Decoded, Interval, IntervalKind, Value, Workday};

mod common;
use common::workday_record;

fn iv(start: Option<&str>, end: Option<&str>) -> Interval {
    Interval::new(start.map(String::from), end.map(String::from))
}

#[test]
fn full_day_timeline_in_slot_order() {
    let rec = workday_record(&[
        ("motorista", "Joao"),
        ("placa", "ABC1D23"),
        ("data", "10/03/2026"),
        ("dia_da_semana", "terça-feira"),
        ("inicio_jornada", "06:00"),
        ("fim_jornada", "17:30"),
        ("in_refeicao", "12:00"),
        ("fim_refeicao", "13:00"),
        ("in_descanso_1", "09:00"),
        ("fim_descanso_1", "09:30"),
        ("in_descanso_3", "15:00"),
        ("in_car_desc_2", "10:00"),
        ("fim_car_desc_2", "11:00"),
        ("jornada_total", "11:30"),
    ]);
    let wd = build_workday(&rec);

    assert_eq!(wd.driver.as_deref(), Some("Joao"));
    assert_eq!(wd.plate.as_deref(), Some("ABC1D23"));
    assert_eq!(wd.total_shift_time.as_deref(), Some("11:30"));
    assert_eq!(wd.shift, iv(Some("06:00"), Some("17:30")));
    assert_eq!(wd.meal, Some(iv(Some("12:00"), Some("13:00"))));

    // rest 2 is absent, rest 3 is open; nothing is renumbered
    assert_eq!(
        wd.rests,
        vec![iv(Some("09:00"), Some("09:30")), iv(Some("15:00"), None)]
    );
    assert_eq!(wd.load_unload_stops, vec![iv(Some("10:00"), Some("11:00"))]);

    let kinds: Vec<IntervalKind> = wd.timeline().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        [
            IntervalKind::Shift,
            IntervalKind::Meal,
            IntervalKind::Rest,
            IntervalKind::Rest,
            IntervalKind::LoadUnload
        ]
    );
}

#[test]
fn collection_lengths_follow_populated_pairs() {
    let mut fields = Vec::new();
    let rest_names: Vec<(String, String)> = (1..=8)
        .map(|i| (format!("in_descanso_{i}"), format!("fim_descanso_{i}")))
        .collect();
    let stop_names: Vec<(String, String)> = (1..=7)
        .map(|i| (format!("in_car_desc_{i}"), format!("fim_car_desc_{i}")))
        .collect();

    // every other rest, end slot only; every stop, start slot only
    for (i, (_, end)) in rest_names.iter().enumerate() {
        if i % 2 == 0 {
            fields.push((end.as_str(), "08:00"));
        }
    }
    for (start, _) in &stop_names {
        fields.push((start.as_str(), "14:00"));
    }

    let wd = build_workday(&workday_record(&fields));
    assert_eq!(wd.rests.len(), 4);
    assert!(wd.rests.iter().all(|r| r.start.is_none() && r.end.is_some()));
    assert_eq!(wd.load_unload_stops.len(), 7);
    assert!(wd.load_unload_stops.iter().all(|s| s.end.is_none()));
}

#[test]
fn empty_text_slots_do_not_create_events() {
    let rec = workday_record(&[("in_refeicao", ""), ("fim_refeicao", ""), ("in_descanso_1", "")]);
    let wd = build_workday(&rec);
    assert_eq!(wd.meal, None);
    assert!(wd.rests.is_empty());
    assert_eq!(wd.shift, Interval::default());
}

#[test]
fn decode_checks_workday_arity() {
    let short = vec![Value::from("Joao"); 10];
    assert!(decode::<Workday>(Some(short.as_slice())).is_empty());

    let rec = workday_record(&[("motorista", "Joao"), ("inicio_jornada", "07:00")]);
    match decode::<Workday>(Some(rec.as_slice())) {
        Decoded::Decoded(wd) => assert_eq!(wd.shift.start.as_deref(), Some("07:00")),
        Decoded::Empty => panic!("full record must decode"),
    }
}

#[test]
fn day_filter_ignores_zero_padding() {
    let records = vec![
        workday_record(&[("motorista", "Joao"), ("data", "5/3/2026")]),
        workday_record(&[("motorista", "Joao"), ("data", "05/03/2026")]),
        workday_record(&[("motorista", "Joao"), ("data", "06/03/2026")]),
        workday_record(&[("motorista", "Joao"), ("data", "sometime")]),
    ];
    let day = NaiveDate::from_ymd_opt(2026, 3, 5);

    assert_eq!(Core::workdays_on(&records, day).len(), 2);
    assert_eq!(Core::workdays_on(&records, None).len(), 4);
}
