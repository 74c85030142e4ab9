//! Positional record → entity decoding.
//!
//! Decoding is total: a missing record or one of the wrong arity comes back
//! as [`Decoded::Empty`], never as an error.

use crate::models::entity::{Decoded, FromPositional};
use crate::models::layout::{EntityKind, Slots};
use crate::models::value::Value;
use crate::models::{Company, Driver, TrackPoint, Truck, User, Workday};
use serde::Serialize;
use tracing::trace;

pub fn decode<T: FromPositional>(record: Option<&[Value]>) -> Decoded<T> {
    let layout = T::KIND.layout();

    match record {
        Some(r) if layout.arity.accepts(r.len()) => {
            Decoded::Decoded(T::from_slots(Slots::new(layout, r)))
        }
        Some(r) => {
            trace!(kind = %T::KIND, len = r.len(), "record arity mismatch");
            Decoded::Empty
        }
        None => Decoded::Empty,
    }
}

/// Decode and collapse to the entity, all-null when the record is unusable.
pub fn decode_or_default<T: FromPositional>(record: Option<&[Value]>) -> T {
    decode(record).into_entity()
}

pub fn decode_all<T: FromPositional>(records: &[Vec<Value>]) -> Vec<T> {
    records
        .iter()
        .map(|r| decode_or_default(Some(r.as_slice())))
        .collect()
}

/// Any decoded entity, for callers that pick the kind at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    User(User),
    Driver(Driver),
    Truck(Truck),
    Company(Company),
    TrackPoint(TrackPoint),
    Workday(Workday),
}

pub fn decode_kind(kind: EntityKind, record: Option<&[Value]>) -> Decoded<AnyEntity> {
    fn wrap<T: FromPositional>(
        record: Option<&[Value]>,
        f: fn(T) -> AnyEntity,
    ) -> Decoded<AnyEntity> {
        match decode::<T>(record) {
            Decoded::Decoded(e) => Decoded::Decoded(f(e)),
            Decoded::Empty => Decoded::Empty,
        }
    }

    match kind {
        EntityKind::User => wrap(record, AnyEntity::User),
        EntityKind::Driver => wrap(record, AnyEntity::Driver),
        EntityKind::Truck => wrap(record, AnyEntity::Truck),
        EntityKind::Company => wrap(record, AnyEntity::Company),
        EntityKind::TrackPoint => wrap(record, AnyEntity::TrackPoint),
        EntityKind::Workday => wrap(record, AnyEntity::Workday),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn absent_record_is_empty() {
        assert!(decode::<Driver>(None).is_empty());
        assert_eq!(decode_or_default::<Truck>(None), Truck::default());
    }

    #[test]
    fn user_fifth_slot_is_optional() {
        let rec = vec![
            Value::from("Ana"),
            Value::from("ana@fleet.io"),
            Value::from("secret"),
            Value::Integer(1),
        ];
        let user = decode_or_default::<User>(Some(&rec));
        assert_eq!(user.name.as_deref(), Some("Ana"));
        assert!(user.is_admin);
        assert_eq!(user.authorized_routes, "[]");

        let mut rec5 = rec.clone();
        rec5.push(Value::from(r#"["drivers","trucks"]"#));
        let user = decode_or_default::<User>(Some(&rec5));
        assert_eq!(user.routes(), vec!["drivers", "trucks"]);
    }

    #[test]
    fn user_with_three_slots_is_default() {
        let rec = texts(&["Ana", "ana@fleet.io", "secret"]);
        let user = decode_or_default::<User>(Some(&rec));
        assert_eq!(user, User::default());
        assert!(!user.is_admin);
        assert_eq!(user.authorized_routes, "[]");
    }

    #[test]
    fn truck_requires_exact_arity() {
        let mut rec = texts(&["1", "ABC1D23"]);
        rec.resize(15, Value::Null);
        let truck = decode_or_default::<Truck>(Some(&rec));
        assert_eq!(truck.placa.as_deref(), Some("ABC1D23"));

        rec.push(Value::Null);
        assert!(decode::<Truck>(Some(&rec)).is_empty());
    }

    #[test]
    fn company_accepts_extra_slots() {
        let rec = texts(&["3", "Transportes Sul", "12.345.678/0001-90", "extra"]);
        let company = decode_or_default::<Company>(Some(&rec));
        assert_eq!(company.enterprise.as_deref(), Some("Transportes Sul"));
        assert_eq!(company.cnpj.as_deref(), Some("12.345.678/0001-90"));
    }

    #[test]
    fn track_point_degrades_bad_numbers_and_ignition() {
        let rec = vec![
            Value::from("ABC1D23"),
            Value::from("2025-01-02T10:00:00"),
            Value::from("fast"),
            Value::Real(-23.5),
            Value::from("-46.6"),
            Value::from("SP"),
            Value::from("São Paulo"),
            Value::Null,
            Value::from("maybe"),
        ];
        let p = decode_or_default::<TrackPoint>(Some(&rec));
        assert_eq!(p.vel, None);
        assert_eq!(p.latitude, Some(-23.5));
        assert_eq!(p.longitude, Some(-46.6));
        assert_eq!(p.ignicao, None);
        assert_eq!(p.rua, None);
    }

    #[test]
    fn numbers_become_text_attributes() {
        let mut rec = vec![Value::Integer(7), Value::from("Carlos")];
        rec.resize(37, Value::Null);
        let d = decode_or_default::<Driver>(Some(&rec));
        assert_eq!(d.id.as_deref(), Some("7"));
        assert_eq!(d.nome.as_deref(), Some("Carlos"));
    }

    #[test]
    fn kind_dispatch_matches_typed_decode() {
        let rec = texts(&["3", "Transportes Sul", "x"]);
        match decode_kind(EntityKind::Company, Some(&rec)) {
            Decoded::Decoded(AnyEntity::Company(c)) => {
                assert_eq!(c, decode_or_default::<Company>(Some(&rec)))
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(decode_kind(EntityKind::Driver, Some(&rec)).is_empty());
    }
}
