//! Slot layouts: which symbolic field lives at which index of a positional
//! record, per entity kind.
//!
//! The tables below are the whole index contract with the storage layer.
//! They are indexed once, on first use, into immutable name → slot maps.

use super::value::{NULL, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Driver,
    Truck,
    Company,
    TrackPoint,
    Workday,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::User,
        EntityKind::Driver,
        EntityKind::Truck,
        EntityKind::Company,
        EntityKind::TrackPoint,
        EntityKind::Workday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Driver => "driver",
            EntityKind::Truck => "truck",
            EntityKind::Company => "company",
            EntityKind::TrackPoint => "track_point",
            EntityKind::Workday => "workday",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace('-', "_");
        EntityKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn layout(&self) -> &'static Layout {
        match self {
            EntityKind::User => &USER_LAYOUT,
            EntityKind::Driver => &DRIVER_LAYOUT,
            EntityKind::Truck => &TRUCK_LAYOUT,
            EntityKind::Company => &COMPANY_LAYOUT,
            EntityKind::TrackPoint => &TRACK_POINT_LAYOUT,
            EntityKind::Workday => &WORKDAY_LAYOUT,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected record length for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Arity::Exact(n) => len == n,
            Arity::AtLeast(n) => len >= n,
        }
    }
}

#[derive(Debug)]
pub struct Layout {
    pub kind: EntityKind,
    pub arity: Arity,
    /// `(field, slot)` in slot order. Also the column order the storage layer
    /// must select in.
    pub fields: &'static [(&'static str, usize)],
}

impl Layout {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn slot_of(&self, name: &str) -> Option<usize> {
        SLOT_INDEX.get(&self.kind).and_then(|m| m.get(name)).copied()
    }
}

pub static USER_LAYOUT: Layout = Layout {
    kind: EntityKind::User,
    arity: Arity::AtLeast(4),
    fields: &[
        ("name", 0),
        ("email", 1),
        ("password", 2),
        ("is_admin", 3),
        ("authorized_routes", 4),
    ],
};

pub static DRIVER_LAYOUT: Layout = Layout {
    kind: EntityKind::Driver,
    arity: Arity::Exact(37),
    fields: &[
        ("id", 0),
        ("nome", 1),
        ("data_admissao", 2),
        ("cpf", 3),
        ("cnh", 4),
        ("rg", 5),
        ("codigo_sap", 6),
        ("operacao", 7),
        ("ctps", 8),
        ("serie", 9),
        ("data_nascimento", 10),
        ("primeira_cnh", 11),
        ("data_expedicao", 12),
        ("vencimento_cnh", 13),
        ("done_mopp", 14),
        ("vencimento_mopp", 15),
        ("done_toxicologico_clt", 16),
        ("vencimento_toxicologico_clt", 17),
        ("done_aso_semestral", 18),
        ("vencimento_aso_semestral", 19),
        ("done_aso_periodico", 20),
        ("vencimento_aso_periodico", 21),
        ("done_buonny", 22),
        ("vencimento_buonny", 23),
        ("telefone", 24),
        ("endereco", 25),
        ("filiacao", 26),
        ("estado_civil", 27),
        ("filhos", 28),
        ("cargo", 29),
        ("empresa", 30),
        ("status", 31),
        ("conf_jornada", 32),
        ("conf_fecham", 33),
        ("done_toxicologico_cnh", 34),
        ("vencimento_toxicologico_cnh", 35),
        ("email", 36),
    ],
};

pub static TRUCK_LAYOUT: Layout = Layout {
    kind: EntityKind::Truck,
    arity: Arity::Exact(15),
    fields: &[
        ("id", 0),
        ("placa", 1),
        ("identificacao", 2),
        ("ano", 3),
        ("modelo", 4),
        ("vencimento_aet_dnit", 5),
        ("vencimento_aet_mg", 6),
        ("vencimento_aet_sp", 7),
        ("vencimento_aet_go", 8),
        ("vencimento_civ_cipp", 9),
        ("vencimento_cronotografo", 10),
        ("exercicio_crlv", 11),
        ("peso_tara", 12),
        ("link_documentacao", 13),
        ("status", 14),
    ],
};

pub static COMPANY_LAYOUT: Layout = Layout {
    kind: EntityKind::Company,
    arity: Arity::AtLeast(3),
    fields: &[("id", 0), ("enterprise", 1), ("cnpj", 2)],
};

pub static TRACK_POINT_LAYOUT: Layout = Layout {
    kind: EntityKind::TrackPoint,
    arity: Arity::AtLeast(9),
    fields: &[
        ("placa", 0),
        ("data_iso", 1),
        ("vel", 2),
        ("latitude", 3),
        ("longitude", 4),
        ("uf", 5),
        ("cidade", 6),
        ("rua", 7),
        ("ignicao", 8),
    ],
};

pub static WORKDAY_LAYOUT: Layout = Layout {
    kind: EntityKind::Workday,
    arity: Arity::AtLeast(46),
    fields: &[
        ("motorista", 0),
        ("placa", 1),
        ("data", 2),
        ("dia_da_semana", 3),
        ("inicio_jornada", 4),
        ("in_refeicao", 5),
        ("fim_refeicao", 6),
        ("fim_jornada", 7),
        ("observacao", 8),
        ("tempo_refeicao", 9),
        ("intersticio", 10),
        ("tempo_intervalo", 11),
        ("tempo_carga_descarga", 12),
        ("jornada_total", 13),
        ("tempo_direcao", 14),
        ("direcao_sem_pausa", 15),
        ("in_descanso_1", 16),
        ("fim_descanso_1", 17),
        ("in_descanso_2", 18),
        ("fim_descanso_2", 19),
        ("in_descanso_3", 20),
        ("fim_descanso_3", 21),
        ("in_descanso_4", 22),
        ("fim_descanso_4", 23),
        ("in_descanso_5", 24),
        ("fim_descanso_5", 25),
        ("in_descanso_6", 26),
        ("fim_descanso_6", 27),
        ("in_descanso_7", 28),
        ("fim_descanso_7", 29),
        ("in_descanso_8", 30),
        ("fim_descanso_8", 31),
        ("in_car_desc_1", 32),
        ("fim_car_desc_1", 33),
        ("in_car_desc_2", 34),
        ("fim_car_desc_2", 35),
        ("in_car_desc_3", 36),
        ("fim_car_desc_3", 37),
        ("in_car_desc_4", 38),
        ("fim_car_desc_4", 39),
        ("in_car_desc_5", 40),
        ("fim_car_desc_5", 41),
        ("in_car_desc_6", 42),
        ("fim_car_desc_6", 43),
        ("in_car_desc_7", 44),
        ("fim_car_desc_7", 45),
    ],
};

static SLOT_INDEX: LazyLock<HashMap<EntityKind, HashMap<&'static str, usize>>> =
    LazyLock::new(|| {
        EntityKind::ALL
            .into_iter()
            .map(|kind| {
                let index = kind
                    .layout()
                    .fields
                    .iter()
                    .copied()
                    .collect::<HashMap<_, _>>();
                (kind, index)
            })
            .collect()
    });

/// A positional record viewed through one layout.
///
/// Reads never panic: unknown names and indices past the end of the record
/// resolve to the supplied default.
#[derive(Debug, Clone, Copy)]
pub struct Slots<'a> {
    layout: &'static Layout,
    record: &'a [Value],
}

impl<'a> Slots<'a> {
    pub fn new(layout: &'static Layout, record: &'a [Value]) -> Self {
        Self { layout, record }
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    pub fn record(&self) -> &'a [Value] {
        self.record
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    pub fn value_or<'b>(&self, name: &str, default: &'b Value) -> &'b Value
    where
        'a: 'b,
    {
        self.layout
            .slot_of(name)
            .and_then(|i| self.record.get(i))
            .unwrap_or(default)
    }

    pub fn value(&self, name: &str) -> &'a Value {
        self.value_or(name, &NULL)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.value(name).as_text()
    }

    /// Text of the slot, with empty strings collapsed to `None`.
    pub fn present_text(&self, name: &str) -> Option<String> {
        self.value(name).as_present_text()
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.value(name).as_f64()
    }
}

/// Safe positional read with a caller-supplied default.
pub fn safe_get<'a>(record: &'a [Value], index: usize, default: &'a Value) -> &'a Value {
    record.get(index).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_are_contiguous_and_ordered() {
        for kind in EntityKind::ALL {
            let layout = kind.layout();
            for (pos, (_, slot)) in layout.fields.iter().enumerate() {
                assert_eq!(pos, *slot, "{kind}: slot order broken");
            }
        }
    }

    #[test]
    fn workday_layout_covers_46_slots() {
        assert_eq!(WORKDAY_LAYOUT.fields.len(), 46);
        assert_eq!(WORKDAY_LAYOUT.slot_of("inicio_jornada"), Some(4));
        assert_eq!(WORKDAY_LAYOUT.slot_of("in_refeicao"), Some(5));
        assert_eq!(WORKDAY_LAYOUT.slot_of("fim_refeicao"), Some(6));
        assert_eq!(WORKDAY_LAYOUT.slot_of("fim_jornada"), Some(7));
        assert_eq!(WORKDAY_LAYOUT.slot_of("in_descanso_1"), Some(16));
        assert_eq!(WORKDAY_LAYOUT.slot_of("fim_descanso_8"), Some(31));
        assert_eq!(WORKDAY_LAYOUT.slot_of("in_car_desc_1"), Some(32));
        assert_eq!(WORKDAY_LAYOUT.slot_of("fim_car_desc_7"), Some(45));
    }

    #[test]
    fn driver_layout_has_37_fields() {
        assert_eq!(DRIVER_LAYOUT.fields.len(), 37);
        assert_eq!(DRIVER_LAYOUT.slot_of("email"), Some(36));
    }

    #[test]
    fn out_of_range_reads_use_default() {
        let record = vec![Value::from("a")];
        let slots = Slots::new(&COMPANY_LAYOUT, &record);
        assert_eq!(slots.value("id"), &Value::from("a"));
        assert!(slots.value("cnpj").is_null());
        assert!(slots.value("no_such_field").is_null());

        let fallback = Value::from("[]");
        assert_eq!(safe_get(&record, 9, &fallback), &fallback);
    }

    #[test]
    fn kind_parsing_accepts_dashes() {
        assert_eq!(
            EntityKind::from_str_opt("track-point"),
            Some(EntityKind::TrackPoint)
        );
        assert_eq!(EntityKind::from_str_opt("Driver"), Some(EntityKind::Driver));
        assert_eq!(EntityKind::from_str_opt("boat"), None);
    }
}
