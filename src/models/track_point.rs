use super::entity::FromPositional;
use super::layout::{EntityKind, Slots};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ignition {
    On,
    Off,
}

impl Ignition {
    /// Only the two literal storage values are recognised.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Ligada" => Some(Ignition::On),
            "Desligada" => Some(Ignition::Off),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Ignition::On => "Ligada",
            Ignition::Off => "Desligada",
        }
    }
}

/// One GPS sample from the tracker feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackPoint {
    pub placa: Option<String>,
    pub data_iso: Option<String>,
    pub vel: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub uf: Option<String>,
    pub cidade: Option<String>,
    pub rua: Option<String>,
    pub ignicao: Option<Ignition>,
}

impl TrackPoint {
    pub fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("placa", self.placa.clone()),
            ("data_iso", self.data_iso.clone()),
            ("vel", self.vel.map(|v| v.to_string())),
            ("latitude", self.latitude.map(|v| v.to_string())),
            ("longitude", self.longitude.map(|v| v.to_string())),
            ("uf", self.uf.clone()),
            ("cidade", self.cidade.clone()),
            ("rua", self.rua.clone()),
            (
                "ignicao",
                self.ignicao.map(|i| i.to_db_str().to_string()),
            ),
        ]
    }
}

impl FromPositional for TrackPoint {
    const KIND: EntityKind = EntityKind::TrackPoint;

    fn from_slots(slots: Slots<'_>) -> Self {
        Self {
            placa: slots.text("placa"),
            data_iso: slots.text("data_iso"),
            // non-numeric text degrades to None instead of failing the record
            vel: slots.float("vel"),
            latitude: slots.float("latitude"),
            longitude: slots.float("longitude"),
            uf: slots.text("uf"),
            cidade: slots.text("cidade"),
            rua: slots.text("rua"),
            ignicao: slots
                .text("ignicao")
                .as_deref()
                .and_then(Ignition::from_db_str),
        }
    }
}
