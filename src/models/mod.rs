//! Fleet entities and the positional-record plumbing they are decoded with.

pub mod entity;
pub mod layout;
pub mod value;

pub mod company;
pub mod driver;
pub mod interval;
pub mod status;
pub mod track_point;
pub mod truck;
pub mod user;
pub mod workday;

pub use company::Company;
pub use driver::Driver;
pub use entity::{Decoded, FromPositional};
pub use interval::{Interval, IntervalKind};
pub use layout::EntityKind;
pub use status::{ComplianceStatus, StatusKind};
pub use track_point::{Ignition, TrackPoint};
pub use truck::Truck;
pub use user::User;
pub use value::Value;
pub use workday::Workday;
