pub mod calculator;
pub mod compliance;
pub mod decoder;
pub mod logic;
