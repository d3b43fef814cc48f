pub mod line;
pub mod station;
pub mod web;
