// Domain layer - Pure types and constant tables
pub mod aqi;
pub mod band;
pub mod diurnal;
pub mod error;
pub mod plot;
pub mod scale;
