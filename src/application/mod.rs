// Application layer - Derivation services and the collaborators they consume
pub mod band_geometry;
pub mod civil_clock;
pub mod daily_service;
pub mod diurnal_service;
pub mod plot_service;
pub mod solar_service;
pub mod sun_times;
pub mod validation;
