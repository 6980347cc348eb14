// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod spa_sun_times;
pub mod tz_clock;
