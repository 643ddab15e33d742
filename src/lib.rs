pub mod calibration;
pub mod config;
pub mod logging;
pub mod output;
pub mod scoring;
