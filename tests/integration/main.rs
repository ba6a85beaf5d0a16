//! Integration test harness

mod helpers;

mod config_test;
mod engine_test;
mod player_test;
