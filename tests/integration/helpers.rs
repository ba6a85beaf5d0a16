//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use cutline::{MediaDescriptor, TimeDomainEngine};

/// Path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Parse a fixture descriptor
pub fn load_fixture(name: &str) -> MediaDescriptor {
    MediaDescriptor::load(fixtures_dir().join(name)).expect("Failed to load fixture")
}

/// Copy a fixture into a temp directory, returning the directory guard and the copied path
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("Failed to copy fixture");
    (temp_dir, dest)
}

/// Engine loaded with a fixture and, optionally, a real duration
pub fn engine_for(name: &str, real_duration: Option<f64>) -> TimeDomainEngine {
    let mut engine = TimeDomainEngine::with_media(load_fixture(name));
    if let Some(duration) = real_duration {
        engine.set_real_duration(duration);
    }
    engine
}
