//! Shared constants for end-to-end tests
//!
//! When the test catalog changes, update only this file.

// ============================================================================
// Test Catalog Tracks
// ============================================================================

pub const ARTIST_1_NAME: &str = "The Test Band";

pub const ARTIST_2_NAME: &str = "Jazz Ensemble";

/// Happy (0.90, 0.85)
pub const HAPPY_TRACK_1: &str = "Sunshine Parade";

/// Happy (0.75, 0.70)
pub const HAPPY_TRACK_2: &str = "Golden Hour";

/// Happy (0.65, 0.90)
pub const HAPPY_TRACK_3: &str = "Bright Side";

/// Sad (0.20, 0.30)
pub const SAD_TRACK_1: &str = "Rainy Window";

/// Sad (0.10, 0.10)
pub const SAD_TRACK_2: &str = "Empty Room";

/// Energetic (0.50, 0.95)
pub const ENERGETIC_TRACK: &str = "Engine Room";

/// Chill (0.50, 0.50)
pub const CHILL_TRACK: &str = "Slow Tide";

/// Rows kept after loading; two more rows are incomplete and get dropped.
pub const CATALOG_TRACKS_COUNT: usize = 7;

pub const HAPPY_TRACKS_COUNT: usize = 3;

pub const SAD_TRACKS_COUNT: usize = 2;

// ============================================================================
// Stub Emotion Detector
// ============================================================================

/// Text containing this word is detected as "joy"
pub const JOY_KEYWORD: &str = "wonderful";

/// Text containing this word is detected as "sadness"
pub const SADNESS_KEYWORD: &str = "miss";

/// Text containing this word makes the detector fail
pub const FAILURE_KEYWORD: &str = "explode";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
