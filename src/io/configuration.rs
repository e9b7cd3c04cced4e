//! Engine constants and runtime configuration defaults

// Matching constants for tile selection
/// Nearest-neighbor pool size for fast-mode random selection
pub const FAST_CANDIDATES: usize = 40;
/// Initial nearest-neighbor scan width for unique-mode selection
pub const UNIQUE_INITIAL_CANDIDATES: usize = 2;

// Default values for configurable parameters
/// Default number of mosaic grid rows
pub const DEFAULT_GRID_ROWS: usize = 50;
/// Default number of mosaic grid columns
pub const DEFAULT_GRID_COLS: usize = 50;
/// Default tile edge length in pixels (tiles are square on the CLI path)
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Fixed seed for reproducible fast-mode selection
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Frame delay used when an animation frame carries no timing of its own
pub const GIF_FALLBACK_DELAY_MS: u32 = 100;
