//! Pipeline constants and runtime configuration defaults

/// Default number of threshold samples in the characteristic-distance sweep
pub const DEFAULT_GRID_SIZE: usize = 300;

/// Minimum usable sweep resolution
pub const MIN_GRID_SIZE: usize = 2;

/// Default rose-diagram bin width in degrees
pub const DEFAULT_BIN_WIDTH_DEG: f64 = 10.0;

/// Default directory for figures and reports
pub const DEFAULT_OUTPUT_DIR: &str = "figures";

/// Meters per kilometer, for report and axis-label unit conversion
pub const METERS_PER_KILOMETER: f64 = 1000.0;

// Output filenames, matching the figure set of the original workflow
/// Summary sheet filename
pub const SUMMARY_FILE: &str = "summary.csv";
/// Per-pair detail sheet filename
pub const FRY_DETAIL_FILE: &str = "fry_points.csv";
/// Nearest-neighbour probability curve figure
pub const CURVE_PLOT_FILE: &str = "nearest_neighbour_probability.png";
/// Fry scatter figure
pub const FRY_PLOT_FILE: &str = "fry_plot.png";
/// Rose diagram over every Fry pair
pub const ROSE_ALL_FILE: &str = "rose_all_pairs.png";
/// Rose diagram over pairs within the characteristic distance
pub const ROSE_CHARACTERISTIC_FILE: &str = "rose_characteristic.png";
/// Rose diagram over pairs within the total-connectivity distance
pub const ROSE_CONNECTIVITY_FILE: &str = "rose_connectivity.png";

// Figure dimensions in pixels
/// Probability curve figure size (width, height)
pub const CURVE_PLOT_SIZE: (u32, u32) = (900, 600);
/// Fry scatter figure size, square for equal aspect
pub const FRY_PLOT_SIZE: (u32, u32) = (800, 800);
/// Rose diagram figure size, square for polar layout
pub const ROSE_PLOT_SIZE: (u32, u32) = (800, 800);
