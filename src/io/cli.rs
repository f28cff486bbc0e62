//! Command-line interface for the Fry analysis pipeline

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::analysis::characteristic::EstimatorMode;
use crate::analysis::pipeline::{self, PipelineConfig, PipelineOutput};
use crate::io::configuration::{
    CURVE_PLOT_FILE, DEFAULT_BIN_WIDTH_DEG, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT_DIR,
    FRY_DETAIL_FILE, FRY_PLOT_FILE, METERS_PER_KILOMETER, ROSE_ALL_FILE,
    ROSE_CHARACTERISTIC_FILE, ROSE_CONNECTIVITY_FILE, SUMMARY_FILE,
};
use crate::io::error::{Result, file_system_error};
use crate::io::loader::load_point_set;
use crate::io::plot::{plot_fry_scatter, plot_probability_curve, plot_rose_diagram};
use crate::io::report::{write_fry_detail, write_summary};

/// Characteristic-distance strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Peak single-neighbour probability (Mode A)
    A,
    /// Cumulative-curve inflection with total-connectivity distance (Mode B)
    B,
}

impl From<ModeArg> for EstimatorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::A => Self::PeakSingleNeighbour,
            ModeArg::B => Self::CumulativeInflection,
        }
    }
}

#[derive(Parser)]
#[command(name = "fryrose")]
#[command(
    author,
    version,
    about = "Fry transform and nearest-neighbour statistics for deposit point sets"
)]
/// Command-line arguments for the analysis tool
pub struct Cli {
    /// Input CSV file with X and Y coordinate columns in meters
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Characteristic-distance strategy
    #[arg(short, long, value_enum, default_value = "b")]
    pub mode: ModeArg,

    /// Number of samples in the threshold sweep
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Rose-diagram bin width in degrees
    #[arg(short, long, default_value_t = DEFAULT_BIN_WIDTH_DEG)]
    pub bin_width: f64,

    /// Directory for figures and reports
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Write reports only, no figures
    #[arg(long)]
    pub skip_plots: bool,

    /// Suppress summary output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates one analysis run from CLI arguments
pub struct AnalysisRunner {
    cli: Cli,
}

impl AnalysisRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the input, run the pipeline, and write all artifacts
    ///
    /// # Errors
    ///
    /// Returns an error when loading, validation, export, or rendering
    /// fails; the message names the violated precondition.
    pub fn run(&self) -> Result<()> {
        let points = load_point_set(&self.cli.input)?;

        let config = PipelineConfig {
            mode: self.cli.mode.into(),
            grid_size: self.cli.grid_size,
            bin_width_deg: self.cli.bin_width,
        };
        let output = pipeline::run(&points, config)?;

        fs::create_dir_all(&self.cli.out_dir)
            .map_err(|e| file_system_error(self.cli.out_dir.clone(), "create directory", e))?;

        write_summary(&output, &self.cli.out_dir.join(SUMMARY_FILE))?;
        write_fry_detail(&points, &output, &self.cli.out_dir.join(FRY_DETAIL_FILE))?;

        if !self.cli.skip_plots {
            self.render_figures(&output)?;
        }

        if !self.cli.quiet {
            Self::print_summary(&output);
        }

        Ok(())
    }

    fn render_figures(&self, output: &PipelineOutput) -> Result<()> {
        plot_probability_curve(&output.estimate, &self.cli.out_dir.join(CURVE_PLOT_FILE))?;

        let mut radii = vec![output.estimate.distance];
        if let Some(connectivity) = output.estimate.total_connectivity {
            radii.push(connectivity);
        }
        plot_fry_scatter(
            &output.fry_points,
            &radii,
            &self.cli.out_dir.join(FRY_PLOT_FILE),
        )?;

        plot_rose_diagram(
            &output.rose_all,
            "Rose diagram - all Fry points",
            &self.cli.out_dir.join(ROSE_ALL_FILE),
        )?;

        let characteristic_km = output.estimate.distance / METERS_PER_KILOMETER;
        plot_rose_diagram(
            &output.rose_characteristic,
            &format!("Rose diagram - Fry points within {characteristic_km:.1} km"),
            &self.cli.out_dir.join(ROSE_CHARACTERISTIC_FILE),
        )?;

        if let Some(rose) = &output.rose_connectivity {
            plot_rose_diagram(
                rose,
                "Rose diagram - Fry points within total connectivity",
                &self.cli.out_dir.join(ROSE_CONNECTIVITY_FILE),
            )?;
        }

        Ok(())
    }

    // Allow print for user-facing run summary
    #[allow(clippy::print_stdout)]
    fn print_summary(output: &PipelineOutput) {
        println!("Number of deposits: {}", output.point_count);
        println!("Fry pairs: {}", output.fry_points.len());
        println!(
            "Characteristic distance ({}): {:.2} km",
            output.estimate.mode.label(),
            output.estimate.distance / METERS_PER_KILOMETER
        );
        match output.estimate.total_connectivity {
            Some(radius) => println!(
                "Total-connectivity distance: {:.2} km",
                radius / METERS_PER_KILOMETER
            ),
            None => {
                if output.estimate.mode == EstimatorMode::CumulativeInflection {
                    println!("Total-connectivity distance: not reached in swept range");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisRunner, Cli, ModeArg};
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fryrose", "deposits.csv"]);
        assert_eq!(cli.mode, ModeArg::B);
        assert_eq!(cli.grid_size, 300);
        assert!((cli.bin_width - 10.0).abs() < f64::EPSILON);
        assert!(!cli.skip_plots);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_full_run_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deposits.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "X,Y").unwrap();
        for (x, y) in [(0.0, 0.0), (1000.0, 0.0), (0.0, 1500.0), (2500.0, 2500.0)] {
            writeln!(file, "{x},{y}").unwrap();
        }

        let out_dir = dir.path().join("figures");
        let cli = Cli::parse_from([
            "fryrose",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--skip-plots",
            "--quiet",
        ]);

        AnalysisRunner::new(cli).run().unwrap();

        assert!(out_dir.join("summary.csv").exists());
        assert!(out_dir.join("fry_points.csv").exists());
    }
}
