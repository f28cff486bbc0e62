//! Directional aggregation of azimuths into rose-diagram histograms
//!
//! Azimuths are partitioned into equal-width circular bins. The axial form
//! covers [0°, 180°); the folded form duplicates every azimuth at +180° and
//! bins over [0°, 360°) for symmetric polar rendering. A value exactly on a
//! bin edge belongs to the bin whose lower edge it equals.

use crate::io::error::{Result, invalid_parameter};
use crate::math::azimuth::{AXIAL_RANGE_DEG, COMPASS_RANGE_DEG, fold_to_compass};

/// Fixed-width circular histogram of azimuth counts
#[derive(Debug, Clone, PartialEq)]
pub struct AzimuthHistogram {
    bin_width: f64,
    range: f64,
    counts: Vec<usize>,
}

impl AzimuthHistogram {
    /// Bin axial azimuths over [0°, 180°)
    ///
    /// The bin count is `ceil(180 / bin_width)`; a width that does not
    /// divide 180 evenly leaves a final short bin.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error when `bin_width` is not in
    /// (0°, 180°].
    pub fn axial(azimuths: &[f64], bin_width: f64) -> Result<Self> {
        Self::over_range(azimuths, bin_width, AXIAL_RANGE_DEG)
    }

    /// Fold axial azimuths to [0°, 360°) and bin the doubled sequence
    ///
    /// Every axial direction contributes its two equivalent compass
    /// headings, so the total count is exactly double the input count.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error when `bin_width` is not in
    /// (0°, 180°].
    pub fn folded(azimuths: &[f64], bin_width: f64) -> Result<Self> {
        Self::over_range(&fold_to_compass(azimuths), bin_width, COMPASS_RANGE_DEG)
    }

    fn over_range(azimuths: &[f64], bin_width: f64, range: f64) -> Result<Self> {
        if !(bin_width > 0.0 && bin_width <= AXIAL_RANGE_DEG) {
            return Err(invalid_parameter(
                "bin_width",
                &bin_width,
                &"bin width must be positive and at most 180 degrees",
            ));
        }

        let bins = (range / bin_width).ceil() as usize;
        let mut counts = vec![0_usize; bins];
        for &az in azimuths {
            let index = ((az.rem_euclid(range)) / bin_width) as usize;
            if let Some(count) = counts.get_mut(index.min(bins.saturating_sub(1))) {
                *count += 1;
            }
        }

        Ok(Self {
            bin_width,
            range,
            counts,
        })
    }

    /// Width of each bin in degrees
    pub const fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Total angular range covered, 180° axial or 360° folded
    pub const fn range(&self) -> f64 {
        self.range
    }

    /// Number of bins
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-bin counts in increasing-azimuth order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Sum of all bin counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single bin count, zero for an empty histogram
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower edge of each bin in degrees, paired with its count
    pub fn edges_and_counts(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(k, &c)| (k as f64 * self.bin_width, c))
    }
}

#[cfg(test)]
mod tests {
    use super::AzimuthHistogram;

    #[test]
    fn test_rejects_bad_bin_width() {
        assert!(AzimuthHistogram::axial(&[], 0.0).is_err());
        assert!(AzimuthHistogram::axial(&[], -5.0).is_err());
        assert!(AzimuthHistogram::axial(&[], 181.0).is_err());
    }

    #[test]
    fn test_axial_default_width_layout() {
        let hist = AzimuthHistogram::axial(&[0.0, 5.0, 9.999, 10.0, 95.0, 179.9], 10.0).unwrap();
        assert_eq!(hist.bin_count(), 18);
        assert_eq!(hist.total(), 6);
        // First three values share the [0°, 10°) bin
        assert_eq!(hist.counts().first(), Some(&3));
        // 10.0 sits exactly on an edge and belongs to the bin it opens
        assert_eq!(hist.counts().get(1), Some(&1));
        assert_eq!(hist.counts().get(9), Some(&1));
        assert_eq!(hist.counts().last(), Some(&1));
    }

    #[test]
    fn test_counts_sum_to_input_count() {
        let azimuths: Vec<f64> = (0..500).map(|k| f64::from(k) * 0.359).collect();
        let axial: Vec<f64> = azimuths.iter().map(|a| a.rem_euclid(180.0)).collect();
        let hist = AzimuthHistogram::axial(&axial, 10.0).unwrap();
        assert_eq!(hist.total(), axial.len());
    }

    #[test]
    fn test_folded_doubles_counts() {
        let azimuths = [0.0, 30.0, 30.0, 150.0];
        let axial = AzimuthHistogram::axial(&azimuths, 10.0).unwrap();
        let folded = AzimuthHistogram::folded(&azimuths, 10.0).unwrap();

        assert_eq!(folded.bin_count(), 36);
        assert_eq!(folded.total(), 2 * axial.total());
        // Each axial bin reappears 180° away
        assert_eq!(folded.counts().get(3), Some(&2));
        assert_eq!(folded.counts().get(21), Some(&2));
    }

    #[test]
    fn test_uneven_width_leaves_short_final_bin() {
        let hist = AzimuthHistogram::axial(&[170.0, 179.0], 50.0).unwrap();
        // ceil(180 / 50) = 4 bins, the last spanning [150°, 180°)
        assert_eq!(hist.bin_count(), 4);
        assert_eq!(hist.counts().last(), Some(&2));
    }

    #[test]
    fn test_empty_input() {
        let hist = AzimuthHistogram::axial(&[], 10.0).unwrap();
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_count(), 0);
    }
}
