use sweepgrid_core::DirtSet;

/// Parameters for [`GridGenerator`](crate::GridGenerator).
///
/// # Examples
///
/// ```
/// use sweepgrid_generator::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     rows: 6,
///     cols: 8,
///     ..GeneratorConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of grid rows (at least 1).
    pub rows: usize,
    /// Number of grid columns (at least 1).
    pub cols: usize,
    /// Probability in `[0, 1]` that a non-start cell becomes a wall.
    pub wall_density: f64,
    /// Probability in `[0, 1]` that an open non-start cell becomes dirty.
    pub dirt_density: f64,
    /// Upper bound on the number of dirty cells.
    ///
    /// The search space of the solver doubles with every dirty cell, so this
    /// keeps generated puzzles tractable.
    pub max_dirt: usize,
    /// Number of candidates to build before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            wall_density: 0.15,
            dirt_density: 0.3,
            max_dirt: 8,
            max_attempts: 1000,
        }
    }
}

/// Reasons a [`GeneratorConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Zero rows or zero columns.
    #[display("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyDimensions {
        /// Configured rows.
        rows: usize,
        /// Configured columns.
        cols: usize,
    },
    /// A density is NaN or outside `[0, 1]`.
    #[display("{name} must be within [0, 1], got {value}")]
    DensityOutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// Configured value.
        value: f64,
    },
    /// `max_dirt` exceeds what the solver can index.
    #[display("max_dirt must be at most {}, got {max_dirt}", DirtSet::MAX_LEN)]
    TooMuchDirt {
        /// Configured dirt bound.
        max_dirt: usize,
    },
    /// `max_attempts` is zero.
    #[display("max_attempts must be at least 1")]
    NoAttempts,
}

impl GeneratorConfig {
    /// Checks that the configuration can produce grids.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (name, value) in [
            ("wall_density", self.wall_density),
            ("dirt_density", self.dirt_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::DensityOutOfRange { name, value });
            }
        }
        if self.max_dirt > DirtSet::MAX_LEN {
            return Err(ConfigError::TooMuchDirt {
                max_dirt: self.max_dirt,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}
