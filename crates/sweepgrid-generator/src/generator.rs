use log::{debug, trace};
use rand::{Rng, seq::SliceRandom as _};
use sweepgrid_core::{Grid, GridError};

use crate::{ConfigError, GeneratorConfig, GridSeed, validate};

/// Errors produced by [`GridGenerator`].
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The configuration cannot produce grids.
    #[display("invalid generator configuration: {_0}")]
    #[from]
    InvalidConfig(ConfigError),
    /// Building a candidate grid failed.
    #[display("failed to build grid: {_0}")]
    #[from]
    Grid(GridError),
    /// Every candidate within the retry budget was disconnected.
    #[display("no connected grid found in {attempts} attempts")]
    AttemptsExhausted {
        /// Number of candidates built.
        attempts: usize,
    },
}

/// A generated grid together with the data needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The connected grid.
    pub grid: Grid,
    /// Seed that reproduces `grid` under the same configuration.
    pub seed: GridSeed,
    /// Number of candidates built, including the accepted one.
    pub attempts: usize,
}

/// Generates random connected cleaning grids.
///
/// Each attempt builds a brand-new candidate: walls are scattered over the
/// non-start cells, then dirt over the remaining open non-start cells. A
/// candidate that fails [`validate`] is discarded whole; it is never patched.
/// After [`GeneratorConfig::max_attempts`] rejected candidates the generator
/// gives up with [`GenerateError::AttemptsExhausted`].
///
/// # Examples
///
/// ```
/// use sweepgrid_core::Grid;
/// use sweepgrid_generator::{GeneratorConfig, GridGenerator, validate};
///
/// let generator = GridGenerator::new(GeneratorConfig::default());
/// let generated = generator.generate()?;
///
/// assert!(!generated.grid.is_wall(Grid::START));
/// assert!(validate(&generated.grid));
/// # Ok::<(), sweepgrid_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridGenerator {
    config: GeneratorConfig,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl GridGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a grid from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_rng`](Self::generate_with_rng).
    pub fn generate(&self) -> Result<GeneratedGrid, GenerateError> {
        self.generate_with_seed(GridSeed::random())
    }

    /// Generates the grid determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`generate_with_rng`](Self::generate_with_rng).
    pub fn generate_with_seed(&self, seed: GridSeed) -> Result<GeneratedGrid, GenerateError> {
        let mut rng = seed.rng();
        let (grid, attempts) = self.generate_counted(&mut rng)?;
        Ok(GeneratedGrid {
            grid,
            seed,
            attempts,
        })
    }

    /// Generates a grid using randomness drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidConfig`] if the configuration is
    /// rejected by [`GeneratorConfig::validate`], and
    /// [`GenerateError::AttemptsExhausted`] if no connected candidate was
    /// found within the retry budget.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Grid, GenerateError>
    where
        R: Rng + ?Sized,
    {
        self.generate_counted(rng).map(|(grid, _)| grid)
    }

    fn generate_counted<R>(&self, rng: &mut R) -> Result<(Grid, usize), GenerateError>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        for attempt in 1..=self.config.max_attempts {
            let candidate = self.build_candidate(rng)?;
            if validate(&candidate) {
                debug!(
                    "generated {}x{} grid with {} walls and {} dirt after {attempt} attempt(s)",
                    candidate.rows(),
                    candidate.cols(),
                    candidate.wall_count(),
                    candidate.dirt_count(),
                );
                return Ok((candidate, attempt));
            }
            trace!("rejected disconnected candidate #{attempt}");
        }
        Err(GenerateError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }

    fn build_candidate<R>(&self, rng: &mut R) -> Result<Grid, GridError>
    where
        R: Rng + ?Sized,
    {
        let GeneratorConfig {
            rows,
            cols,
            wall_density,
            dirt_density,
            max_dirt,
            max_attempts: _,
        } = self.config;

        let mut grid = Grid::new(rows, cols)?;
        for pos in grid.positions() {
            if pos != Grid::START && rng.random_bool(wall_density) {
                grid.set_wall(pos, true)?;
            }
        }

        let mut open = grid
            .positions()
            .filter(|&pos| pos != Grid::START && grid.is_open(pos))
            .collect::<Vec<_>>();
        open.shuffle(rng);

        let mut placed = 0;
        for pos in open {
            if placed == max_dirt {
                break;
            }
            if rng.random_bool(dirt_density) {
                grid.set_dirty(pos, true)?;
                placed += 1;
            }
        }
        Ok(grid)
    }
}
