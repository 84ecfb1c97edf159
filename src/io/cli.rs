//! Command-line interface and pipeline runner

use crate::io::configuration::{DEFAULT_SEED, MAX_MAP_DIMENSION};
use crate::io::error::{Error, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::section::write_section;
use crate::library::config::SectionConfig;
use crate::library::database::SectionChooser;
use crate::library::loader::{create_database_from, create_fuzzy_database_from};
use crate::terrain::creator::TerrainCreator;
use crate::terrain::labels::Symmetry;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Convert a terrain image into a game map by stitching library sections"
)]
/// Command-line arguments for the map conversion tool
pub struct Cli {
    /// Input terrain image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output map file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Map size in cells, written as WxH
    #[arg(short, long, value_name = "WxH")]
    pub size: String,

    /// Section library root directory
    #[arg(short, long, value_name = "DIR")]
    pub library_path: PathBuf,

    /// Section classification config (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Random seed for reproducible section selection
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Require exact pattern matches instead of nearest-match fallback
    #[arg(short, long)]
    pub exact: bool,

    /// Treat rotated and reflected corner patterns as interchangeable
    #[arg(short = 'y', long)]
    pub symmetric: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `WxH` map size argument into positive cell dimensions
///
/// # Errors
///
/// Returns an error if the separator is missing, either part is not an
/// integer, or a dimension is zero or absurdly large.
pub fn parse_size(size: &str) -> Result<(usize, usize)> {
    let (width_part, height_part) = size
        .split_once('x')
        .ok_or_else(|| invalid_parameter("size", &size, &"expected WxH, e.g. 16x16"))?;

    let width: usize = width_part
        .parse()
        .map_err(|_| invalid_parameter("size", &size, &format!("invalid width '{width_part}'")))?;
    let height: usize = height_part.parse().map_err(|_| {
        invalid_parameter("size", &size, &format!("invalid height '{height_part}'"))
    })?;

    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"dimensions must be positive",
        ));
    }
    if width > MAX_MAP_DIMENSION || height > MAX_MAP_DIMENSION {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("dimensions exceed the {MAX_MAP_DIMENSION} cell limit"),
        ));
    }
    Ok((width, height))
}

/// Runs the whole conversion: load library, quantize, decide, render, write
pub struct Pipeline {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl Pipeline {
    /// Create a pipeline from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Execute the conversion
    ///
    /// # Errors
    ///
    /// Returns the first failure from argument validation, library loading,
    /// terrain creation, or output writing; nothing is retried and no
    /// partial output is written.
    pub fn run(&mut self) -> Result<()> {
        let (map_width, map_height) = parse_size(&self.cli.size)?;

        // Sections sit on grid intersections, so a WxH cell map needs a
        // (W+1)x(H+1) section grid. Compensate here, once.
        let grid_width = map_width + 1;
        let grid_height = map_height + 1;

        if let Some(ref progress) = self.progress {
            progress.stage(format!("Loading config {}", self.cli.config.display()));
        }
        let config = SectionConfig::from_path(&self.cli.config)?;

        if let Some(ref progress) = self.progress {
            progress.stage(format!(
                "Loading section library {}",
                self.cli.library_path.display()
            ));
        }

        let symmetry = if self.cli.symmetric {
            Symmetry::Dihedral
        } else {
            Symmetry::None
        };

        let chooser: Box<dyn SectionChooser> = if self.cli.exact {
            let database =
                create_database_from(&self.cli.library_path, &config, self.cli.seed)?;
            self.report_stage(format!("Loaded {} sections", database.section_count()));
            Box::new(database)
        } else {
            let selector =
                create_fuzzy_database_from(&self.cli.library_path, &config, self.cli.seed)?;
            self.report_stage(format!("Loaded {} sections", selector.section_count()));
            Box::new(selector)
        };

        let mut creator =
            TerrainCreator::with_chooser(chooser, grid_width, grid_height, symmetry)?;

        self.report_stage(format!("Reading image {}", self.cli.input.display()));
        let image = image::open(&self.cli.input).map_err(|e| Error::ImageLoad {
            path: self.cli.input.clone(),
            source: e,
        })?;

        self.report_stage("Creating terrain".to_string());
        let terrain = creator.create_terrain_from(&image)?;

        self.report_stage(format!("Writing {}", self.cli.output.display()));
        let mut output = File::create(&self.cli.output).map_err(|e| Error::FileSystem {
            path: self.cli.output.clone(),
            operation: "create output",
            source: e,
        })?;
        write_section(&mut output, &terrain)?;

        if let Some(ref progress) = self.progress {
            progress.finish(format!("Wrote {}", self.cli.output.display()));
        }
        Ok(())
    }

    fn report_stage(&self, message: String) {
        if let Some(ref progress) = self.progress {
            progress.stage(message);
        }
    }
}
