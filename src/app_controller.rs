use anyhow::Result;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use crate::app_config::Config;
use crate::culture::Culture;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::line_converter;
use crate::line_preparer;

// @module: Application controller for batch file conversion

/// Main application controller for the conversion run
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Source culture resolved once for the whole run
    culture: Culture,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let culture = Culture::resolve(&config.source_culture_name)?;
        Ok(Self { config, culture })
    }

    /// The culture this run parses under
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Convert every input file, one concurrent task per filename.
    ///
    /// Waits for all tasks to finish before returning. A failure in one
    /// file's pipeline is caught and logged inside its own task; it never
    /// cancels or delays the others and is never aggregated into a
    /// batch-level error.
    pub async fn run(&self, filenames: &[String]) -> Result<()> {
        let progress = ProgressBar::new(filenames.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style);
        progress.set_message("Converting");

        let mut tasks = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let filename = filename.clone();
            let config = self.config.clone();
            // Each task captures its own culture value; nothing is shared
            // mutably between files.
            let culture = self.culture.clone();
            let task_progress = progress.clone();

            tasks.push(tokio::spawn(async move {
                if let Err(e) = convert_file(&filename, &config, &culture) {
                    error!("{}: {}", filename, e);
                }
                task_progress.inc(1);
            }));
        }

        for joined in join_all(tasks).await {
            if let Err(e) = joined {
                error!("Conversion task failed to complete: {}", e);
            }
        }
        progress.finish_and_clear();

        Ok(())
    }

    /// Convert a single file with this controller's configuration
    pub fn convert_file(&self, filename: &str) -> Result<(), AppError> {
        convert_file(filename, &self.config, &self.culture)
    }
}

/// Run the whole pipeline for one file: read, prepare, dispatch each line,
/// length-prefix, write `<filename>.out`.
///
/// Any failure abandons the file without writing partial output; within the
/// file, lines are processed strictly in order.
pub fn convert_file(filename: &str, config: &Config, culture: &Culture) -> Result<(), AppError> {
    if config.verbose {
        info!("Processing file {}", filename);
        info!("Source culture {}", culture.name());
    }

    let raw_lines = FileManager::read_lines(filename)?;

    let mut converted = Vec::with_capacity(raw_lines.len() + 1);
    for line in line_preparer::prepare_lines(raw_lines) {
        let normalized = line_converter::convert_line(&line, culture)?;
        converted.push(line_converter::length_prefixed(&normalized));
    }

    FileManager::write_lines(FileManager::output_path(filename), &converted)
}
