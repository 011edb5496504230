//! Core SheetHaus functionality
//!
//! This module contains the main SheetHaus struct, which ties the mapping layer
//! to a grid renderer and exposes the export and import entry points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use render_system::{GridRenderer, XlsxRenderer};
use sheet_object::{
    AliasTable, LogicalGrid, ReadReport, TabularRecord, read_records, read_records_detailed,
    write_records,
};

use crate::debug_log;
use crate::errors::SheetHausError;
use config::AppConfig;

/// One independent export handed to [`SheetHaus::export_batch`]
#[derive(Debug)]
pub struct ExportJob<'a, R> {
    pub records: &'a [R],
    pub alias: Option<&'a AliasTable>,
    pub title: Option<&'a str>,
}

impl<'a, R> ExportJob<'a, R> {
    pub fn new(records: &'a [R]) -> Self {
        Self {
            records,
            alias: None,
            title: None,
        }
    }

    pub fn with_alias(mut self, alias: &'a AliasTable) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

// Holds only references, no bound on `R`
impl<R> Clone for ExportJob<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ExportJob<'_, R> {}

/// Main SheetHaus coordinator: configuration plus the renderer it drives
#[derive(Debug, Clone)]
pub struct SheetHaus {
    config: AppConfig,
    renderer: XlsxRenderer,
}

impl SheetHaus {
    /// Create a new SheetHaus rendering XLSX with the given configuration
    pub fn new(config: AppConfig) -> Result<Self, SheetHausError> {
        config.validate()?;
        let renderer = XlsxRenderer::new(&config);
        Ok(Self { config, renderer })
    }

    /// Load configuration from a TOML file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetHausError> {
        Self::new(AppConfig::from_file(path)?)
    }

    /// Load configuration from `SHEETHAUS_CONFIG` or `./sheethaus.toml`
    pub fn from_env() -> Result<Self, SheetHausError> {
        Self::new(AppConfig::load()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn renderer(&self) -> &XlsxRenderer {
        &self.renderer
    }

    /// Lay out records as a logical grid without rendering it.
    ///
    /// The title falls back to the configured default title, then to the
    /// record name.
    pub fn to_grid<R: TabularRecord>(
        &self,
        records: &[R],
        alias: Option<&AliasTable>,
        title: Option<&str>,
    ) -> Result<LogicalGrid, SheetHausError> {
        let title = title.or(self.config.export.default_title.as_deref());
        Ok(write_records(records, alias, title)?)
    }

    /// Export records into an in-memory document
    pub fn export_to_table<R: TabularRecord>(
        &self,
        records: &[R],
        alias: Option<&AliasTable>,
        title: Option<&str>,
    ) -> Result<Vec<u8>, SheetHausError> {
        let grid = self.to_grid(records, alias, title)?;
        let bytes = self.renderer.render_to_bytes(&grid)?;
        debug_log!("Exported {} records into {} bytes", records.len(), bytes.len());
        Ok(bytes)
    }

    /// Export records into any byte sink
    pub fn export_to_writer<R: TabularRecord, W: Write>(
        &self,
        records: &[R],
        alias: Option<&AliasTable>,
        title: Option<&str>,
        sink: &mut W,
    ) -> Result<(), SheetHausError> {
        let grid = self.to_grid(records, alias, title)?;
        self.renderer.render(&grid, sink)?;
        Ok(())
    }

    /// Export records into a file, creating or truncating it
    pub fn export_to_path<R: TabularRecord, P: AsRef<Path>>(
        &self,
        records: &[R],
        alias: Option<&AliasTable>,
        title: Option<&str>,
        path: P,
    ) -> Result<(), SheetHausError> {
        let path = path.as_ref();
        // Lay out first so a mapping error never leaves an empty file behind
        let grid = self.to_grid(records, alias, title)?;

        let mut sink = BufWriter::new(File::create(path)?);
        self.renderer.render(&grid, &mut sink)?;
        sink.flush()?;

        tracing::debug!("Exported {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Import records from an in-memory document
    pub fn import_from_table<R: TabularRecord>(
        &self,
        bytes: &[u8],
        alias: Option<&AliasTable>,
    ) -> Result<Vec<R>, SheetHausError> {
        self.import_from_reader(Cursor::new(bytes), alias)
    }

    /// Import records from any seekable byte source
    pub fn import_from_reader<R: TabularRecord, RS: Read + Seek>(
        &self,
        source: RS,
        alias: Option<&AliasTable>,
    ) -> Result<Vec<R>, SheetHausError> {
        let grid = self.renderer.parse(source)?;
        Ok(read_records(&grid, alias)?)
    }

    /// Import records from a file
    pub fn import_from_path<R: TabularRecord, P: AsRef<Path>>(
        &self,
        path: P,
        alias: Option<&AliasTable>,
    ) -> Result<Vec<R>, SheetHausError> {
        let source = BufReader::new(File::open(path.as_ref())?);
        self.import_from_reader(source, alias)
    }

    /// Import records along with every cell that could not be converted
    pub fn import_report<R: TabularRecord, RS: Read + Seek>(
        &self,
        source: RS,
        alias: Option<&AliasTable>,
    ) -> Result<ReadReport<R>, SheetHausError> {
        let grid = self.renderer.parse(source)?;
        let report = read_records_detailed(&grid, alias)?;

        if !report.is_clean() {
            tracing::debug!(
                "Imported {} records, {} fields left at their defaults",
                report.records.len(),
                report.issues.len()
            );
        }

        Ok(report)
    }

    /// Export independent jobs concurrently, one document per job, in job order.
    ///
    /// Runs on a dedicated pool of `workers` threads (0 lets rayon decide) and
    /// falls back to serial export when the pool cannot be built.
    pub fn export_batch<R: TabularRecord + Sync>(
        &self,
        jobs: &[ExportJob<'_, R>],
        workers: usize,
    ) -> Vec<Result<Vec<u8>, SheetHausError>> {
        let export = |job: &ExportJob<'_, R>| self.export_to_table(job.records, job.alias, job.title);

        if jobs.len() <= 1 || workers == 1 {
            return jobs.iter().map(export).collect();
        }

        let thread_pool = ThreadPoolBuilder::new().num_threads(workers).build();
        let Ok(thread_pool) = thread_pool else {
            tracing::warn!(
                "Failed to initialize thread pool (workers={}); fallback to serial export.",
                workers
            );
            return jobs.iter().map(export).collect();
        };

        thread_pool.install(|| jobs.par_iter().map(export).collect())
    }
}

impl Default for SheetHaus {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            renderer: XlsxRenderer::default(),
        }
    }
}
