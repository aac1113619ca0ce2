//! Writing the record dump and the derived frequency tables to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{HarvestError, HarvestResult};
use crate::formatters;
use crate::harvest::validate_issn;
use crate::models::{FrequencyTable, WorkRecord};
use crate::stats::CorpusFrequencies;

/// Paths of the four files produced for one ISSN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<issn>.csv`
    pub records: PathBuf,
    /// `<issn>_title_frequency.csv`
    pub title_frequency: PathBuf,
    /// `<issn>_author_frequency.csv`
    pub author_frequency: PathBuf,
    /// `<issn>_institution_frequency.csv`
    pub institution_frequency: PathBuf,
}

impl OutputPaths {
    /// Lay out the output files for `issn` under `dir`.
    #[must_use]
    pub fn new(dir: &Path, issn: &str) -> Self {
        Self {
            records: dir.join(format!("{issn}.csv")),
            title_frequency: dir.join(format!("{issn}_title_frequency.csv")),
            author_frequency: dir.join(format!("{issn}_author_frequency.csv")),
            institution_frequency: dir.join(format!("{issn}_institution_frequency.csv")),
        }
    }

    /// All four paths, records first.
    #[must_use]
    pub fn all(&self) -> [&Path; 4] {
        [&self.records, &self.title_frequency, &self.author_frequency, &self.institution_frequency]
    }
}

/// Aggregate `papers` and write the record dump plus the three frequency tables.
///
/// Existing files are overwritten.
pub fn write_derived_products(
    papers: &[WorkRecord],
    issn: &str,
    dir: &Path,
) -> HarvestResult<OutputPaths> {
    let issn = validate_issn(issn)?;
    let paths = OutputPaths::new(dir, issn);

    let frequencies = CorpusFrequencies::from_papers(papers);

    std::fs::create_dir_all(dir).map_err(|e| HarvestError::io(dir, e))?;

    tracing::info!(path = %paths.records.display(), records = papers.len(), "Writing paper info");
    let file = create(&paths.records)?;
    formatters::write_records(file, papers)?;

    write_table("Title", &paths.title_frequency, &frequencies.titles)?;
    write_table("Author", &paths.author_frequency, &frequencies.authors)?;
    write_table("Institution", &paths.institution_frequency, &frequencies.institutions)?;

    Ok(paths)
}

fn write_table(name: &str, path: &Path, table: &FrequencyTable) -> HarvestResult<()> {
    tracing::info!(path = %path.display(), keys = table.len(), "Writing {name} frequency info");
    let file = create(path)?;
    formatters::write_frequencies(file, table)?;
    Ok(())
}

fn create(path: &Path) -> HarvestResult<BufWriter<File>> {
    File::create(path).map(BufWriter::new).map_err(|e| HarvestError::io(path, e))
}
