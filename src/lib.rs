pub mod basename;
pub mod bilingual;
pub mod branch;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod qualifiers;
pub mod termdata;
pub mod terms;

use std::fs;
use std::path::Path;

use log::warn;
use rayon::prelude::*;

pub use basename::{BasenameOptions, CleanState, basename, basename_with};
pub use dictionary::{TermCatalog, catalog, catalog_loaded, init_catalog};
pub use error::{CleanError, Result};
pub use matcher::{CountryNames, MatchPositions, custom_basename};
pub use normalize::remove_accents;
pub use terms::{TermEntry, TermTable, cached_terms, prepare_default_terms, prepare_terms};

/// Clean many names in parallel. Output order follows input order.
pub fn basename_batch<S>(names: &[S], options: &BasenameOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    names
        .par_iter()
        .map(|name| basename_with(name.as_ref(), options))
        .collect()
}

/// Summary of a [`clean_names_file`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReport {
    pub lines_read: u64,
    pub lines_changed: u64,
}

/// Clean a file of names (one per line) into `output_path`.
///
/// Lines that are not valid UTF-8 are cleaned lossily and logged.
pub fn clean_names_file(
    input_path: &Path,
    output_path: &Path,
    options: &BasenameOptions,
) -> Result<FileReport> {
    let bytes = fs::read(input_path).map_err(|source| CleanError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = Vec::new();
    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        match std::str::from_utf8(raw) {
            Ok(line) => names.push(line.to_string()),
            Err(e) => {
                warn!(
                    "{}:{}: invalid UTF-8 ({}), cleaning lossily",
                    input_path.display(),
                    idx + 1,
                    e
                );
                names.push(String::from_utf8_lossy(raw).into_owned());
            }
        }
    }
    // A terminating newline does not start another name
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        names.pop();
    }

    let cleaned = basename_batch(&names, options);
    let lines_changed = names
        .iter()
        .zip(&cleaned)
        .filter(|(before, after)| before != after)
        .count() as u64;

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| CleanError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut out = cleaned.join("\n");
    if !cleaned.is_empty() {
        out.push('\n');
    }
    fs::write(output_path, out).map_err(|source| CleanError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(FileReport {
        lines_read: names.len() as u64,
        lines_changed,
    })
}

#[cfg(feature = "python")]
mod python {
    use std::path::Path;

    use pyo3::exceptions::{PyIOError, PyValueError};
    use pyo3::prelude::*;

    use crate::{BasenameOptions, CleanError, CountryNames, MatchPositions, TermTable, catalog};

    impl From<CleanError> for PyErr {
        fn from(err: CleanError) -> PyErr {
            match err {
                CleanError::Read { .. } | CleanError::Write { .. } => {
                    PyIOError::new_err(err.to_string())
                }
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    fn options(suffix: bool, prefix: bool, middle: bool, country: Option<String>) -> BasenameOptions {
        BasenameOptions {
            suffix,
            prefix,
            middle,
            country,
        }
    }

    /// Clean a business name
    #[pyfunction]
    #[pyo3(signature = (name, suffix=true, prefix=true, middle=false, country=None))]
    fn basename(
        name: String,
        suffix: bool,
        prefix: bool,
        middle: bool,
        country: Option<String>,
    ) -> PyResult<String> {
        Ok(crate::basename_with(
            &name,
            &options(suffix, prefix, middle, country),
        ))
    }

    /// Strip terms using a table from `prepare_default_terms`
    #[pyfunction]
    #[pyo3(signature = (name, terms, suffix=true, prefix=false, middle=false, country_names=None))]
    fn custom_basename(
        name: String,
        terms: Vec<(usize, Vec<String>)>,
        suffix: bool,
        prefix: bool,
        middle: bool,
        country_names: Option<Vec<String>>,
    ) -> PyResult<String> {
        let table = TermTable::from_pairs(terms);
        let countries = CountryNames::new(
            &catalog().all_country_names(),
            &country_names.unwrap_or_default(),
        );
        let positions = MatchPositions {
            suffix,
            prefix,
            middle,
        };
        Ok(crate::custom_basename(&name, &table, positions, &countries))
    }

    /// Returns: list of (token_count, tokens) in matching order
    #[pyfunction]
    #[pyo3(signature = (country=None))]
    fn prepare_default_terms(country: Option<String>) -> PyResult<Vec<(usize, Vec<String>)>> {
        let country = country.map(|c| catalog().resolve_country(&c));
        Ok(crate::prepare_default_terms(country.as_deref()).to_pairs())
    }

    #[pyfunction]
    #[pyo3(signature = (names, suffix=true, prefix=true, middle=false, country=None))]
    fn basename_batch(
        names: Vec<String>,
        suffix: bool,
        prefix: bool,
        middle: bool,
        country: Option<String>,
    ) -> PyResult<Vec<String>> {
        Ok(crate::basename_batch(
            &names,
            &options(suffix, prefix, middle, country),
        ))
    }

    /// Returns: (lines_read, lines_changed)
    #[pyfunction]
    #[pyo3(signature = (input_path, output_path, suffix=true, prefix=true, middle=false, country=None))]
    fn clean_names_file(
        input_path: String,
        output_path: String,
        suffix: bool,
        prefix: bool,
        middle: bool,
        country: Option<String>,
    ) -> PyResult<(u64, u64)> {
        let report = crate::clean_names_file(
            Path::new(&input_path),
            Path::new(&output_path),
            &options(suffix, prefix, middle, country),
        )?;
        Ok((report.lines_read, report.lines_changed))
    }

    /// Install a JSON term catalog (once per process)
    #[pyfunction]
    fn init_catalog(path: String) -> PyResult<()> {
        crate::init_catalog(Path::new(&path))?;
        Ok(())
    }

    #[pymodule]
    fn rust_company_clean(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(basename, m)?)?;
        m.add_function(wrap_pyfunction!(custom_basename, m)?)?;
        m.add_function(wrap_pyfunction!(prepare_default_terms, m)?)?;
        m.add_function(wrap_pyfunction!(basename_batch, m)?)?;
        m.add_function(wrap_pyfunction!(clean_names_file, m)?)?;
        m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
        Ok(())
    }
}
