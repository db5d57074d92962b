//! Run-directory discovery for HYSPLIT output files
//!
//! A HYSPLIT run directory holds one trajectory endpoint file per release
//! (`traj-*`) and at most one `PARDUMP`. Discovery expands a directory path
//! into the concrete files to parse; file paths pass through unchanged.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::app::models::Table;
use crate::app::services::pardump_parser::{PardumpParser, PardumpResult};
use crate::app::services::trajectory_parser::{ParseStats, TrajectoryParser, TrajectoryVariant};
use crate::constants::{MIN_PARDUMP_TOKENS, PARDUMP_FILE_NAME, TRAJECTORY_FILE_PATTERN};
use crate::{Error, Result};

/// Find trajectory endpoint files under a run directory, sorted by name.
pub fn discover_trajectory_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(TRAJECTORY_FILE_PATTERN);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::configuration(format!("Non-UTF8 path: {}", dir.display())))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| Error::configuration(format!("Invalid glob pattern '{}': {}", pattern, e)))?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .collect();

    files.sort();
    debug!("Discovered {} trajectory files in {}", files.len(), dir.display());
    Ok(files)
}

/// Resolve the particle dump path for a file-or-directory input.
///
/// A directory resolves to its conventional `PARDUMP` member; a file path
/// passes through untouched.
pub fn resolve_pardump_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(PARDUMP_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Parse particle dump input that may be a file or a run directory.
///
/// A run directory that exists but holds no `PARDUMP` member is a valid
/// empty result, not an error; a missing or unopenable file path still
/// fails as file-not-found.
pub fn parse_pardump_input(path: &Path) -> Result<PardumpResult> {
    let resolved = resolve_pardump_path(path);

    if path.is_dir() && !resolved.exists() {
        debug!("No {} in {}, returning empty table", PARDUMP_FILE_NAME, path.display());
        return Ok(PardumpResult {
            table: Table::new(MIN_PARDUMP_TOKENS),
            stats: ParseStats::new(),
        });
    }

    PardumpParser::new().parse_file(&resolved)
}

/// Parse every trajectory file under a directory and concatenate the
/// resulting tables in file order.
///
/// Empty per-file tables are dropped. All non-empty tables must carry the
/// same column count; a mix of standard and extended files is a schema
/// mismatch reported against the offending file. With `show_progress` set,
/// a per-file progress bar is drawn while parsing.
pub fn parse_trajectory_dir(
    dir: &Path,
    show_progress: bool,
) -> Result<(Table, TrajectoryVariant)> {
    let files = discover_trajectory_files(dir)?;
    let parser = TrajectoryParser::new();

    let progress =
        (show_progress && !files.is_empty()).then(|| parse_progress_bar(files.len() as u64));

    let mut combined: Option<(Table, TrajectoryVariant)> = None;
    for file in &files {
        let result = parser.parse_file(file)?;
        debug!(
            "{}: {} rows, {} variant",
            file.display(),
            result.table.rows(),
            result.variant
        );

        if result.table.is_empty() {
            debug!("No rows in {}, skipping", file.display());
        } else {
            match combined.as_mut() {
                None => combined = Some((result.table, result.variant)),
                Some((table, _)) => {
                    table.append(&result.table).map_err(|found| {
                        Error::schema_mismatch(file.display().to_string(), table.columns(), found)
                    })?;
                }
            }
        }

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(combined.unwrap_or_else(|| (Table::new(0), TrajectoryVariant::Standard)))
}

fn parse_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("=>-"),
    );
    bar.set_message("Parsing trajectory files");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const STANDARD_FILE: &str = "\
     1 PRESSURE
     1     1    95     1     1     0     0     0     0.0   40.000  -90.000    10.0   975.0
     1     1    95     1     1     1     0     0     1.0   40.100  -90.100    25.0   970.0
";

    #[test]
    fn test_discover_sorted_trajectory_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "traj-002", "");
        write_file(dir.path(), "traj-001", "");
        write_file(dir.path(), "CONTROL", "");

        let files = discover_trajectory_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["traj-001", "traj-002"]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(discover_trajectory_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_pardump_for_directory() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_pardump_path(dir.path());
        assert_eq!(resolved, dir.path().join("PARDUMP"));
    }

    #[test]
    fn test_resolve_pardump_for_file_passthrough() {
        let path = Path::new("/tmp/some/PARDUMP.txt");
        assert_eq!(resolve_pardump_path(path), path.to_path_buf());
    }

    #[test]
    fn test_parse_trajectory_dir_concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "traj-001", STANDARD_FILE);
        write_file(dir.path(), "traj-002", STANDARD_FILE);

        let (table, variant) = parse_trajectory_dir(dir.path(), false).unwrap();
        assert_eq!(table.shape(), (4, 9));
        assert_eq!(variant, TrajectoryVariant::Standard);
    }

    #[test]
    fn test_parse_trajectory_dir_skips_headerless_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "traj-001", "no marker here\n");
        write_file(dir.path(), "traj-002", STANDARD_FILE);

        let (table, _) = parse_trajectory_dir(dir.path(), false).unwrap();
        assert_eq!(table.shape(), (2, 9));
    }

    #[test]
    fn test_parse_trajectory_dir_with_progress_matches_plain_parse() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "traj-001", STANDARD_FILE);
        write_file(dir.path(), "traj-002", STANDARD_FILE);

        let (plain, _) = parse_trajectory_dir(dir.path(), false).unwrap();
        let (with_bar, _) = parse_trajectory_dir(dir.path(), true).unwrap();
        assert_eq!(plain.as_slice(), with_bar.as_slice());
    }

    #[test]
    fn test_parse_trajectory_dir_rejects_mixed_variants() {
        let extended_file = "\
     1 PRESSURE THETA AIR_TEMP RAINFALL MIXDEPTH RELHUMID SPCHUMID H2OMIXRA TERR_MSL SUN_FLUX
     1     1    95     1     1     0     0     0     0.0   40.000  -90.000    10.0   975.0   290.0   280.0     0.0   500.0    60.0     5.0     4.0   200.0   100.0
";
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "traj-001", STANDARD_FILE);
        write_file(dir.path(), "traj-002", extended_file);

        let err = parse_trajectory_dir(dir.path(), false).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::SchemaMismatch {
                expected: 9,
                found: 18,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_trajectory_dir_all_empty() {
        let dir = TempDir::new().unwrap();
        let (table, _) = parse_trajectory_dir(dir.path(), false).unwrap();
        assert_eq!(table.shape(), (0, 0));
    }

    #[test]
    fn test_parse_pardump_input_directory_without_dump_is_empty() {
        let dir = TempDir::new().unwrap();
        let result = parse_pardump_input(dir.path()).unwrap();
        assert_eq!(result.table.shape(), (0, 4));
        assert_eq!(result.stats.total_lines, 0);
    }

    #[test]
    fn test_parse_pardump_input_directory_with_dump() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "PARDUMP", "1 40.0 -90.0 100.0\n2 41.0 -91.0 200.0\n");

        let result = parse_pardump_input(dir.path()).unwrap();
        assert_eq!(result.table.shape(), (2, 4));
    }

    #[test]
    fn test_parse_pardump_input_missing_file_is_an_error() {
        let err = parse_pardump_input(Path::new("/nonexistent/PARDUMP")).unwrap_err();
        assert!(matches!(err, crate::Error::FileNotFound { .. }));
    }
}
