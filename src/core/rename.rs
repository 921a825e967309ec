//! Rename files and directories using the case renderers.
//!
//! The orchestrator runs in three phases: resolve the input paths into a
//! concrete entry list (deepest-first so a directory rename never orphans
//! descendants still waiting in the batch), plan a target name for every
//! entry, then apply the renames pair by pair. Dry-run stops after planning
//! and never touches the filesystem — not even the case-sensitivity probe.
//!
//! There is no rollback: a failing rename stops the batch and leaves prior
//! renames applied. Re-invoke with dry-run to audit before retrying.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::case::{self, CaseFormat, CaseOptions};
use crate::error::{Error, Result};
use crate::log_status;

/// Extensions treated as a single unit when splitting a file name.
const COMPOUND_EXTENSIONS: &[&str] = &[".fastq.gz", ".tar.gz", ".tar.bz2", ".tar.xz"];

/// Whether the target filesystem distinguishes names by letter case.
///
/// Kept as an explicit value rather than probed inline so the executor can be
/// tested with a fixed sensitivity instead of touching real storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Recurse into directories.
    pub recursive: bool,
    /// Case renderer for new names.
    pub format: CaseFormat,
    /// Suppress status output.
    pub quiet: bool,
    /// Plan only; never touch the filesystem.
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            format: CaseFormat::Kebab,
            quiet: false,
            dry_run: false,
        }
    }
}

/// Source and target paths of an executed batch. Dry-run returns empty lists.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutcome {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

/// Rename files and/or directories using a case renderer.
///
/// A single directory given non-recursively renames its immediate children.
/// Entries whose stem does not start with an alphanumeric character are
/// skipped with a status message, never an error.
pub fn rename_paths(paths: &[PathBuf], options: &RenameOptions) -> Result<RenameOutcome> {
    let from_paths = resolve_from_paths(paths, options.recursive)?;

    let mut pairs = Vec::with_capacity(from_paths.len());
    for from in &from_paths {
        let to = plan_target(from, options.format, options.quiet)?;
        pairs.push((from.clone(), to));
    }

    if options.dry_run {
        if !options.quiet {
            for (from, to) in &pairs {
                log_status!("rename", "[dry-run] {} -> {}", from.display(), to.display());
            }
        }
        return Ok(RenameOutcome {
            from: Vec::new(),
            to: Vec::new(),
        });
    }

    let probe_dir = from_paths
        .first()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let sensitivity = detect_case_sensitivity(&probe_dir);
    execute_renames(&pairs, sensitivity, options.quiet)?;

    Ok(RenameOutcome {
        from: pairs.iter().map(|(f, _)| f.display().to_string()).collect(),
        to: pairs.iter().map(|(_, t)| t.display().to_string()).collect(),
    })
}

// ============================================================================
// Resolve
// ============================================================================

fn resolve_from_paths(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    for p in paths {
        if !p.exists() {
            return Err(Error::PathNotFound(p.display().to_string()));
        }
    }
    if paths.len() == 1 && paths[0].is_dir() && !recursive {
        let dir = fs::canonicalize(&paths[0])?;
        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            entries.push(entry?.path());
        }
        entries.sort();
        return Ok(entries);
    }
    if recursive {
        return collect_recursive(paths);
    }
    paths
        .iter()
        .map(|p| fs::canonicalize(p).map_err(Error::from))
        .collect()
}

/// Collect the inputs plus every descendant, deduplicated by canonical path,
/// files before directories, each group deepest-first.
fn collect_recursive(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut all: BTreeSet<PathBuf> = BTreeSet::new();
    for p in paths {
        let real = fs::canonicalize(p)?;
        walk(&real, &mut all)?;
    }
    let mut files: Vec<PathBuf> = all.iter().filter(|p| !p.is_dir()).cloned().collect();
    let mut dirs: Vec<PathBuf> = all.iter().filter(|p| p.is_dir()).cloned().collect();
    files.sort_by_key(|p| std::cmp::Reverse(path_depth(p)));
    dirs.sort_by_key(|p| std::cmp::Reverse(path_depth(p)));
    files.extend(dirs);
    Ok(files)
}

fn walk(path: &Path, all: &mut BTreeSet<PathBuf>) -> Result<()> {
    all.insert(path.to_path_buf());
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            walk(&entry.path(), all)?;
        }
    }
    Ok(())
}

fn path_depth(path: &Path) -> usize {
    path.components().count()
}

// ============================================================================
// Plan
// ============================================================================

/// Compute the target path for one entry. Skipped entries map to themselves.
fn plan_target(from: &Path, format: CaseFormat, quiet: bool) -> Result<PathBuf> {
    let Some(name) = from.file_name().and_then(|n| n.to_str()) else {
        if !quiet {
            log_status!("rename", "Skipping {}", from.display());
        }
        return Ok(from.to_path_buf());
    };
    let (stem, extension) = if from.is_dir() {
        (name.to_string(), None)
    } else {
        split_stem(name)
    };
    if !stem.chars().next().is_some_and(char::is_alphanumeric) {
        if !quiet {
            log_status!("rename", "Skipping {}", from.display());
        }
        return Ok(from.to_path_buf());
    }
    let options = CaseOptions {
        smart: true,
        prefix: false,
        strict: true,
    };
    let new_stem = case::convert(&[stem.as_str()], format, &options)?.remove(0);
    let basename = match extension {
        Some(ext) => format!("{new_stem}.{ext}"),
        None => new_stem,
    };
    Ok(from.with_file_name(basename))
}

/// Split a file name into stem and extension, treating the known compound
/// extensions as a single unit.
fn split_stem(name: &str) -> (String, Option<String>) {
    for ext in COMPOUND_EXTENSIONS {
        if let Some(stem) = name.strip_suffix(ext) {
            return (
                stem.to_string(),
                Some(ext.trim_start_matches('.').to_string()),
            );
        }
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            (stem.to_string(), Some(ext.to_string()))
        }
        _ => (name.to_string(), None),
    }
}

// ============================================================================
// Case-sensitivity probe
// ============================================================================

/// Probe whether the filesystem under `dir` is case-sensitive.
///
/// Creates a short-lived marker file and checks whether its upper- and
/// lowercased path variants both resolve to it. When the probe cannot run
/// (permissions, exotic filesystems) fall back to a platform heuristic:
/// Linux counts as sensitive, everything else as insensitive.
pub fn detect_case_sensitivity(dir: &Path) -> CaseSensitivity {
    match probe_case_sensitivity(dir) {
        Ok(sensitivity) => sensitivity,
        Err(_) => {
            if cfg!(target_os = "linux") {
                CaseSensitivity::Sensitive
            } else {
                CaseSensitivity::Insensitive
            }
        }
    }
}

fn probe_case_sensitivity(dir: &Path) -> Result<CaseSensitivity> {
    let marker = dir.join(format!(".TmP_probe_{}", std::process::id()));
    fs::write(&marker, b"")?;
    let as_string = marker.to_string_lossy();
    let both_resolve = Path::new(&as_string.to_uppercase()).exists()
        && Path::new(&as_string.to_lowercase()).exists();
    let _ = fs::remove_file(&marker);
    Ok(if both_resolve {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    })
}

// ============================================================================
// Apply
// ============================================================================

/// Execute the planned renames in order, skipping no-op pairs.
///
/// On a case-insensitive filesystem, a pair that differs only by letter case
/// goes through an intermediate temporary name; a direct rename would be
/// treated as a no-op by the filesystem.
pub fn execute_renames(
    pairs: &[(PathBuf, PathBuf)],
    sensitivity: CaseSensitivity,
    quiet: bool,
) -> Result<()> {
    for (from, to) in pairs {
        if from == to {
            continue;
        }
        if !quiet {
            log_status!("rename", "Renaming {} to {}", from.display(), to.display());
        }
        if sensitivity == CaseSensitivity::Insensitive && differs_only_by_case(from, to) {
            let tmp = temp_sibling(from);
            fs::rename(from, &tmp)?;
            fs::rename(&tmp, to)?;
        } else {
            fs::rename(from, to)?;
        }
    }
    Ok(())
}

fn differs_only_by_case(a: &Path, b: &Path) -> bool {
    a != b && a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".tmp.{name}"))
}
