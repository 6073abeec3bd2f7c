//! Orchestration flows: unpack a book into files, pack a document into a book.
//!
//! The flows own all sequencing and naming but perform no I/O themselves.
//! Storage access goes through the narrow [`Driver`] trait and user-facing
//! notes through the injected [`Progress`] capability, so both flows can run
//! against an in-memory driver in tests and the binary stays a thin shell.
//!
//! Both flows share the same preparation step (input existence check, output
//! directory creation, force-overwrite handling) and are fail-fast: any error
//! terminates the run immediately. Partial output left behind by a failed run
//! is acceptable; re-running with force overwrites it.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::book;
use crate::codec;
use crate::error::{BookError, Result};
use crate::sanitize::sanitize;

/// File name substituted when a blueprint label sanitizes to the empty
/// string. The sanitizer itself never invents a name; the flow, as the
/// storage-writing caller, has to pick one because an empty file name
/// cannot be written.
const FALLBACK_NAME: &str = "untitled";

/// The storage collaborator the flows call through. The binary implements
/// this over `std::fs`; tests implement it over an in-memory map.
pub trait Driver {
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
    fn create_dir(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
    /// Needed only by force-overwrite of an existing output directory.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Sink for user-facing progress notes. Injected rather than global: a
/// silent run passes a no-op sink, a verbose one writes to stderr.
pub trait Progress {
    fn note(&self, message: &str);
}

/// [`Progress`] implementation that discards every note.
pub struct Quiet;

impl Progress for Quiet {
    fn note(&self, _message: &str) {}
}

/// Explicit per-run configuration. One input file, one output directory,
/// nothing shared between runs.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub force: bool,
}

/// Unpack flow: decode an exchange string into a browsable file tree.
///
/// Reads the encoded book from `config.input`, decodes it, writes the whole
/// document as `book.json`, then flattens the book and writes two artifacts
/// per blueprint under `blueprints/`: `<name>.json` (the entry as JSON) and
/// `<name>` (the entry re-encoded as an exchange string). Entries whose
/// labels sanitize to the same name are written in book order, so the last
/// one wins.
pub fn unpack(driver: &dyn Driver, progress: &dyn Progress, config: &FlowConfig) -> Result<()> {
    prepare_output(driver, config)?;
    progress.note(&format!("file: {}", config.input.display()));

    // Editors tend to append a trailing newline; the strict base64 engine
    // would reject it, so trim surrounding whitespace before decoding.
    let raw = driver.read_text(&config.input)?;
    let document = codec::decode(raw.trim())?;
    progress.note("file decoded successfully");

    write_json(driver, &config.output_dir.join("book.json"), &document)?;
    progress.note(&format!(
        "Saved book.json at {}",
        config.output_dir.display()
    ));

    let entries = book::flatten(&document)?;
    progress.note(&format!("The book has {} blueprints:", entries.len()));
    for (label, _) in &entries {
        progress.note(&format!(" - {label}"));
    }

    let blueprints_dir = config.output_dir.join("blueprints");
    driver.create_dir(&blueprints_dir)?;
    for (label, entry) in &entries {
        let mut name = sanitize(label);
        if name.is_empty() {
            name = FALLBACK_NAME.to_string();
        }
        write_json(driver, &blueprints_dir.join(format!("{name}.json")), entry)?;
        driver.write_text(&blueprints_dir.join(&name), &codec::encode(entry)?)?;
    }

    progress.note(&format!(
        "Saved blueprints at {}",
        blueprints_dir.display()
    ));
    Ok(())
}

/// Pack flow: wrap an already-decoded JSON document back into shareable text.
///
/// Reads a JSON document from `config.input`, writes it back as `book.json`
/// (a pass-through, not a round-trip check), then writes
/// `blueprints/output.json` (the document) and `blueprints/output.txt` (its
/// encoded exchange-string form).
pub fn pack(driver: &dyn Driver, progress: &dyn Progress, config: &FlowConfig) -> Result<()> {
    prepare_output(driver, config)?;
    progress.note(&format!("file: {}", config.input.display()));

    let raw = driver.read_text(&config.input)?;
    let document: Value = serde_json::from_str(&raw)?;
    progress.note("file loaded successfully");

    write_json(driver, &config.output_dir.join("book.json"), &document)?;
    progress.note(&format!(
        "Saved book.json at {}",
        config.output_dir.display()
    ));

    let blueprints_dir = config.output_dir.join("blueprints");
    driver.create_dir(&blueprints_dir)?;
    write_json(driver, &blueprints_dir.join("output.json"), &document)?;
    driver.write_text(
        &blueprints_dir.join("output.txt"),
        &codec::encode(&document)?,
    )?;

    progress.note(&format!(
        "Saved blueprints at {}",
        blueprints_dir.display()
    ));
    Ok(())
}

/// Shared setup for both flows: the input file must exist, and the output
/// directory must not, unless force was requested, in which case it is
/// removed and recreated.
fn prepare_output(driver: &dyn Driver, config: &FlowConfig) -> Result<()> {
    if !driver.exists(&config.input) {
        return Err(BookError::InputNotFound(config.input.clone()));
    }

    if driver.exists(&config.output_dir) {
        if !config.force {
            return Err(BookError::OutputExists(config.output_dir.clone()));
        }
        driver.remove_dir_all(&config.output_dir)?;
    }
    driver.create_dir(&config.output_dir)?;
    Ok(())
}

fn write_json(driver: &dyn Driver, path: &Path, value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    driver.write_text(path, &pretty)?;
    Ok(())
}
