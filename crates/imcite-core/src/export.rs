//! Plain-text report of the store contents
//!
//! One publication title per line in date order, followed by one author name
//! per line in name order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::store::Store;

/// Platform newline used between report lines
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Write the report to any writer
pub fn write_report<W: Write>(store: &Store, mut writer: W) -> std::io::Result<()> {
    for line in report_lines(store) {
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}

/// Render the report to a string
pub fn render_report(store: &Store) -> String {
    let mut report = String::new();
    for line in report_lines(store) {
        report.push_str(line);
        report.push_str(LINE_ENDING);
    }
    report
}

fn report_lines(store: &Store) -> impl Iterator<Item = &str> {
    store
        .publications()
        .map(|p| p.title.as_str())
        .chain(store.authors().map(|a| a.name.as_str()))
}

/// Create (or truncate) `path` and write the report into it
pub fn export_to_path(store: &Store, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    write_report(store, BufWriter::new(file)).map_err(io_err)?;

    tracing::info!(
        "Wrote {} title(s) and {} name(s) to {}",
        store.publication_count(),
        store.author_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use imcite_domain::{Author, Publication, Venue};

    fn sample_store() -> Store {
        let mut store = Store::new();
        for (title, y) in [("Later", 2021), ("Earlier", 2019)] {
            store.add_publication(Publication::new(
                title,
                Venue::journal("J", "P", y),
                NaiveDate::from_ymd_opt(y, 1, 1).unwrap(),
            ));
        }
        store.add_author(Author::new("Zoe", "Z.", "2"));
        store.add_author(Author::new("Abel", "A.", "1"));
        store
    }

    #[test]
    fn test_report_order() {
        let report = render_report(&sample_store());
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines, vec!["Earlier", "Later", "Abel", "Zoe"]);
        assert!(report.ends_with(LINE_ENDING));
    }

    #[test]
    fn test_writer_and_string_agree() {
        let store = sample_store();
        let mut buf = Vec::new();
        write_report(&store, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_report(&store));
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        assert_eq!(render_report(&Store::new()), "");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let err = export_to_path(&sample_store(), "/nonexistent-dir/for/sure/Output.txt").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
