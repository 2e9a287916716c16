use std::fs::File;
use std::io::Write;
use std::path::Path;
use log::info;
use crate::error::ScrapeError;
use crate::item::ItemRecord;

pub const HEADERS: [&str; 7] = ["name", "image", "description", "location", "address", "url", "tags"];

/// Writes all records to `path`, replacing any existing file. Returns the row count.
pub fn write_items<P: AsRef<Path>>(path: P, items: &[ItemRecord]) -> Result<usize, ScrapeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let count = write_to(file, items)?;
    info!("Wrote {} rows to {:?}", count, path);
    Ok(count)
}

pub fn write_to<W: Write>(writer: W, items: &[ItemRecord]) -> Result<usize, ScrapeError> {
    // header is written explicitly so an empty run still gets one
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for item in items {
        csv_writer.serialize(item)?;
    }
    csv_writer.flush()?;
    Ok(items.len())
}
