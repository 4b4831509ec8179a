use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pharmgen_core::ProductRecord;

use crate::errors::GenerationError;
use crate::output::CountingWriter;

/// Write the record array as indented JSON and return the bytes written.
///
/// Non-ASCII text is emitted as-is; serde_json never escapes it to `\u`
/// sequences.
pub fn write_document<W: Write>(
    writer: W,
    records: &[ProductRecord],
) -> Result<u64, GenerationError> {
    let mut counting = CountingWriter::new(writer);
    serde_json::to_writer_pretty(&mut counting, records)?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

pub fn write_document_file(path: &Path, records: &[ProductRecord]) -> Result<u64, GenerationError> {
    let file = File::create(path).map_err(|source| GenerationError::document(path.into(), source))?;
    write_document(BufWriter::new(file), records)
        .map_err(|err| err.at_path(path, GenerationError::document))
}
