use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::errors::GenerationError;

/// Bundle `sources` into a deflate-compressed zip at `dest`, each stored under
/// its base file name. Returns the archive size in bytes.
pub fn write_archive(dest: &Path, sources: &[&Path]) -> Result<u64, GenerationError> {
    let mut zip = zip::ZipWriter::new(File::create(dest)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for source in sources {
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| GenerationError::ArchiveSource {
                path: source.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            })?;
        let contents = std::fs::read(source).map_err(|source_err| GenerationError::ArchiveSource {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        zip.start_file(name.as_str(), options)?;
        zip.write_all(&contents)?;
        debug!(entry = %name, bytes = contents.len(), "archive entry written");
    }

    let file = zip.finish()?;
    Ok(file.metadata()?.len())
}
