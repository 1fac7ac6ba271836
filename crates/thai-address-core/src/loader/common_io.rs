// crates/thai-address-core/src/loader/common_io.rs
use crate::common::Level;
use crate::error::{LoadError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a data source file, buffers it, and gunzips it when the path ends
/// in `.gz`. The caller gets a plain reader either way.
pub fn open_stream(level: Level, path: &Path) -> Result<Box<dyn Read>> {
    let gzipped = is_gzip_path(path);

    #[cfg(not(feature = "compact"))]
    {
        if gzipped {
            return Err(LoadError::Unsupported(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    let file = File::open(path).map_err(|source| LoadError::NotFound {
        level,
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if gzipped {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
