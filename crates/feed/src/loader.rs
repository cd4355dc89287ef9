use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use eurofx_core::Snapshot;
use tracing::debug;

use crate::errors::FeedError;
use crate::parser::parse_feed;

/// Reads the historical bootstrap document from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Snapshot>, FeedError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let snapshots = parse_feed(BufReader::new(file))?;
    debug!("Read {} snapshots from {}", snapshots.len(), path.display());
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file_parses_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01" xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
  <Cube>
    <Cube time="2010-07-14"><Cube currency="USD" rate="1.2703"/></Cube>
  </Cube>
</gesmes:Envelope>"#
        )
        .unwrap();

        let snapshots = load_file(file.path()).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].rates[0].currency, "USD");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(dir.path().join("eurofxref-hist.xml"));
        assert!(matches!(result, Err(FeedError::Io(_))));
    }
}
