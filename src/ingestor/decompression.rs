//! Compressed dataset detection
//!
//! Datasets may be shipped gzipped. The stream is sniffed by magic bytes
//! and wrapped in a decoder when needed, so the record readers always
//! see plain text.

use std::io::{BufRead, BufReader, Read};

use crate::errors::{LoadError, LoadResult};

/// Compression formats recognised by magic bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionFormat {
    Gzip,
    /// Any other archive or compressed container, by MIME type
    Other(String),
    Uncompressed,
}

impl CompressionFormat {
    pub fn detect(head: &[u8]) -> Self {
        match infer::get(head) {
            Some(kind) if kind.mime_type() == "application/gzip" => Self::Gzip,
            Some(kind) if kind.matcher_type() == infer::MatcherType::Archive => {
                Self::Other(kind.mime_type().to_string())
            }
            _ => Self::Uncompressed,
        }
    }
}

/// Buffer `reader` and transparently decompress it if it is gzipped
pub fn open_stream<R: Read + 'static>(reader: R) -> LoadResult<Box<dyn Read>> {
    let mut buffered = BufReader::new(reader);
    let format = CompressionFormat::detect(buffered.fill_buf()?);

    match format {
        CompressionFormat::Uncompressed => Ok(Box::new(buffered)),
        CompressionFormat::Gzip => gzip_stream(buffered),
        CompressionFormat::Other(kind) => Err(LoadError::UnsupportedCompression { kind }),
    }
}

#[cfg(feature = "compression-gzip")]
fn gzip_stream<R: BufRead + 'static>(reader: R) -> LoadResult<Box<dyn Read>> {
    Ok(Box::new(flate2::bufread::MultiGzDecoder::new(reader)))
}

#[cfg(not(feature = "compression-gzip"))]
fn gzip_stream<R: BufRead + 'static>(_reader: R) -> LoadResult<Box<dyn Read>> {
    Err(LoadError::UnsupportedCompression {
        kind: "application/gzip".to_string(),
    })
}
