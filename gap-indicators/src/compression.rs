/// Transparent gzip support for indicator payloads
use flate2::read::GzDecoder;
use std::io::Read;

/// First two bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true when `bytes` starts with the gzip magic number.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= GZIP_MAGIC.len() && bytes[..2] == GZIP_MAGIC
}

/// Inflate `bytes` if they are gzip-compressed, otherwise return them as-is.
///
/// Published indicator tables are often shipped as `.csv.gz`; the loader
/// accepts both forms without the caller having to know which one a source
/// serves.
pub fn maybe_inflate(bytes: Vec<u8>) -> std::io::Result<Vec<u8>> {
    if !is_gzip(&bytes) {
        return Ok(bytes);
    }
    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_plain_bytes_pass_through() {
        let csv = b"country,geo,region\n".to_vec();
        assert_eq!(maybe_inflate(csv.clone()).unwrap(), csv);
    }

    #[test]
    fn test_gzip_bytes_are_inflated() {
        let csv = b"country,geo,region,2000\nSweden,swe,europe,8.9\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(csv).unwrap();
        let compressed = encoder.finish().unwrap();

        assert!(is_gzip(&compressed));
        assert_eq!(maybe_inflate(compressed).unwrap(), csv.to_vec());
    }

    #[test]
    fn test_truncated_gzip_is_an_error() {
        let truncated = vec![0x1f, 0x8b, 0x08];
        assert!(maybe_inflate(truncated).is_err());
    }
}
