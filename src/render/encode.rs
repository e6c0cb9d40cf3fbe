use qrcode::{Color, QrCode};

use crate::error::Result;
use crate::models::{ErrorCorrection, ModuleMatrix};

/// Encode a payload string into a module matrix (no quiet zone)
pub fn encode(data: &str, level: ErrorCorrection) -> Result<ModuleMatrix> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), level.into())?;
    let size = code.width();
    let matrix = ModuleMatrix::from_dark_flags(
        size,
        code.to_colors().into_iter().map(|c| c == Color::Dark),
    );
    log::debug!(
        "encoded {} bytes at level {} into {}x{} modules",
        data.len(),
        level,
        size,
        size
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn finder_corner_is_dark(matrix: &ModuleMatrix, x0: usize, y0: usize) -> bool {
        // outer ring and 3x3 core of the finder pattern are dark
        (0..7).all(|i| matrix.is_dark(x0 + i, y0) && matrix.is_dark(x0, y0 + i))
            && matrix.is_dark(x0 + 3, y0 + 3)
            && !matrix.is_dark(x0 + 1, y0 + 1)
    }

    #[test]
    fn test_short_text_is_version_1() {
        let matrix = encode("hello", ErrorCorrection::L).unwrap();
        assert_eq!(matrix.size(), 21);
    }

    #[test]
    fn test_finder_patterns_present() {
        let matrix = encode("https://example.com", ErrorCorrection::H).unwrap();
        let n = matrix.size();
        assert!(finder_corner_is_dark(&matrix, 0, 0));
        assert!(finder_corner_is_dark(&matrix, n - 7, 0));
        assert!(finder_corner_is_dark(&matrix, 0, n - 7));
    }

    #[test]
    fn test_higher_level_never_shrinks() {
        let data = "BEGIN:VCARD\nVERSION:3.0\nN:Doe;John;;;\nFN:John Doe\nEND:VCARD";
        let low = encode(data, ErrorCorrection::L).unwrap();
        let high = encode(data, ErrorCorrection::H).unwrap();
        assert!(high.size() >= low.size());
    }

    #[test]
    fn test_oversized_payload_is_an_error() {
        let data = "x".repeat(5000);
        assert!(matches!(
            encode(&data, ErrorCorrection::H),
            Err(Error::Encode(_))
        ));
    }
}
