use std::io::Cursor;

use anyhow::Context;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::{AppError, ValidationError};

/// Pixel size of one QR module.
pub const MODULE_PX: u32 = 10;

/// Ordering-page url for a table: the base url plus `table=<id>`.
pub fn table_url(base_url: &str, table_id: i64) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{sep}table={table_id}")
}

/// Encodes the table's ordering url as a black-on-white PNG QR code.
/// The quiet zone is the standard 4 modules.
pub fn generate_qr(base_url: &str, table_id: i64) -> Result<Vec<u8>, AppError> {
    if table_id <= 0 {
        return Err(ValidationError::InvalidTableId(table_id).into());
    }

    let url = table_url(base_url, table_id);
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)
        .with_context(|| format!("encode qr payload {url}"))?;

    let img = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .module_dimensions(MODULE_PX, MODULE_PX)
        .quiet_zone(true)
        .build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("write qr png")?;
    Ok(png)
}

#[cfg(test)]
mod qr_tests {
    use super::*;

    fn decode(png: &[u8]) -> String {
        let img = image::load_from_memory(png).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn table_url_appends_query() {
        assert_eq!(
            table_url("http://localhost:8000/", 5),
            "http://localhost:8000/?table=5"
        );
        assert_eq!(
            table_url("https://menu.example.com/?lang=en", 12),
            "https://menu.example.com/?lang=en&table=12"
        );
    }

    #[test]
    fn qr_for_table_five_decodes_to_table_url() {
        let png = generate_qr("http://localhost:8000/", 5).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode(&png), "http://localhost:8000/?table=5");
    }

    #[test]
    fn image_is_square_and_module_aligned() {
        let png = generate_qr("http://localhost:8000/", 42).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % MODULE_PX, 0);
        // 4-module quiet zone on each side stays white
        assert_eq!(img.to_luma8().get_pixel(MODULE_PX * 4 - 1, MODULE_PX * 4 - 1).0[0], 255);
    }

    #[test]
    fn non_positive_table_ids_are_rejected() {
        for id in [0, -1] {
            let err = generate_qr("http://localhost:8000/", id).unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(ValidationError::InvalidTableId(got)) if got == id
            ));
        }
    }
}
