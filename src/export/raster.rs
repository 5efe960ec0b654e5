//! SVG rasterization.
//!
//! Renders SVG markup onto a transparent canvas of an exact size and encodes
//! it as a bitmap `data:` URL. The image is stretched to fill the canvas; the
//! aspect ratio is not preserved.

use resvg::tiny_skia::{Pixmap, Transform};
use std::io::Cursor;

use super::{DataUrl, ExportError, RasterMime};

/// Edge length of exported bitmaps.
pub const RASTER_SIZE: u32 = 1024;

/// Rasterize on the blocking pool.
///
/// Resolves with the encoded image, or fails with [`ExportError::Decode`]
/// when the renderer rejects the markup and [`ExportError::Context`] when no
/// surface of the requested size can be allocated. No retry is attempted.
pub async fn rasterize(
    svg: &str,
    width: u32,
    height: u32,
    mime: RasterMime,
) -> Result<DataUrl, ExportError> {
    let svg = svg.to_owned();
    tokio::task::spawn_blocking(move || rasterize_blocking(&svg, width, height, mime)).await?
}

/// Synchronous rasterization.
#[allow(clippy::cast_precision_loss)]
pub fn rasterize_blocking(
    svg: &str,
    width: u32,
    height: u32,
    mime: RasterMime,
) -> Result<DataUrl, ExportError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|err| ExportError::Decode(err.to_string()))?;

    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Context { width, height })?;

    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let bytes = encode(&pixmap, mime)?;
    Ok(DataUrl::new(mime.as_str(), bytes))
}

/// Encode premultiplied canvas pixels as PNG / WebP.
fn encode(pixmap: &Pixmap, mime: RasterMime) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (pixmap.width(), pixmap.height());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or(ExportError::Context { width, height })?;

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, mime.image_format())
        .map_err(|source| ExportError::Encode {
            mime: mime.as_str(),
            source,
        })?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left half red, right half blue, 2:1 aspect.
    const SPLIT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10">
  <rect x="0" y="0" width="10" height="10" fill="#FF0000"/>
  <rect x="10" y="0" width="10" height="10" fill="#0000FF"/>
</svg>"##;

    fn decode(url: &DataUrl) -> image::RgbaImage {
        image::load_from_memory(&url.data).unwrap().to_rgba8()
    }

    #[tokio::test]
    async fn test_rasterize_png_data_url() {
        let url = rasterize(SPLIT, RASTER_SIZE, RASTER_SIZE, RasterMime::Png).await.unwrap();
        assert!(url.to_string().starts_with("data:image/png;base64,"));
        let image = decode(&url);
        assert_eq!(image.dimensions(), (1024, 1024));
    }

    #[test]
    fn test_rasterize_stretches_to_fill() {
        let url = rasterize_blocking(SPLIT, 64, 64, RasterMime::Png).unwrap();
        let image = decode(&url);
        assert_eq!(image.get_pixel(16, 32).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(48, 32).0, [0, 0, 255, 255]);
        // no letterboxing: top and bottom rows are painted too
        assert_eq!(image.get_pixel(16, 1).0[3], 255);
        assert_eq!(image.get_pixel(48, 62).0[3], 255);
    }

    #[test]
    fn test_rasterize_webp() {
        let url = rasterize_blocking(SPLIT, 32, 32, RasterMime::Webp).unwrap();
        assert_eq!(url.mime, "image/webp");
        assert!(url.data.starts_with(b"RIFF"));
        assert_eq!(decode(&url).dimensions(), (32, 32));
    }

    #[test]
    fn test_transparent_background() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="5" height="5" fill="#00FF00"/></svg>"##;
        let image = decode(&rasterize_blocking(svg, 20, 20, RasterMime::Png).unwrap());
        assert_eq!(image.get_pixel(2, 2).0, [0, 255, 0, 255]);
        assert_eq!(image.get_pixel(17, 17).0[3], 0);
    }

    #[tokio::test]
    async fn test_rasterize_rejects_undecodable_markup() {
        for input in ["not an svg", "<svg><g></svg>", ""] {
            let result = rasterize(input, 64, 64, RasterMime::Png).await;
            assert!(matches!(result, Err(ExportError::Decode(_))), "input: {input:?}");
        }
    }

    #[test]
    fn test_rasterize_zero_surface() {
        let result = rasterize_blocking(SPLIT, 0, 64, RasterMime::Png);
        assert!(matches!(
            result,
            Err(ExportError::Context { width: 0, height: 64 })
        ));
    }
}
