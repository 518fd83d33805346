//! Terminal image support.
//!
//! Item images are downloaded by the async worker, decoded and downscaled
//! here, and rendered through whatever graphics protocol the terminal
//! offers (Sixel, Kitty, iTerm2) with a Unicode halfblocks fallback.

use image::DynamicImage;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use std::sync::Mutex;

static PICKER: Mutex<Option<Picker>> = Mutex::new(None);

/// Initialize the image picker by querying terminal capabilities.
///
/// Must be called once before entering the TUI; rendering without it simply
/// omits images.
pub fn init_picker() {
    let picker = match Picker::from_query_stdio() {
        Ok(p) => {
            tracing::info!("Image support detected: {:?}", p.protocol_type());
            p
        }
        Err(e) => {
            tracing::debug!("No image protocol support: {e}");
            // Unicode-based fallback, works everywhere
            Picker::halfblocks()
        }
    };
    *PICKER.lock().unwrap() = Some(picker);
}

/// Prepare a decoded image for stateful rendering in the terminal.
///
/// Returns `None` when [`init_picker`] has not run.
pub fn protocol_for(image: DynamicImage) -> Option<StatefulProtocol> {
    let mut picker = PICKER.lock().unwrap();
    picker.as_mut().map(|p| p.new_resize_protocol(image))
}

/// Decode downloaded bytes into a bitmap, downscaling oversized images.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    Ok(resize_if_needed(image::load_from_memory(bytes)?))
}

/// Resize image if it's too large (to save memory and rendering time).
fn resize_if_needed(image: DynamicImage) -> DynamicImage {
    const MAX_DIMENSION: u32 = 800;

    let (width, height) = (image.width(), image.height());

    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return image;
    }

    let ratio = f64::from(width) / f64::from(height);
    let (new_width, new_height) = if width > height {
        (MAX_DIMENSION, (f64::from(MAX_DIMENSION) / ratio) as u32)
    } else {
        ((f64::from(MAX_DIMENSION) * ratio) as u32, MAX_DIMENSION)
    };

    image.resize(new_width, new_height, image::imageops::FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn decodes_png_bytes() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let decoded = decode(bytes.get_ref()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(decode(b"not an image").is_err());
    }

    #[test]
    fn oversized_images_are_downscaled() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(1600, 800));
        let resized = resize_if_needed(img);
        assert_eq!(resized.width(), 800);
        assert_eq!(resized.height(), 400);
    }

    #[test]
    fn small_images_are_untouched() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(60, 60));
        let resized = resize_if_needed(img);
        assert_eq!((resized.width(), resized.height()), (60, 60));
    }
}
