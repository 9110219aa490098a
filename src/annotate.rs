// Cattle Health Assessment 🐄 AGPL-3.0 License

//! Keypoint markers drawn onto a copy of the analyzed image.

use std::path::{Path, PathBuf};

use image::Rgb;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::error::Result;
use crate::keypoint::Keypoint;

/// Marker color palette, cycled per keypoint.
pub const MARKER_COLORS: [[u8; 3]; 8] = [
    [4, 42, 255],    // #042aff
    [11, 219, 235],  // #0bdbeb
    [255, 68, 79],   // #ff444f
    [0, 243, 68],    // #00f344
    [255, 111, 221], // #ff6fdd
    [0, 180, 255],   // #00b4ff
    [204, 237, 0],   // #cced00
    [189, 0, 255],   // #bd00ff
];

/// Marker radius in pixels.
const MARKER_RADIUS: i32 = 5;

/// Color for the marker at `index`.
#[must_use]
pub fn marker_color(index: usize) -> Rgb<u8> {
    Rgb(MARKER_COLORS[index % MARKER_COLORS.len()])
}

/// Path for the annotated copy: `{stem}_annotated.png` inside `dir`.
#[must_use]
pub fn annotated_path(source: &Path, dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    dir.join(format!("{stem}_annotated.png"))
}

/// Draw one marker per keypoint onto a copy of `source` and save it to
/// `dest`.
///
/// # Errors
///
/// Returns an `ImageError` when the source cannot be decoded or the result
/// cannot be saved.
#[allow(clippy::cast_possible_truncation)]
pub fn annotate_image(source: &Path, keypoints: &[Keypoint], dest: &Path) -> Result<()> {
    let mut img = image::open(source)?.to_rgb8();

    for (index, kp) in keypoints.iter().enumerate() {
        let center = (kp.x.round() as i32, kp.y.round() as i32);
        draw_filled_circle_mut(&mut img, center, MARKER_RADIUS, marker_color(index));
        draw_hollow_circle_mut(&mut img, center, MARKER_RADIUS + 2, Rgb([255, 255, 255]));
    }

    img.save(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_path() {
        let path = annotated_path(Path::new("photos/cow.jpg"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/cow_annotated.png"));
    }

    #[test]
    fn test_marker_colors_cycle() {
        assert_eq!(marker_color(0), marker_color(MARKER_COLORS.len()));
        assert_ne!(marker_color(0), marker_color(1));
    }

    #[test]
    fn test_annotate_round_trip() {
        let dir = std::env::temp_dir().join("cattle_health_annotate_test");
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("blank.png");
        image::RgbImage::new(64, 64).save(&source).unwrap();

        let keypoints = vec![
            Keypoint::new("withers", 10.0, 10.0, 0.9),
            Keypoint::new("hipleft", 40.0, 50.0, 0.9),
        ];
        let dest = annotated_path(&source, &dir);
        annotate_image(&source, &keypoints, &dest).unwrap();

        let annotated = image::open(&dest).unwrap().to_rgb8();
        assert_eq!(annotated.dimensions(), (64, 64));
        // The first marker center carries the first palette color.
        assert_eq!(annotated.get_pixel(10, 10), &marker_color(0));

        let _ = std::fs::remove_file(&source);
        let _ = std::fs::remove_file(&dest);
    }
}
