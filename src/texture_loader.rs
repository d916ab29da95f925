use std::fs;
use std::io::Cursor;
use std::path::Path;
use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;
use crate::album::{Collection, is_remote};

// --- Load every cover, keeping the album order. Missing covers stay None ---
pub fn load_covers(rl: &mut RaylibHandle, thread: &RaylibThread, collection: &Collection) -> Vec<Option<Texture2D>> {
    collection
        .albums
        .iter()
        .map(|album| {
            if is_remote(&album.cover) {
                warn!("Remote cover for {:?} is not supported, drawing a blank sleeve", album.title);
                return None;
            }
            let path = collection.resolve(&album.cover);
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("No cover for {:?}: {:#}", album.title, e);
                    None
                }
            }
        })
        .collect()
}

/// EXIF orientation of a JPEG, `1` (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u32 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().map(|v| u32::from(*v)),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical: proceed without rotation
            debug!("Could not read EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).with_context(|| format!("Failed to read file {:?}", image_path))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !matches!(extension.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif") {
        bail!("Unsupported cover format {:?}", image_path);
    }

    // EXIF only works reliably for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    Ok(texture)
}
