//! PNG dumps of single planes
//!
//! 8-bit planes are stored as 8-bit grayscale and 16-bit planes as
//! 16-bit grayscale, so a dump round-trips without loss.

use crate::error::{TestError, TestResult};
use planescale_core::{Plane, Sample};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn bit_depth<T: Sample>() -> BitDepth {
    if T::BITS > 8 {
        BitDepth::Sixteen
    } else {
        BitDepth::Eight
    }
}

/// Write `plane` to `path` as a grayscale PNG.
pub fn write_plane_png<T: Sample>(plane: &Plane<T>, path: &str) -> TestResult<()> {
    let write_err = |message: String| TestError::PlaneWrite {
        path: path.to_string(),
        message,
    };

    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), plane.width(), plane.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(bit_depth::<T>());
    let mut writer = encoder
        .write_header()
        .map_err(|e| write_err(format!("PNG header error: {}", e)))?;

    let bytes = T::BITS as usize / 8;
    let mut data = Vec::with_capacity(plane.width() as usize * plane.height() as usize * bytes);
    for row in plane.rows() {
        for &v in row {
            let v = v.to_u32();
            if bytes == 2 {
                data.push((v >> 8) as u8);
            }
            data.push(v as u8);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| write_err(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| write_err(format!("PNG finish error: {}", e)))?;
    Ok(())
}

/// Read a grayscale PNG written by [`write_plane_png`].
///
/// The file bit depth must match the sample type.
pub fn read_plane_png<T: Sample>(path: &str) -> TestResult<Plane<T>> {
    let load_err = |message: String| TestError::PlaneLoad {
        path: path.to_string(),
        message,
    };

    let file = File::open(path)?;
    let mut reader = Decoder::new(BufReader::new(file))
        .read_info()
        .map_err(|e| load_err(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    if info.color_type != ColorType::Grayscale || info.bit_depth != bit_depth::<T>() {
        return Err(load_err(format!(
            "expected {}-bit grayscale, got {:?} {:?}",
            T::BITS,
            info.color_type,
            info.bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| load_err("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| load_err(format!("PNG frame error: {}", e)))?;
    let line_size = output_info.line_size;

    let mut plane = Plane::new(width, height)?;
    for y in 0..height {
        let line = &buf[y as usize * line_size..];
        for (x, v) in plane.row_mut(y).iter_mut().enumerate() {
            *v = if T::BITS > 8 {
                T::from_u32(((line[2 * x] as u32) << 8) | line[2 * x + 1] as u32)
            } else {
                T::from_u32(line[x] as u32)
            };
        }
    }
    Ok(plane)
}
