//! Whole-image scaling

use crate::error::{ScaleError, ScaleResult};
use crate::options::ScaleOptions;
use crate::typed::{scale_into, scale_into_12};
use log::{debug, warn};
use planescale_core::{FilterMode, Plane, PlaneData, YuvImage};

/// Scale one plane into a new `width x height` plane of the same storage.
fn scale_plane_data(
    src: &PlaneData,
    width: u32,
    height: u32,
    filter: FilterMode,
) -> ScaleResult<PlaneData> {
    match src {
        PlaneData::U8(p) => {
            let mut dst = Plane::<u8>::new(width, height)?;
            scale_into(&p.view(), &mut dst.view_mut(), filter)?;
            Ok(dst.into())
        }
        PlaneData::U16(p) => {
            let mut dst = Plane::<u16>::new(width, height)?;
            scale_into_12(&p.view(), &mut dst.view_mut(), filter)?;
            Ok(dst.into())
        }
    }
}

/// Scale every plane of `image` to `width x height` luma samples.
///
/// Chroma planes follow the subsampling with odd sizes rounded up and
/// alpha is scaled at the luma size. On error `image` is unchanged.
///
/// # Errors
///
/// Returns [`ScaleError::ImageTooLarge`] when `width * height` exceeds
/// `options.max_image_size` and [`ScaleError::InvalidParameters`] for an
/// empty size.
pub fn scale_image(
    image: &mut YuvImage,
    width: u32,
    height: u32,
    options: &ScaleOptions,
) -> ScaleResult<()> {
    if image.width() == width && image.height() == height {
        return Ok(());
    }
    if width == 0 || height == 0 {
        warn!("rejecting image scale to {}x{}", width, height);
        return Err(ScaleError::InvalidParameters(format!(
            "image size {}x{}",
            width, height
        )));
    }
    if width > options.max_image_size / height {
        warn!(
            "rejecting image scale to {}x{}: limit is {} samples",
            width, height, options.max_image_size
        );
        return Err(ScaleError::ImageTooLarge { width, height });
    }

    debug!(
        "scale image {}x{} -> {}x{} ({}-bit {:?}) with {}",
        image.width(),
        image.height(),
        width,
        height,
        image.depth(),
        image.subsampling(),
        options.filter
    );

    let filter = options.filter;
    let (cw, ch) = image.subsampling().chroma_size(width, height);
    let y = scale_plane_data(image.y(), width, height, filter)?;
    let u = image
        .u()
        .map(|p| scale_plane_data(p, cw, ch, filter))
        .transpose()?;
    let v = image
        .v()
        .map(|p| scale_plane_data(p, cw, ch, filter))
        .transpose()?;
    let alpha = image
        .alpha()
        .map(|p| scale_plane_data(p, width, height, filter))
        .transpose()?;

    *image = YuvImage::from_planes(image.depth(), image.subsampling(), y, u, v, alpha)?;
    Ok(())
}
