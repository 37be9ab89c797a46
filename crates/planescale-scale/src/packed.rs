//! Interleaved UV and ARGB scaling
//!
//! Widths count pixels; strides count bytes (or `u16` samples for
//! [`scale_uv_16`]). A negative source height reads the rows bottom-up
//! and a negative source width mirrors horizontally.

use crate::api::{destination, source};
use crate::cursor::{DstRows, SrcRows};
use crate::error::{ScaleError, ScaleResult};
use crate::fixed::fixed_div;
use crate::plane::copy_rows;
use crate::reduce::reduce_filter;
use crate::row::cols::interpolate_row;
use crate::row::packed::{self, PackedColsFn};
use crate::slope::{ScaleStep, scale_slope};
use crate::store::Keep;
use log::debug;
use planescale_core::{FilterMode, Sample, try_filled_vec};

/// Sample count of `width` pixels with `C` channels.
fn samples<const C: usize>(width: i32) -> ScaleResult<i32> {
    width.checked_mul(C as i32).ok_or_else(|| {
        ScaleError::InvalidParameters(format!("{} pixels of {} channels overflow", width, C))
    })
}

/// Validated source and destination rows in samples.
#[allow(clippy::too_many_arguments)]
fn packed_rows<'s, 'd, T: Sample, const C: usize>(
    src: &'s [T],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &'d mut [T],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
) -> ScaleResult<(SrcRows<'s, T>, DstRows<'d, T>)> {
    let src_rows = source(src, src_stride, samples::<C>(src_width)?, src_height)?;
    let dst_rows = destination(dst, dst_stride, samples::<C>(dst_width)?, dst_height)?;
    let src_rows = if src_height < 0 {
        src_rows.flipped()
    } else {
        src_rows
    };
    Ok((src_rows, dst_rows))
}

/// Horizontal 2x with linear filtering, rows point sampled.
fn up2_linear<T: Sample, const C: usize>(src: SrcRows<'_, T>, dst: &mut DstRows<'_, T>) {
    let (sh, dh) = (src.height() as i64, dst.height() as i64);
    if dh == 1 {
        packed::up2_linear::<T, C>(src.row(((sh - 1) / 2) as usize), dst.row_mut(0));
        return;
    }
    let dy = fixed_div(sh - 1, dh - 1);
    let mut y: i64 = (1 << 15) - 1;
    for j in 0..dst.height() {
        packed::up2_linear::<T, C>(src.row((y >> 16) as usize), dst.row_mut(j));
        y += dy;
    }
}

/// 2x on both axes with bilinear filtering.
fn up2_bilinear<T: Sample, const C: usize>(src: SrcRows<'_, T>, dst: &mut DstRows<'_, T>) {
    let first = src.row(0);
    packed::up2_bilinear::<T, C>(first, first, dst.row_mut(0));
    for i in 0..src.height() - 1 {
        let (s, t) = (src.row(i), src.row(i + 1));
        packed::up2_bilinear::<T, C>(s, t, dst.row_mut(2 * i + 1));
        packed::up2_bilinear::<T, C>(t, s, dst.row_mut(2 * i + 2));
    }
    if dst.height() % 2 == 0 {
        let last = src.row(src.height() - 1);
        packed::up2_bilinear::<T, C>(last, last, dst.row_mut(dst.height() - 1));
    }
}

/// The 2x paths, if the ratio and filter allow one.
fn try_up2<T: Sample, const C: usize>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, T>,
    sw: i32,
    sh: i32,
    filter: FilterMode,
) -> bool {
    let (dw, dh) = (dst.width() as i32 / C as i32, dst.height() as i32);
    if sw <= 0 || (dw + 1) / 2 != sw {
        return false;
    }
    match filter {
        FilterMode::Linear => {
            up2_linear::<T, C>(src, dst);
            true
        }
        FilterMode::Bilinear | FilterMode::Box if (dh + 1) / 2 == sh => {
            up2_bilinear::<T, C>(src, dst);
            true
        }
        _ => false,
    }
}

/// Exact halving; point sampling keeps the second pixel of each pair.
fn down2<const C: usize>(src: SrcRows<'_, u8>, dst: &mut DstRows<'_, u8>, filter: FilterMode) {
    let (kernel, first, second): (fn(&[u8], &[u8], &mut [u8]), usize, usize) = match filter {
        FilterMode::None => (packed::down2_point::<C>, 1, 1),
        FilterMode::Linear => (packed::down2_linear::<C>, 0, 0),
        _ => (packed::down2_box::<C>, 0, 1),
    };
    for j in 0..dst.height() {
        kernel(src.row(2 * j + first), src.row(2 * j + second), dst.row_mut(j));
    }
}

/// Reduction by an even integer factor on both axes.
fn down_even<const C: usize>(
    src: SrcRows<'_, u8>,
    dst: &mut DstRows<'_, u8>,
    step: ScaleStep,
    filter: FilterMode,
) {
    let col_step = (step.dx >> 16) as usize;
    let row_step = (step.dy >> 16) as usize;
    let (x0, y0) = ((step.x >> 16) as usize * C, (step.y >> 16) as usize);
    let kernel: fn(&[u8], &[u8], usize, &mut [u8]) = if filter == FilterMode::None {
        packed::down_even_point::<C>
    } else {
        packed::down_even_box::<C>
    };
    for j in 0..dst.height() {
        let y = y0 + j * row_step;
        kernel(
            &src.row(y)[x0..],
            &src.row_clamped(y + 1)[x0..],
            col_step,
            dst.row_mut(j),
        );
    }
}

/// Filtered scaling for any ratio: vertical blend into a scratch row,
/// then filtered columns.
fn filtered<const C: usize>(
    src: SrcRows<'_, u8>,
    dst: &mut DstRows<'_, u8>,
    step: ScaleStep,
    filter: FilterMode,
) -> ScaleResult<()> {
    let max_y = (src.height() as i64 - 1) << 16;
    let mut row: Vec<u8> = try_filled_vec(src.width(), 0)?;
    log::trace!("packed scratch row of {} bytes", row.len());

    let mut y = step.y.min(max_y);
    for j in 0..dst.height() {
        let yi = (y >> 16) as usize;
        if filter == FilterMode::Linear {
            packed::filter_cols::<C>(src.row(yi), dst.row_mut(j), step.x, step.dx);
        } else {
            let f = ((y >> 8) & 255) as u32;
            interpolate_row(src.row(yi), src.row_clamped(yi + 1), &mut row, f, Keep::<u8>::new());
            packed::filter_cols::<C>(&row, dst.row_mut(j), step.x, step.dx);
        }
        y = (y + step.dy).min(max_y);
    }
    Ok(())
}

/// Point sampling for any ratio.
fn simple<const C: usize>(src: SrcRows<'_, u8>, dst: &mut DstRows<'_, u8>, step: ScaleStep) {
    let columns: PackedColsFn =
        if src.width() * 2 == dst.width() && step.x < 0x8000 && step.dx > 0 {
            packed::cols_up2::<C>
        } else {
            packed::cols::<C>
        };
    let mut y = step.y;
    for j in 0..dst.height() {
        columns(src.row((y >> 16) as usize), dst.row_mut(j), step.x, step.dx);
        y += step.dy;
    }
}

#[allow(clippy::too_many_arguments)]
fn scale_packed<const C: usize>(
    src: &[u8],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    let (src_rows, mut dst_rows) = packed_rows::<u8, C>(
        src, src_stride, src_width, src_height, dst, dst_stride, dst_width, dst_height,
    )?;
    let filter = reduce_filter(src_width, src_height, dst_width, dst_height, filter);
    let (sw, sh) = (src_width, src_height.abs());
    let (dw, dh) = (dst_width, dst_height);

    if sw == dw && sh == dh {
        debug!("packed {}x{} x{}: copy", sw, sh, C);
        copy_rows(src_rows, &mut dst_rows, Keep::<u8>::new());
        return Ok(());
    }
    if 2 * dw == sw && 2 * dh == sh {
        debug!("packed {}x{} -> {}x{} x{}: down 1/2 {}", sw, sh, dw, dh, C, filter);
        down2::<C>(src_rows, &mut dst_rows, filter);
        return Ok(());
    }

    let step = scale_slope(sw, sh, dw, dh, filter);
    let whole = (step.dx | step.dy) & 0xffff == 0;
    let even = (step.dx | step.dy) & 0x10000 == 0;
    if sw > 0 && whole && even && step.dx > 0 && step.dy > 0 {
        debug!("packed {}x{} -> {}x{} x{}: down even {}", sw, sh, dw, dh, C, filter);
        down_even::<C>(src_rows, &mut dst_rows, step, filter);
        return Ok(());
    }
    if C == 2 && try_up2::<u8, C>(src_rows, &mut dst_rows, sw, sh, filter) {
        debug!("packed {}x{} -> {}x{} x{}: up 2x {}", sw, sh, dw, dh, C, filter);
        return Ok(());
    }
    if filter.is_filtering() {
        debug!("packed {}x{} -> {}x{} x{}: filtered {}", sw, sh, dw, dh, C, filter);
        return filtered::<C>(src_rows, &mut dst_rows, step, filter);
    }
    debug!("packed {}x{} -> {}x{} x{}: simple", sw, sh, dw, dh, C);
    simple::<C>(src_rows, &mut dst_rows, step);
    Ok(())
}

/// Scale an interleaved two-channel (UV) 8-bit plane.
#[allow(clippy::too_many_arguments)]
pub fn scale_uv(
    src: &[u8],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    scale_packed::<2>(
        src, src_stride, src_width, src_height, dst, dst_stride, dst_width, dst_height, filter,
    )
}

/// Scale an interleaved four-channel (ARGB) 8-bit plane.
#[allow(clippy::too_many_arguments)]
pub fn scale_argb(
    src: &[u8],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    scale_packed::<4>(
        src, src_stride, src_width, src_height, dst, dst_stride, dst_width, dst_height, filter,
    )
}

/// Scale an interleaved 16-bit UV plane.
///
/// Only same-size copies and the 2x enlargements are available; any
/// other ratio returns [`ScaleError::Unsupported`].
#[allow(clippy::too_many_arguments)]
pub fn scale_uv_16(
    src: &[u16],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u16],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    let (src_rows, mut dst_rows) = packed_rows::<u16, 2>(
        src, src_stride, src_width, src_height, dst, dst_stride, dst_width, dst_height,
    )?;
    let filter = reduce_filter(src_width, src_height, dst_width, dst_height, filter);
    let sh = src_height.abs();

    if src_width == dst_width && sh == dst_height {
        copy_rows(src_rows, &mut dst_rows, Keep::<u16>::new());
        return Ok(());
    }
    if try_up2::<u16, 2>(src_rows, &mut dst_rows, src_width, sh, filter) {
        debug!(
            "packed16 {}x{} -> {}x{}: up 2x {}",
            src_width, sh, dst_width, dst_height, filter
        );
        return Ok(());
    }
    Err(ScaleError::Unsupported(format!(
        "16-bit UV scaling {}x{} -> {}x{} with {}",
        src_width, src_height, dst_width, dst_height, filter
    )))
}
