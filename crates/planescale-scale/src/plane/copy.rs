//! Same-size copy

use crate::cursor::{DstRows, SrcRows};
use crate::store::Store;
use planescale_core::Sample;

fn copy_row<T: Sample, St: Store>(src: &[T], dst: &mut [St::Out], st: St) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = st.put(s.to_u32());
    }
}

/// Copy every row, as one run when both sides are unpadded.
pub fn copy_rows<T: Sample, St: Store>(src: SrcRows<'_, T>, dst: &mut DstRows<'_, St::Out>, st: St) {
    debug_assert!(src.width() == dst.width() && src.height() == dst.height());
    if src.is_contiguous() && dst.is_contiguous() {
        copy_row(src.contiguous(), dst.contiguous_mut(), st);
        return;
    }
    for y in 0..src.height() {
        copy_row(src.row(y), dst.row_mut(y), st);
    }
}
