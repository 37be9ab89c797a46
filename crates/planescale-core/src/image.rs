//! Planar YUV images
//!
//! A [`YuvImage`] groups a luma plane, optional chroma planes and an
//! optional alpha plane. Samples are `u8` for 8-bit images and
//! LSB-aligned `u16` for 10, 12 and 16-bit images.

use crate::error::{Error, Result};
use crate::plane::Plane;

/// Chroma subsampling layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaSubsampling {
    /// Full resolution chroma
    #[default]
    Yuv444,
    /// Chroma halved horizontally
    Yuv422,
    /// Chroma halved on both axes
    Yuv420,
    /// Luma only
    Yuv400,
}

impl ChromaSubsampling {
    /// Horizontal and vertical chroma shift
    pub fn shift(self) -> (u32, u32) {
        match self {
            ChromaSubsampling::Yuv444 | ChromaSubsampling::Yuv400 => (0, 0),
            ChromaSubsampling::Yuv422 => (1, 0),
            ChromaSubsampling::Yuv420 => (1, 1),
        }
    }

    pub fn has_chroma(self) -> bool {
        self != ChromaSubsampling::Yuv400
    }

    /// Chroma plane size for a luma size, rounding odd sizes up.
    pub fn chroma_size(self, width: u32, height: u32) -> (u32, u32) {
        let (sx, sy) = self.shift();
        ((width + sx) >> sx, (height + sy) >> sy)
    }
}

/// Plane storage matching the image bit depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneData {
    U8(Plane<u8>),
    U16(Plane<u16>),
}

impl PlaneData {
    /// Zero-filled plane suited to `depth`.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self> {
        if depth > 8 {
            Ok(PlaneData::U16(Plane::new(width, height)?))
        } else {
            Ok(PlaneData::U8(Plane::new(width, height)?))
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            PlaneData::U8(p) => p.width(),
            PlaneData::U16(p) => p.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            PlaneData::U8(p) => p.height(),
            PlaneData::U16(p) => p.height(),
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, PlaneData::U16(_))
    }

    pub fn as_u8(&self) -> Option<&Plane<u8>> {
        match self {
            PlaneData::U8(p) => Some(p),
            PlaneData::U16(_) => None,
        }
    }

    pub fn as_u16(&self) -> Option<&Plane<u16>> {
        match self {
            PlaneData::U16(p) => Some(p),
            PlaneData::U8(_) => None,
        }
    }
}

impl From<Plane<u8>> for PlaneData {
    fn from(p: Plane<u8>) -> Self {
        PlaneData::U8(p)
    }
}

impl From<Plane<u16>> for PlaneData {
    fn from(p: Plane<u16>) -> Self {
        PlaneData::U16(p)
    }
}

/// A planar YUV image with optional alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuvImage {
    depth: u32,
    subsampling: ChromaSubsampling,
    y: PlaneData,
    u: Option<PlaneData>,
    v: Option<PlaneData>,
    alpha: Option<PlaneData>,
}

impl YuvImage {
    /// Supported bit depths
    pub const DEPTHS: [u32; 4] = [8, 10, 12, 16];

    /// Allocate a zero-filled image without alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for depths other than
    /// 8, 10, 12 or 16 and [`Error::InvalidDimension`] for empty sizes.
    pub fn new(width: u32, height: u32, depth: u32, subsampling: ChromaSubsampling) -> Result<Self> {
        check_depth(depth)?;
        let y = PlaneData::new(width, height, depth)?;
        let (u, v) = if subsampling.has_chroma() {
            let (cw, ch) = subsampling.chroma_size(width, height);
            (
                Some(PlaneData::new(cw, ch, depth)?),
                Some(PlaneData::new(cw, ch, depth)?),
            )
        } else {
            (None, None)
        };
        Ok(Self {
            depth,
            subsampling,
            y,
            u,
            v,
            alpha: None,
        })
    }

    /// Assemble an image from existing planes.
    ///
    /// Every plane must use the storage type implied by `depth`, chroma
    /// planes must match the subsampled size and alpha must match luma.
    pub fn from_planes(
        depth: u32,
        subsampling: ChromaSubsampling,
        y: PlaneData,
        u: Option<PlaneData>,
        v: Option<PlaneData>,
        alpha: Option<PlaneData>,
    ) -> Result<Self> {
        check_depth(depth)?;
        let wide = depth > 8;
        let (w, h) = (y.width(), y.height());
        let (cw, ch) = subsampling.chroma_size(w, h);

        let check = |plane: &PlaneData, expected: (u32, u32)| -> Result<()> {
            if plane.is_wide() != wide {
                return Err(Error::InvalidParameter(format!(
                    "plane storage does not match depth {}",
                    depth
                )));
            }
            let actual = (plane.width(), plane.height());
            if actual != expected {
                return Err(Error::DimensionMismatch { expected, actual });
            }
            Ok(())
        };

        check(&y, (w, h))?;
        match (subsampling.has_chroma(), &u, &v) {
            (true, Some(u), Some(v)) => {
                check(u, (cw, ch))?;
                check(v, (cw, ch))?;
            }
            (false, None, None) => {}
            _ => {
                return Err(Error::InvalidParameter(format!(
                    "chroma planes do not match {:?}",
                    subsampling
                )));
            }
        }
        if let Some(a) = &alpha {
            check(a, (w, h))?;
        }

        Ok(Self {
            depth,
            subsampling,
            y,
            u,
            v,
            alpha,
        })
    }

    /// Add a zero-filled alpha plane if none exists.
    pub fn allocate_alpha(&mut self) -> Result<()> {
        if self.alpha.is_none() {
            self.alpha = Some(PlaneData::new(self.width(), self.height(), self.depth)?);
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.y.width()
    }

    pub fn height(&self) -> u32 {
        self.y.height()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn subsampling(&self) -> ChromaSubsampling {
        self.subsampling
    }

    pub fn y(&self) -> &PlaneData {
        &self.y
    }

    pub fn u(&self) -> Option<&PlaneData> {
        self.u.as_ref()
    }

    pub fn v(&self) -> Option<&PlaneData> {
        self.v.as_ref()
    }

    pub fn alpha(&self) -> Option<&PlaneData> {
        self.alpha.as_ref()
    }

    pub fn y_mut(&mut self) -> &mut PlaneData {
        &mut self.y
    }

    pub fn u_mut(&mut self) -> Option<&mut PlaneData> {
        self.u.as_mut()
    }

    pub fn v_mut(&mut self) -> Option<&mut PlaneData> {
        self.v.as_mut()
    }

    pub fn alpha_mut(&mut self) -> Option<&mut PlaneData> {
        self.alpha.as_mut()
    }
}

fn check_depth(depth: u32) -> Result<()> {
    if YuvImage::DEPTHS.contains(&depth) {
        Ok(())
    } else {
        Err(Error::UnsupportedDepth(depth))
    }
}
