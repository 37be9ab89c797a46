//! Image scaling regression test

use planescale_core::{ChromaSubsampling, FilterMode, Plane, PlaneData, YuvImage};
use planescale_scale::{ScaleError, ScaleOptions, ScaleSample, scale, scale_image};
use planescale_test::synth::noise_plane;
use planescale_test::{RegParams, init_logging};

fn expect_plane<T: ScaleSample>(
    rp: &mut RegParams,
    src: &Plane<T>,
    actual: Option<&Plane<T>>,
    w: u32,
    h: u32,
    filter: FilterMode,
) {
    let expected = scale(&src.view(), w, h, filter).unwrap();
    match actual {
        Some(p) => {
            rp.compare_planes(&expected, p);
        }
        None => {
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }
}

#[test]
fn image_reg() {
    init_logging();
    let mut rp = RegParams::new("image");

    // --- Test 1: 8-bit 4:2:0, odd luma size ---
    let y = noise_plane::<u8>(33, 17, 255, 1);
    let u = noise_plane::<u8>(17, 9, 255, 2);
    let v = noise_plane::<u8>(17, 9, 255, 3);
    let mut image = YuvImage::from_planes(
        8,
        ChromaSubsampling::Yuv420,
        y.clone().into(),
        Some(u.clone().into()),
        Some(v.clone().into()),
        None,
    )
    .unwrap();
    let opts = ScaleOptions::default();
    scale_image(&mut image, 16, 9, &opts).unwrap();
    expect_plane(&mut rp, &y, image.y().as_u8(), 16, 9, opts.filter);
    expect_plane(&mut rp, &u, image.u().and_then(PlaneData::as_u8), 8, 5, opts.filter);
    expect_plane(&mut rp, &v, image.v().and_then(PlaneData::as_u8), 8, 5, opts.filter);
    rp.compare_values(1.0, image.alpha().is_none() as u8 as f64, 0.0);

    // --- Test 2: 10-bit 4:2:2 with alpha, enlarged ---
    let y = noise_plane::<u16>(10, 6, 1023, 4);
    let u = noise_plane::<u16>(5, 6, 1023, 5);
    let v = noise_plane::<u16>(5, 6, 1023, 6);
    let a = noise_plane::<u16>(10, 6, 1023, 7);
    let mut image = YuvImage::from_planes(
        10,
        ChromaSubsampling::Yuv422,
        y.clone().into(),
        Some(u.clone().into()),
        Some(v.clone().into()),
        Some(a.clone().into()),
    )
    .unwrap();
    let opts = ScaleOptions::with_filter(FilterMode::Bilinear);
    scale_image(&mut image, 20, 12, &opts).unwrap();
    expect_plane(&mut rp, &y, image.y().as_u16(), 20, 12, opts.filter);
    expect_plane(&mut rp, &u, image.u().and_then(PlaneData::as_u16), 10, 12, opts.filter);
    expect_plane(&mut rp, &v, image.v().and_then(PlaneData::as_u16), 10, 12, opts.filter);
    expect_plane(&mut rp, &a, image.alpha().and_then(PlaneData::as_u16), 20, 12, opts.filter);

    // --- Test 3: luma only ---
    let mut image = YuvImage::new(12, 12, 12, ChromaSubsampling::Yuv400).unwrap();
    scale_image(&mut image, 5, 7, &ScaleOptions::with_filter(FilterMode::None)).unwrap();
    rp.compare_values(5.0, image.width() as f64, 0.0);
    rp.compare_values(7.0, image.height() as f64, 0.0);
    rp.compare_values(1.0, image.u().is_none() as u8 as f64, 0.0);

    // --- Test 4: size limits ---
    let mut image = YuvImage::new(8, 8, 8, ChromaSubsampling::Yuv420).unwrap();
    let before = image.clone();
    let opts = ScaleOptions::with_max_image_size(1000);
    let err = scale_image(&mut image, 100, 11, &opts);
    rp.compare_values(
        1.0,
        matches!(err, Err(ScaleError::ImageTooLarge { width: 100, height: 11 })) as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, (image == before) as u8 as f64, 0.0);
    scale_image(&mut image, 100, 10, &opts).unwrap();
    rp.compare_values(100.0, image.width() as f64, 0.0);

    assert!(rp.cleanup(), "image regression test failed");
}
