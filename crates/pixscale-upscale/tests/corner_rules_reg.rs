//! Corner-rule regression test
//!
//! Eagle, EPX and Scale2x decide each output corner from the neighbors
//! meeting at it, so their output commutes with a left-right mirror.
//! Also covers the fixed Eagle and EPX scenarios and driver cancellation.

use std::sync::atomic::AtomicBool;

use pixscale_core::{ColorPipeline, ExactEquality, IntegerLerp, Raster, ScaleFactor};
use pixscale_test::fixtures::{self, BLUE, GREEN, RED, WHITE, YELLOW};
use pixscale_test::RegParams;
use pixscale_upscale::{
    Algorithm, Eagle, Epx, KernelConfig, ScaleNx, UpscaleError, Upscaler, upscale_with,
};
use proptest::prelude::*;

fn upscale_2x(algorithm: Algorithm, src: &Raster<u32>) -> Raster<u32> {
    Upscaler::new(algorithm, ScaleFactor::uniform(2), KernelConfig::exact())
        .expect("supported")
        .upscale(&src.view(), &ColorPipeline::rgba8_exact())
        .expect("upscale")
}

#[test]
fn corner_rules_reg() {
    let mut rp = RegParams::new("corner_rules");

    // --- Test 1: Eagle copies the diagonal when both bridges agree ---
    // S T U / V C W / X Y Z with S = T = V = X and the rest P.
    let (x, p) = (YELLOW, BLUE);
    let src = Raster::from_fn(3, 3, |cx, cy| match (cx, cy) {
        (0, 0) | (1, 0) | (0, 1) => x,
        _ => p,
    })
    .expect("fixture");
    let out = upscale_2x(Algorithm::Eagle, &src);
    let block: Vec<u32> = [(2, 2), (3, 2), (2, 3), (3, 3)]
        .iter()
        .filter_map(|&(cx, cy)| out.get(cx, cy))
        .collect();
    rp.compare_slices(&[x, p, p, p], &block);

    // --- Test 2: EPX blends equal cardinals into the corner they share ---
    // Top = left = A, right = bottom = B, center C.
    let (a, b, c) = (RED, GREEN, WHITE);
    let src = Raster::from_fn(3, 3, |cx, cy| match (cx, cy) {
        (1, 0) | (0, 1) => a,
        (2, 1) | (1, 2) => b,
        (1, 1) => c,
        _ => 0x101010ff,
    })
    .expect("fixture");
    let out = upscale_2x(Algorithm::Epx, &src);
    let block: Vec<u32> = [(2, 2), (3, 2), (2, 3), (3, 3)]
        .iter()
        .filter_map(|&(cx, cy)| out.get(cx, cy))
        .collect();
    rp.compare_slices(&[a, c, c, b], &block);

    // --- Test 3: EPX and Scale2x agree under exact equality ---
    let src = fixtures::palette_noise(12, 9, &fixtures::PALETTE, 77).expect("fixture");
    let epx = upscale_2x(Algorithm::Epx, &src);
    let scale2x = upscale_2x(Algorithm::ScaleNx, &src);
    rp.compare_rasters(&epx, &scale2x);

    // --- Test 4: a raised cancel flag stops the driver ---
    let cancel = AtomicBool::new(true);
    let mut dst = Raster::new(24, 18, 0u32).expect("dst");
    let result = upscale_with(
        &Eagle::<_, 2>::new(ExactEquality),
        &src.view(),
        &ColorPipeline::rgba8_exact(),
        &mut dst.view_mut(),
        Some(&cancel),
    );
    rp.check(
        matches!(result, Err(UpscaleError::Cancelled)),
        "cancelled run reports Cancelled",
    );

    // --- Test 5: a lowered flag lets the run complete ---
    let cancel = AtomicBool::new(false);
    let result = upscale_with(
        &ScaleNx::<_, _, 2>::new(ExactEquality, IntegerLerp),
        &src.view(),
        &ColorPipeline::rgba8_exact(),
        &mut dst.view_mut(),
        Some(&cancel),
    );
    rp.check(result.is_ok(), "uncancelled run completes");
    rp.compare_rasters(&scale2x, &dst);

    // --- Test 6: kernels can be driven directly ---
    let mut direct = Raster::new(24, 18, 0u32).expect("dst");
    upscale_with(
        &Epx::new(ExactEquality, IntegerLerp),
        &src.view(),
        &ColorPipeline::rgba8_exact(),
        &mut direct.view_mut(),
        None,
    )
    .expect("upscale");
    rp.compare_rasters(&epx, &direct);

    assert!(rp.cleanup(), "corner_rules regression test failed");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_mirror_symmetry(
        seed in any::<u64>(),
        width in 2u32..10,
        height in 2u32..10,
    ) {
        let src = fixtures::palette_noise(width, height, &fixtures::PALETTE, seed)
            .expect("fixture");
        let mirrored = fixtures::mirror_horizontal(&src).expect("mirror");
        for algorithm in [Algorithm::Epx, Algorithm::Eagle, Algorithm::ScaleNx] {
            let direct = fixtures::mirror_horizontal(&upscale_2x(algorithm, &src))
                .expect("mirror");
            let flipped = upscale_2x(algorithm, &mirrored);
            prop_assert_eq!(direct, flipped, "{} is not mirror symmetric", algorithm);
        }
    }
}
