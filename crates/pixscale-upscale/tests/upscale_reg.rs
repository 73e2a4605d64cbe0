//! Upscale regression test
//!
//! Runs every algorithm at every supported scale through the public
//! driver and checks the properties shared by all kernels: flat fields stay
//! flat, output blocks have the declared size, and repeated runs agree.

use pixscale_core::{ColorPipeline, Raster, Rgba8, ScaleFactor, UpscaleKernel};
use pixscale_test::{RegParams, fixtures};
use pixscale_upscale::{
    Algorithm, KernelConfig, Quality, UpscaleError, UpscaleVisitor, Upscaler, dispatch_upscale,
};
use proptest::prelude::*;

fn every_combination() -> Vec<(Algorithm, ScaleFactor)> {
    Algorithm::ALL
        .iter()
        .flat_map(|&a| a.supported_scales().iter().map(move |&s| (a, s)))
        .collect()
}

fn run_exact(algorithm: Algorithm, scale: ScaleFactor, src: &Raster<u32>) -> Raster<u32> {
    let up = Upscaler::new(algorithm, scale, KernelConfig::exact()).expect("supported");
    up.upscale(&src.view(), &ColorPipeline::rgba8_exact())
        .expect("upscale")
}

#[test]
fn upscale_reg() {
    let mut rp = RegParams::new("upscale");

    let combos = every_combination();
    rp.compare_values(15.0, combos.len() as f64, 0.0);

    // --- Test 1: output size for every combination ---
    let src = fixtures::palette_noise(7, 5, &fixtures::PALETTE, 11).expect("fixture");
    for &(algorithm, scale) in &combos {
        let out = run_exact(algorithm, scale, &src);
        rp.compare_values((7 * scale.x) as f64, out.width() as f64, 0.0);
        rp.compare_values((5 * scale.y) as f64, out.height() as f64, 0.0);
        eprintln!("  {algorithm} {scale}: {}x{}", out.width(), out.height());
    }

    // --- Test 2: YUV keys on the pattern tables ---
    let algorithm = Algorithm::pattern_table(Quality::High);
    for &scale in algorithm.supported_scales() {
        let up = Upscaler::new(algorithm, scale, KernelConfig::yuv()).expect("supported");
        let flat = fixtures::solid(4, 4, 0x4080c0ff).expect("fixture");
        let out = up
            .upscale(&flat.view(), &ColorPipeline::rgba8_yuv())
            .expect("upscale");
        rp.check(
            out.pixels().all(|p| p == 0x4080c0ff),
            &format!("{algorithm} {scale} flat under YUV keys"),
        );
    }

    // --- Test 3: blending off only emits source colors ---
    let src = fixtures::palette_noise(9, 8, &fixtures::PALETTE, 5).expect("fixture");
    for &(algorithm, scale) in &combos {
        let config = KernelConfig::exact().with_blending(false);
        let up = Upscaler::new(algorithm, scale, config).expect("supported");
        let out = up
            .upscale(&src.view(), &ColorPipeline::rgba8_exact())
            .expect("upscale");
        rp.check(
            out.pixels().all(|p| fixtures::PALETTE.contains(&p)),
            &format!("{algorithm} {scale} without blending"),
        );
    }

    // --- Test 4: unsupported combinations ---
    for (algorithm, scale) in [
        (Algorithm::Epx, ScaleFactor::uniform(3)),
        (Algorithm::ScaleNx, ScaleFactor::uniform(4)),
        (Algorithm::Xbr, ScaleFactor::new(2, 4).expect("factor")),
        (Algorithm::ReverseAa, ScaleFactor::uniform(1)),
        (Algorithm::Hqx, ScaleFactor::new(2, 3).expect("factor")),
        (Algorithm::Hqx, ScaleFactor::new(2, 4).expect("factor")),
        (Algorithm::pattern_table(Quality::Low), ScaleFactor::uniform(2)),
    ] {
        let err = Upscaler::new(algorithm, scale, KernelConfig::exact());
        rp.check(
            matches!(err, Err(UpscaleError::UnsupportedScale { .. })),
            &format!("{algorithm} {scale} rejected"),
        );
    }

    assert!(rp.cleanup(), "upscale regression test failed");
}

/// Reports the declared block size of the dispatched kernel.
struct DeclaredBlock;

impl UpscaleVisitor<Rgba8, Rgba8> for DeclaredBlock {
    type Output = (u32, u32);

    fn visit<T: UpscaleKernel<Rgba8, Rgba8>>(self, _kernel: T) -> (u32, u32) {
        (T::SCALE_X as u32, T::SCALE_Y as u32)
    }
}

#[test]
fn dispatch_block_size_reg() {
    let mut rp = RegParams::new("dispatch_block_size");
    let config = KernelConfig::exact();
    for (algorithm, scale) in every_combination() {
        let block = dispatch_upscale(algorithm, scale, &config, DeclaredBlock).expect("dispatch");
        rp.compare_slices(&[scale.x, scale.y], &[block.0, block.1]);
    }
    assert!(rp.cleanup(), "dispatch block size regression test failed");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_flat_field_is_invariant(
        color in any::<u32>(),
        width in 1u32..6,
        height in 1u32..6,
    ) {
        let src = fixtures::solid(width, height, color).expect("fixture");
        for (algorithm, scale) in every_combination() {
            let out = run_exact(algorithm, scale, &src);
            prop_assert!(
                out.pixels().all(|p| p == color),
                "{} {} changed a flat {:#010x} field", algorithm, scale, color
            );
        }
    }

    #[test]
    fn prop_runs_are_deterministic(seed in any::<u64>()) {
        let src = fixtures::rgba_noise(6, 5, seed).expect("fixture");
        for (algorithm, scale) in every_combination() {
            let a = run_exact(algorithm, scale, &src);
            let b = run_exact(algorithm, scale, &src);
            prop_assert_eq!(a, b);
        }
    }
}
