//! Facade regression test
//!
//! Upscale then downscale through the re-exported crates. On vertical
//! stripes the corner-rule kernels have nothing to smooth, so a box filter
//! at the same ratio gives back the source.

use pixscale::downscale::Downscaler;
use pixscale::upscale::{Algorithm, KernelConfig, Upscaler};
use pixscale::{ColorPipeline, PackRgba8, Raster, ScaleFactor, UnpackRgba8};
use pixscale_test::{RegParams, fixtures};

#[test]
fn facade_reg() {
    let mut rp = RegParams::new("facade");

    let src = Raster::from_fn(8, 6, |x, _| {
        if (x / 2) % 2 == 0 { fixtures::RED } else { fixtures::BLUE }
    })
    .expect("fixture");
    let down = Downscaler::new(ScaleFactor::uniform(2)).expect("ratio");
    for algorithm in [Algorithm::Eagle, Algorithm::Mmpx, Algorithm::ScaleNx] {
        let up = Upscaler::new(algorithm, ScaleFactor::uniform(2), KernelConfig::exact())
            .expect("supported");
        let big = up
            .upscale(&src.view(), &ColorPipeline::rgba8_exact())
            .expect("upscale");
        let back = down
            .downscale(&big.view(), &UnpackRgba8, &PackRgba8)
            .expect("downscale");
        rp.compare_rasters(&src, &back);
        eprintln!("  {algorithm}: {:?} -> {:?}", big.size(), back.size());
    }

    assert!(rp.cleanup(), "facade regression test failed");
}
