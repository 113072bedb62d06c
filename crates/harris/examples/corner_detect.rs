use std::path::PathBuf;

use argh::FromArgs;

use harris::image::PixelBuffer;
use harris::imgproc::draw::draw_point;
use harris::imgproc::features::{
    DiagnosticSink, DiagnosticStage, FeatureDetector, HarrisDetector, HarrisParams,
};
use harris::io::{read_image_jpeg, write_image_jpeg};

#[derive(FromArgs)]
/// Detect Harris corners on a JPEG image and draw them on the output.
struct Args {
    /// path to the input JPEG
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the annotated JPEG
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// standard deviation of the Gaussian window
    #[argh(option, default = "2.0")]
    sigma: f32,

    /// harris response constant
    #[argh(option, default = "0.04")]
    k: f32,

    /// threshold on the normalized response, in [0, 255]
    #[argh(option, default = "150.0")]
    threshold: f32,

    /// directory to dump intermediate images into
    #[argh(option)]
    debug_dir: Option<PathBuf>,
}

/// Writes each intermediate buffer as a JPEG into the debug directory.
struct JpegDumpSink {
    dir: PathBuf,
}

impl DiagnosticSink for JpegDumpSink {
    fn emit(&self, stage: DiagnosticStage, image: &PixelBuffer) {
        let path = self.dir.join(format!("harris_{}.jpg", stage.name()));
        if let Err(e) = write_image_jpeg(&path, image, 80) {
            log::error!("failed to write {}: {e}", path.display());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut image = read_image_jpeg(&args.input)?;
    log::info!(
        "loaded {} ({} x {}, {} channels)",
        args.input.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let mut detector = HarrisDetector::new();
    if let Some(dir) = &args.debug_dir {
        std::fs::create_dir_all(dir)?;
        detector = detector.with_diagnostics(Box::new(JpegDumpSink { dir: dir.clone() }));
    }

    let params = HarrisParams {
        sigma: args.sigma,
        k: args.k,
        threshold: args.threshold,
    };
    let corners = detector.detect(&image, &params)?;
    log::info!("detected {} corners", corners.len());

    for corner in &corners {
        draw_point(
            &mut image,
            corner.x as i64,
            corner.y as i64,
            [255.0, 0.0, 0.0],
            5,
        );
    }
    write_image_jpeg(&args.output, &image, 80)?;

    Ok(())
}
