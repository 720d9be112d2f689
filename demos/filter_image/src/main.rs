use argh::FromArgs;
use std::path::PathBuf;

use imfilt::imgproc::{self, FilterKind};
use imfilt::io::functional as F;

#[derive(FromArgs)]
/// Apply a 3x3 filter to an image and save the result
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the filtered image to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the filter to apply: None, GaussianBlur, Sobel, Prewitt or MedianFilter
    #[argh(option, short = 'f', default = "FilterKind::None")]
    filter: FilterKind,

    /// write the original and the filtered image next to each other
    #[argh(switch)]
    side_by_side: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let original = F::read_image_rgba8(&args.input)?;
    log::info!("loaded {} with size {}", args.input.display(), original.size());

    // apply the filter
    let filtered = imgproc::apply_filter(&original, args.filter)?;

    let output = if args.side_by_side {
        imgproc::compose::hconcat(&original, &filtered)?
    } else {
        filtered
    };

    F::write_image_rgba8(&args.output, &output)?;

    println!(
        "Applied {} to {}, wrote {}",
        args.filter,
        args.input.display(),
        args.output.display()
    );

    Ok(())
}
