use std::path::{Path, PathBuf};

use argh::FromArgs;

use grisaille::image::{GrayImage, ImageSize};
use grisaille::imgproc::interpolation::InterpolationMode;
use grisaille::imgproc::{core, crop, enhance, montage, resize};
use grisaille::io::config::{self, PipelineConfig};
use grisaille::io::{functional, raw, IoError};

#[derive(FromArgs)]
/// Grayscale image processing pipeline
struct Args {
    /// assignment to run (only 1 is implemented)
    #[argh(option)]
    hw: Option<u32>,

    /// run the showcase over the sample images in the data directory
    #[argh(switch)]
    demo: bool,

    /// path to a single input image to process
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// output directory for rendered results
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// path to a JSON pipeline configuration
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

const MONTAGE_COLS: usize = 3;
const MONTAGE_GAP: usize = 8;
const MONTAGE_FILL: u8 = 255;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::args().len() <= 1 {
        print_usage();
        return Ok(());
    }

    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    std::fs::create_dir_all(&config.output_dir)?;

    if args.demo {
        match args.hw.unwrap_or(1) {
            1 => run_demo(&config)?,
            hw => log::warn!("assignment {} is not implemented", hw),
        }
    } else if let Some(input) = &args.input {
        process_single(input, &config)?;
    } else {
        print_usage();
    }

    Ok(())
}

fn print_usage() {
    println!("Grayscale image processing pipeline");
    println!("-----------------------------------");
    println!("Usage:");
    println!("  pipeline --demo                 run the showcase over the sample images");
    println!("  pipeline --hw 1 --demo          run the showcase for a specific assignment");
    println!("  pipeline --input image.bmp      process a single image");
    println!("  pipeline --config config.json   load paths and parameters from JSON");
    println!();
    println!("Available operations:");
    println!("  - image loading: headerless raw (configured size), PNG/BMP/JPEG");
    println!("  - point transforms: log, gamma, negative");
    println!("  - resampling: nearest neighbor, bilinear");
}

/// Dispatch on the file extension: `.raw` goes to the headerless loader
/// with the configured dimensions, everything else to the codec.
fn load_input(path: &Path, config: &PipelineConfig) -> Result<GrayImage, IoError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("raw") => raw::read_image_raw(path, config.raw_size()),
        _ => functional::read_image_gray8(path),
    }
}

fn report_stats(name: &str, image: &GrayImage) {
    let (std, mean) = core::std_mean(image);
    let (min, max) = core::min_max(image);
    log::info!(
        "{}: {} min={} max={} mean={:.2} std={:.2}",
        name,
        image.size(),
        min,
        max,
        mean,
        std
    );
}

fn print_center_patch(image: &GrayImage) -> Result<(), Box<dyn std::error::Error>> {
    let side = image.width().min(image.height()).min(10);
    let patch = crop::center_crop(
        image,
        ImageSize {
            width: side,
            height: side,
        },
    )?;

    println!("center {}x{} pixels:", side, side);
    for row in patch.as_slice().chunks(side) {
        let line = row
            .iter()
            .map(|v| format!("{:3}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", line);
    }

    Ok(())
}

fn run_demo(config: &PipelineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let samples = ["lena.raw", "goldhill.raw", "boat.bmp"];

    for name in samples {
        let path = config.data_dir.join(name);
        if !path.exists() {
            log::warn!(
                "skipping {}: not found in {}",
                name,
                config.data_dir.display()
            );
            continue;
        }

        let image = load_input(&path, config)?;
        report_stats(name, &image);
        print_center_patch(&image)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();

        let mut tiles = vec![image.clone(), enhance::log_transform(&image)?];
        for &gamma in &config.gamma {
            tiles.push(enhance::gamma_transform(&image, gamma)?);
        }
        tiles.push(enhance::negative(&image)?);

        let sheet = montage::montage(&tiles, MONTAGE_COLS, MONTAGE_GAP, MONTAGE_FILL)?;
        let out = config.output_dir.join(format!("{stem}_enhanced.png"));
        functional::write_image_gray8(&out, &sheet)?;
        log::info!("wrote {}", out.display());

        let down = resize::resize(
            &image,
            ImageSize {
                width: 128,
                height: 128,
            },
            InterpolationMode::Nearest,
        )?;
        let smooth = resize::resize(
            &image,
            ImageSize {
                width: 256,
                height: 256,
            },
            InterpolationMode::Bilinear,
        )?;

        let sheet = montage::montage(&[image, down, smooth], MONTAGE_COLS, MONTAGE_GAP, MONTAGE_FILL)?;
        let out = config.output_dir.join(format!("{stem}_resized.png"));
        functional::write_image_gray8(&out, &sheet)?;
        log::info!("wrote {}", out.display());
    }

    Ok(())
}

fn process_single(input: &Path, config: &PipelineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_input(input, config)?;
    report_stats(&input.display().to_string(), &image);
    print_center_patch(&image)?;

    let log_img = enhance::log_transform(&image)?;
    let gamma_img = enhance::gamma_transform(&image, 1.5)?;
    let sheet = montage::montage(
        &[image, log_img, gamma_img],
        MONTAGE_COLS,
        MONTAGE_GAP,
        MONTAGE_FILL,
    )?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let out = config.output_dir.join(format!("{stem}_processed.png"));
    functional::write_image_gray8(&out, &sheet)?;
    log::info!("wrote {}", out.display());

    Ok(())
}
