use std::fs;
use std::path::{Path, PathBuf};

use convert_img::facade::conversion_facade::ConversionFacade;
use convert_img::facade::traits::i_conversion::ConversionFacadeTrait;
use convert_img::models::batch::BatchJob;
use convert_img::models::conversion::{ConversionStatus, ConvertOptions, SingleJob};
use convert_img::service::codec::ImageCodec;
use convert_img::service::file::FileService;
use image::{ImageFormat, Rgb, RgbImage};

fn facade() -> ConversionFacade {
    ConversionFacade::new(
        Box::new(ImageCodec::new()),
        Box::new(FileService::new()),
        ConvertOptions { keep_existing: false, no_progress: true },
    )
}

fn write_sample(path: &Path) {
    let img = RgbImage::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 128]));
    img.save(path).unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn single_bmp_to_png_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.bmp");
    write_sample(&input);
    let output = dir.path().join("converted").join("photo.png");

    let outcome = facade()
        .single_convert(SingleJob { input_file: input, output_file: Some(output.clone()), output_format: None })
        .unwrap();

    assert_eq!(outcome.status, ConversionStatus::Converted);
    assert_eq!(ImageFormat::from_path(&output).unwrap(), ImageFormat::Png);
    let decoded = image::open(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 6));
}

#[test]
fn single_with_format_only_replaces_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    write_sample(&input);

    let outcome = facade()
        .single_convert(SingleJob { input_file: input, output_file: None, output_format: Some("bmp".into()) })
        .unwrap();

    assert_eq!(outcome.output_path, dir.path().join("photo.bmp"));
    assert!(outcome.is_converted());
    assert!(image::open(dir.path().join("photo.bmp")).is_ok());
}

#[test]
fn converting_twice_yields_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    write_sample(&input);
    let output = dir.path().join("photo.bmp");
    let job = SingleJob { input_file: input, output_file: Some(output.clone()), output_format: None };

    facade().single_convert(job.clone()).unwrap();
    let first = fs::read(&output).unwrap();
    facade().single_convert(job).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unknown_output_extension_is_a_reported_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    write_sample(&input);

    let outcome = facade()
        .single_convert(SingleJob { input_file: input, output_file: None, output_format: Some("nosuchformat".into()) })
        .unwrap();

    assert!(matches!(outcome.status, ConversionStatus::Failed(_)));
}

#[test]
fn batch_scenario_flattens_nested_tree() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir_all(input.join("sub")).unwrap();
    write_sample(&input.join("a.png"));
    write_sample(&input.join("sub").join("b.jpg"));
    fs::write(input.join("c.txt"), "not an image").unwrap();
    let output = dir.path().join("output");

    let summary = facade()
        .batch_convert(BatchJob {
            input_directory: input,
            output_directory: output.clone(),
            output_format: "webp".into(),
            input_format_filter: None,
        })
        .unwrap();

    assert_eq!(summary.converted(), 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(sorted_names(&output), vec!["a.webp", "b.webp"]);
    assert!(!output.join("sub").exists());
    for name in ["a.webp", "b.webp"] {
        let path: PathBuf = output.join(name);
        assert!(image::open(&path).is_ok(), "{} should decode", path.display());
    }
}

#[test]
fn batch_reports_corrupt_file_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("broken.png"), b"definitely not a png").unwrap();
    write_sample(&input.join("fine.png"));
    let output = dir.path().join("output");

    let summary = facade()
        .batch_convert(BatchJob {
            input_directory: input,
            output_directory: output.clone(),
            output_format: "bmp".into(),
            input_format_filter: None,
        })
        .unwrap();

    assert_eq!(summary.converted(), 1);
    assert_eq!(summary.failed(), 1);
    let failed = summary.outcomes.iter().find(|o| !o.is_converted()).unwrap();
    assert!(failed.input_path.ends_with("broken.png"));
    assert!(output.join("fine.bmp").is_file());
}

#[test]
fn batch_on_empty_directory_only_creates_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir_all(&input).unwrap();
    let output = dir.path().join("nested").join("output");

    let summary = facade()
        .batch_convert(BatchJob {
            input_directory: input,
            output_directory: output.clone(),
            output_format: "png".into(),
            input_format_filter: None,
        })
        .unwrap();

    assert!(summary.outcomes.is_empty());
    assert!(output.is_dir());
    assert!(sorted_names(&output).is_empty());
}
