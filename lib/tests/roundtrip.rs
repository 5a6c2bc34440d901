use ascii_roundtrip::{
    BlockScale, RAMP, RampMapping, RoundtripConfig, RoundtripError, decode_file, encode_to_file,
    run,
};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 255) / width.max(1)) as u8;
        Rgb([v, v / 2, (y % 256) as u8])
    })
}

fn config_in(dir: &Path, source: &Path) -> RoundtripConfig {
    RoundtripConfig {
        intermediate_path: dir.join("output.txt"),
        output_path: dir.join("output.jpg"),
        ..RoundtripConfig::for_source(source)
    }
}

#[test]
fn test_full_roundtrip_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    gradient(13, 25).save(&source).unwrap();

    let config = config_in(dir.path(), &source);
    let report = run(&config).unwrap();

    // 13x25 at 6x12 -> 2 columns, 2 rows; decoded at 2x4
    assert_eq!(report.source_size, (13, 25));
    assert_eq!(report.text_size, (2, 2));
    assert_eq!(report.output_size, (4, 8));

    let text = fs::read_to_string(&config.intermediate_path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with('\n'));
    assert!(text.lines().flat_map(str::chars).all(|c| RAMP.contains(&c)));

    let saved = image::open(&config.output_path).unwrap();
    assert_eq!((saved.width(), saved.height()), (4, 8));
}

#[test]
fn test_divisible_image_gives_exact_grid() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("art.txt");
    let scale = BlockScale::new(4, 8).unwrap();

    let art = encode_to_file(&gradient(40, 64), &text_path, scale, RampMapping::Spread).unwrap();
    assert_eq!(art.line_count(), 8);
    assert!(art.lines().iter().all(|l| l.chars().count() == 10));

    let decoded = decode_file(&text_path, BlockScale::new(3, 5).unwrap()).unwrap();
    assert_eq!(decoded.dimensions(), (30, 40));
}

#[test]
fn test_unloadable_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("empty.jpg");
    fs::write(&source, b"").unwrap();

    let config = config_in(dir.path(), &source);
    assert!(matches!(run(&config), Err(RoundtripError::Load { .. })));
    assert!(!config.intermediate_path.exists());
    assert!(!config.output_path.exists());
}

#[test]
fn test_unwritable_text_path() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    gradient(12, 24).save(&source).unwrap();

    let mut config = config_in(dir.path(), &source);
    config.intermediate_path = dir.path().join("no-such-dir").join("output.txt");

    assert!(matches!(run(&config), Err(RoundtripError::Open { .. })));
    assert!(!config.intermediate_path.exists());
    assert!(!config.output_path.exists());
}

#[test]
fn test_image_smaller_than_block_fails_reconstruction() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tiny.png");
    gradient(5, 5).save(&source).unwrap();

    let config = config_in(dir.path(), &source);
    assert!(matches!(
        run(&config),
        Err(RoundtripError::Reconstruct { .. })
    ));
    // The empty text file was still written
    assert_eq!(fs::read_to_string(&config.intermediate_path).unwrap(), "");
    assert!(!config.output_path.exists());
}
