//! GIF output tests

use std::fs::{self, File};
use std::rc::Rc;

use termreel::animation::{RenderingSink, Script, Sequencer};
use termreel::config::{Config, Layout, Timing};
use termreel::core::ColorTag;
use termreel::output::write_gif;
use termreel::renderer::{Canvas, FontRenderer, FrameRenderer};

fn decode(path: &std::path::Path) -> (u16, u16, Vec<u16>) {
    let file = File::open(path).unwrap();
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(file).unwrap();

    let (width, height) = (decoder.width(), decoder.height());
    let mut delays = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        delays.push(frame.delay);
    }
    (width, height, delays)
}

#[test]
fn test_write_gif_one_image_per_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("demo.gif");

    let red = Rc::new(Canvas::new(16, 8, [255, 0, 0]).into_bitmap());
    let blue = Rc::new(Canvas::new(16, 8, [0, 0, 255]).into_bitmap());
    let bitmaps = vec![Rc::clone(&red), Rc::clone(&red), blue];

    let size = write_gif(&path, &bitmaps, 50).unwrap();

    assert!(path.exists());
    assert_eq!(size, fs::metadata(&path).unwrap().len());
    assert_eq!(&fs::read(&path).unwrap()[..6], b"GIF89a");

    let (width, height, delays) = decode(&path);
    assert_eq!((width, height), (16, 8));
    assert_eq!(delays, vec![5, 5, 5]);
}

#[test]
fn test_write_gif_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let bitmaps = vec![Rc::new(Canvas::new(8, 8, [30, 30, 30]).into_bitmap())];

    let a = dir.path().join("a.gif");
    let b = dir.path().join("b.gif");
    write_gif(&a, &bitmaps, 50).unwrap();
    write_gif(&b, &bitmaps, 50).unwrap();

    assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
}

#[test]
fn test_write_gif_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, b"not a directory").unwrap();

    let bitmaps = vec![Rc::new(Canvas::new(4, 4, [0, 0, 0]).into_bitmap())];
    let err = write_gif(&blocker.join("demo.gif"), &bitmaps, 50).unwrap_err();
    assert!(matches!(err, termreel::Error::Io(_)));
}

#[test]
fn test_small_script_end_to_end() {
    // Shrunk canvas keeps the test fast; everything else is the real pipeline
    let config = Config {
        layout: Layout {
            width: 200,
            height: 120,
            ..Layout::default()
        },
        timing: Timing {
            pause_short: 2,
            pause_medium: 3,
            pause_long: 2,
            ..Timing::default()
        },
        ..Config::default()
    };
    let renderer = FrameRenderer::with_fonts(
        &config,
        FontRenderer::builtin(config.layout.font_size),
        FontRenderer::builtin(config.layout.title_font_size),
    );

    let mut script = Script::new();
    script
        .blank()
        .typed([("$ ", ColorTag::Green), ("bicep build", ColorTag::Blue)])
        .instant([("ok", ColorTag::Green)])
        .hold(termreel::animation::Pause::Final);

    let mut sequencer = Sequencer::new(&config.timing, RenderingSink::new(renderer));
    sequencer.run(script.steps()).unwrap();
    let sink = sequencer.into_sink();
    assert_eq!(sink.bitmaps().len(), script.expected_frames(&config.timing));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.gif");
    write_gif(&path, sink.bitmaps(), config.timing.frame_duration_ms).unwrap();

    let (width, height, delays) = decode(&path);
    assert_eq!((width, height), (200, 120));
    assert_eq!(delays.len(), sink.bitmaps().len());
}

#[test]
fn test_write_gif_rejects_oversized_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.gif");
    let bitmaps = vec![Rc::new(Canvas::new(65_536 + 16, 1, [0, 0, 0]).into_bitmap())];

    let err = write_gif(&path, &bitmaps, 50).unwrap_err();
    assert!(matches!(
        err,
        termreel::Error::CanvasTooLarge {
            width: 65_552,
            height: 1
        }
    ));
    assert!(!path.exists());
}

#[test]
fn test_write_gif_saturates_long_delay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slow.gif");
    let bitmaps = vec![Rc::new(Canvas::new(4, 4, [0, 0, 0]).into_bitmap())];

    write_gif(&path, &bitmaps, 10_000_000).unwrap();

    let (_, _, delays) = decode(&path);
    assert_eq!(delays, vec![u16::MAX]);
}
