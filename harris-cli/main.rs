use harris_cli::{Config, HarrisPipeline};
use image::{ImageReader, Rgba, RgbaImage};
use imageproc::drawing::draw_cross_mut;
use std::time::Instant;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "chess_board.jpg".to_string());

    // Load color image
    let img = ImageReader::open(&path)
        .expect("Image not found")
        .decode()
        .expect("Decode failed")
        .to_rgb8();

    let (w, h) = img.dimensions();
    let width = w as usize;
    let height = h as usize;

    // Normalize samples to [0, 1]
    let rgb: Vec<f32> = img.as_raw().iter().map(|&v| v as f32 / 255.0).collect();

    let pipeline =
        HarrisPipeline::new(Config::default(), width, height).expect("Pipeline setup failed");

    // Time the full pipeline
    let t0 = Instant::now();
    let output = pipeline.process(&rgb).expect("Detection failed");
    let elapsed = t0.elapsed();

    println!("Time taken: {:.2?}", elapsed);
    println!("Detected {} corners", output.corners.len());

    // Convert image to RGBA for drawing
    let mut annotated: RgbaImage = image::DynamicImage::ImageRgb8(img).into_rgba8();

    // Draw red crosses at each corner
    for corner in &output.corners {
        draw_cross_mut(
            &mut annotated,
            Rgba([255, 0, 0, 255]),
            corner.x as i32,
            corner.y as i32,
        );
    }

    // Save result
    annotated
        .save("corners.png")
        .expect("Failed to save output image");
    println!("Saved result image as corners.png");
}
