use harris_core::GrayImage;
use harris_detect::DetectorBuilder;
use image::{ImageReader, Rgba, RgbaImage};
use imageproc::drawing::draw_cross_mut;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎯 Harris DetectorBuilder API Demo");
    println!("===================================\n");

    // Load grayscale image
    let img_reader = ImageReader::open("chess_board.jpg")
        .map_err(|e| format!("Failed to open image: {}", e))?;
    let img = img_reader
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?
        .to_luma8();

    let (w, h) = img.dimensions();
    let width = w as usize;
    let height = h as usize;
    println!("📷 Processing image: {}x{}", width, height);

    // Convert to normalized luminance
    let gray: GrayImage = img.as_raw().iter().map(|&v| v as f32 / 255.0).collect();

    // Demo 1: Fine preset (small window, dense corners)
    println!("\n🔍 Demo 1: Fine Preset");
    run_detection_demo(
        DetectorBuilder::new(width, height).preset_fine(),
        &gray,
        &img,
        "fine",
    )?;

    // Demo 2: Balanced preset (reference window and sensitivity)
    println!("\n✨ Demo 2: Balanced Preset");
    run_detection_demo(
        DetectorBuilder::new(width, height).preset_balanced(),
        &gray,
        &img,
        "balanced",
    )?;

    // Demo 3: Robust preset (wide window, high k)
    println!("\n🛡️  Demo 3: Robust Preset");
    run_detection_demo(
        DetectorBuilder::new(width, height).preset_robust(),
        &gray,
        &img,
        "robust",
    )?;

    // Demo 4: Custom configuration
    println!("\n⚙️  Demo 4: Custom Configuration");
    run_detection_demo(
        DetectorBuilder::new(width, height)
            .window_size(7)
            .k(0.05)
            .threads(4)
            .integral_image(true),
        &gray,
        &img,
        "custom",
    )?;

    println!("\n🎉 All demos completed successfully!");
    println!("Check the generated images: corners_*.png");

    Ok(())
}

fn run_detection_demo(
    builder: DetectorBuilder,
    gray: &GrayImage,
    source: &image::GrayImage,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Print configuration summary
    println!("   Config: {}", builder.summary());

    // Build the detector
    let configured = builder.build()?;

    // Time the detection
    let start = Instant::now();
    let corners = configured.detect(gray)?;
    let elapsed = start.elapsed();

    println!("   ⏱️  Time: {:.2?}", elapsed);
    println!("   🎯 Detected {} corners", corners.len());

    // Corner density metric
    let area = configured.dimensions().0 * configured.dimensions().1;
    let density = corners.len() as f32 / area as f32 * 10000.0; // per 10k pixels
    println!("   📊 Density: {:.2} corners per 10k pixels", density);

    // Visualize and save
    let mut annotated: RgbaImage =
        image::DynamicImage::ImageLuma8(source.clone()).into_rgba8();
    for corner in &corners {
        draw_cross_mut(
            &mut annotated,
            Rgba([255, 0, 0, 255]),
            corner.x as i32,
            corner.y as i32,
        );
    }
    let filename = format!("corners_{}.png", name);
    annotated.save(&filename)?;
    println!("   💾 Saved: {}", filename);

    println!();
    Ok(())
}
