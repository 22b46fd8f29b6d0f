#[cfg(feature = "serde")]
use harris_detect::DetectorConfig;

#[cfg(feature = "serde")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Harris Configuration Serialization Demo");
    println!("===========================================\n");

    let width = 512;
    let height = 512;

    // Demo 1: Create configurations
    println!("📋 Demo 1: Creating Configurations");

    let fine_config = DetectorConfig::fine_preset(width, height)
        .with_metadata("Checkerboard Fine", "Dense detection for calibration targets");

    let robust_config = DetectorConfig::robust_preset(width, height)
        .with_metadata("Outdoor Robust", "Wide window for noisy captures");

    let custom_config = DetectorConfig::new(width, height)
        .with_metadata("Custom Config", "Reference window and sensitivity");

    println!("   Created 3 configurations:");
    println!("   • {}", fine_config.summary());
    println!("   • {}", robust_config.summary());
    println!("   • {}", custom_config.summary());

    // Demo 2: JSON serialization
    println!("\n📄 Demo 2: JSON Serialization");

    let fine_json = fine_config.to_json()?;
    println!("   Fine config JSON (first 200 chars):");
    println!("   {}", &fine_json[..200.min(fine_json.len())]);

    fine_config.save_json("fine_config.json")?;
    robust_config.save_json("robust_config.json")?;
    println!("   ✅ Saved JSON configuration files");

    // Demo 3: TOML serialization
    println!("\n📋 Demo 3: TOML Serialization");

    let robust_toml = robust_config.to_toml()?;
    println!("   Robust config TOML (first 200 chars):");
    println!("   {}", &robust_toml[..200.min(robust_toml.len())]);

    fine_config.save_toml("fine_config.toml")?;
    robust_config.save_toml("robust_config.toml")?;
    println!("   ✅ Saved TOML configuration files");

    // Demo 4: Load and validate
    println!("\n🔍 Demo 4: Loading and Validation");

    let loaded_json = DetectorConfig::load_json("fine_config.json")?;
    let loaded_toml = DetectorConfig::load_toml("robust_config.toml")?;

    println!("   Loaded configurations:");
    println!("   • From JSON: {}", loaded_json.summary());
    println!("   • From TOML: {}", loaded_toml.summary());

    loaded_json.validate()?;
    loaded_toml.validate()?;
    println!("   ✅ All loaded configurations are valid");

    // Demo 5: Round-trip consistency
    println!("\n🔄 Demo 5: Round-trip Testing");

    let original = DetectorConfig::balanced_preset(256, 256)
        .with_metadata("Round-trip Test", "Testing serialization consistency");

    let from_json = DetectorConfig::from_json(&original.to_json()?)?;
    let from_toml = DetectorConfig::from_toml(&original.to_toml()?)?;

    assert_eq!(original.width, from_json.width);
    assert_eq!(original.width, from_toml.width);
    assert_eq!(original.core.window_size, from_json.core.window_size);
    assert_eq!(original.core.window_size, from_toml.core.window_size);
    assert_eq!(original.core.k, from_json.core.k);
    assert_eq!(original.core.k, from_toml.core.k);

    println!("   ✅ Round-trip serialization is consistent");

    println!("\n🎉 Configuration serialization demo completed successfully!");

    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Harris Configuration Serialization Demo");
    println!("===========================================\n");
    println!("❌ This demo requires the 'serde' feature to be enabled.");
    println!("   Run with: cargo run --example config_serialization_demo --features=serde");
    Ok(())
}
