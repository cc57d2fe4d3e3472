use std::error::Error;

use code128b::Code128Builder;

fn main() -> Result<(), Box<dyn Error>> {
    let data = "Configured Code 128B";

    let barcode = Code128Builder::new(data)
        .height(120)     // Image height in pixels - if not provided, defaults to 40
        .scale(4)        // Pixels per module - if not provided, defaults to 1
        .quiet_zone(10)  // Light margin in modules - if not provided, defaults to 0
        .build()?;

    // Convert to image and save
    let img = barcode.to_image();
    img.save("configured_barcode.png")?;
    std::fs::write("configured_barcode.svg", barcode.to_svg_string())?;

    println!("Configured barcode saved to: configured_barcode.png & configured_barcode.svg");
    println!("Barcode metadata: {}", barcode.metadata());
    println!("{}", barcode.to_str());

    Ok(())
}
