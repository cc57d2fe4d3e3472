use std::error::Error;

use code128b::Code128Builder;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - provide only data, height and scale fall back to defaults
    let barcode = Code128Builder::new("Hello, World!").build()?;

    // Convert to image and save
    let img = barcode.render();
    img.save("simple_barcode.png")?;

    println!("Simple barcode saved to: simple_barcode.png");
    Ok(())
}
