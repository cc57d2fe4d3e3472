use std::error::Error;

use code128b::{reader::scan, Code128Builder};

fn main() -> Result<(), Box<dyn Error>> {
    // Read an existing barcode image, or generate one to read back
    let path = std::env::args().nth(1);
    let img = match &path {
        Some(p) => image::open(p)?.to_luma8(),
        None => Code128Builder::new("Read me back").scale(3).quiet_zone(10).build()?.render(),
    };

    match scan(&img) {
        Ok(text) => println!("Decoded message: {}", text),
        Err(e) => println!("No barcode found in the image: {}", e),
    }

    Ok(())
}
