use std::{env, error::Error};

use code128b::Code128Builder;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let data = args.next().unwrap_or_else(|| "Hello, world!".to_string());

    let barcode = Code128Builder::new(&data).height(60).scale(2).quiet_zone(10).build()?;
    println!("{}", barcode.metadata());
    for _ in 0..4 {
        println!("{}", barcode.to_str());
    }

    if let Some(path) = args.next() {
        barcode.render().save(&path)?;
        println!("Barcode saved to: {path}");
    }

    Ok(())
}
