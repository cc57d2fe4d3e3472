use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::common::widths::ModuleWidths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    text: String,
    symbols: Vec<usize>,
    widths: ModuleWidths,
    height: u32,
    scale: u32,
    quiet_zone: u32,
}

// Barcode type for builder
//------------------------------------------------------------------------------

impl Barcode {
    pub(crate) fn new(
        text: &str,
        symbols: Vec<usize>,
        widths: ModuleWidths,
        height: u32,
        scale: u32,
        quiet_zone: u32,
    ) -> Self {
        debug_assert!(symbols.len() >= 3, "Barcode needs start, checksum & stop symbols");
        Self { text: text.to_string(), symbols, widths, height, scale, quiet_zone }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// START B, data, checksum & STOP symbol indices.
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    pub fn checksum(&self) -> usize {
        self.symbols[self.symbols.len() - 2]
    }

    pub fn widths(&self) -> &ModuleWidths {
        &self.widths
    }

    pub fn total_modules(&self) -> usize {
        self.widths.total_modules()
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    /// Rendered width in pixels, quiet zones included.
    pub fn width_px(&self) -> u32 {
        (self.total_modules() as u32 + 2 * self.quiet_zone) * self.scale
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbols: {}, Checksum: {}, Modules: {}, Size: {}x{} }}",
            self.symbols.len(),
            self.checksum(),
            self.total_modules(),
            self.width_px(),
            self.height
        )
    }

    // Left edge and width in pixels of every bar
    fn bars(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let mut offset = self.quiet_zone * self.scale;
        self.widths.iter().filter_map(move |s| {
            let x = offset;
            let w = s.width as u32 * self.scale;
            offset += w;
            s.is_bar.then_some((x, w))
        })
    }
}

// Render
//------------------------------------------------------------------------------

impl Barcode {
    pub fn render(&self) -> GrayImage {
        let mut canvas = GrayImage::from_pixel(self.width_px(), self.height, Luma([255]));
        for (x, w) in self.bars() {
            let bar = Rect::at(x as i32, 0).of_size(w, self.height);
            draw_filled_rect_mut(&mut canvas, bar, Luma([0]));
        }
        canvas
    }

    pub fn to_image(&self) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(self.width_px(), self.height, Rgb([255, 255, 255]));
        for (x, w) in self.bars() {
            let bar = Rect::at(x as i32, 0).of_size(w, self.height);
            draw_filled_rect_mut(&mut canvas, bar, Rgb([0, 0, 0]));
        }
        canvas
    }

    // The string always uses Unix newlines (\n), regardless of the platform.
    pub fn to_svg_string(&self) -> String {
        let mut res = String::new();
        res += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
        res += &format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {1}\" width=\"{0}\" height=\"{1}\" stroke=\"none\">\n",
            self.width_px(),
            self.height
        );
        res += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
        res += "\t<path d=\"";
        for (i, (x, w)) in self.bars().enumerate() {
            if i != 0 {
                res += " ";
            }
            res += &format!("M{x},0h{w}v{}h-{w}z", self.height);
        }
        res += "\" fill=\"#000000\"/>\n";
        res += "</svg>\n";
        res
    }

    /// One line of Unicode half blocks, two modules per character.
    pub fn to_str(&self) -> String {
        let qz = std::iter::repeat(false).take(self.quiet_zone as usize);
        let modules = qz.clone().chain(self.widths.modules()).chain(qz).collect::<Vec<_>>();

        modules
            .chunks(2)
            .map(|pair| match pair {
                [true, true] => '█',
                [true, false] | [true] => '▌',
                [false, true] => '▐',
                _ => ' ',
            })
            .collect()
    }
}
