use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::Color;

/// Row-major framebuffer, row 0 at the top.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Image {
        Image { width, height, pixels: vec![Color::ZERO; width * height] }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Writes a plain-text (P3) PPM.
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        for color in &self.pixels {
            writeln!(w, "{}", format_color(*color))?;
        }

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut w)?;
        w.flush()?;
        Ok(())
    }
}

fn format_color(color: Color) -> String {
    let c = color.clamp(Color::ZERO, Color::splat(0.999));
    let r = (c.x * 255.999) as i32;
    let g = (c.y * 255.999) as i32;
    let b = (c.z * 255.999) as i32;
    return format!("{} {} {}", r, g, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_clamped_pixels() {
        let mut image = Image::new(2, 1);
        image.pixels = vec![Color::new(0.0, 0.5, 1.0), Color::new(-1.0, 2.0, 0.25)];

        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n0 127 255\n0 255 63\n");
    }

    #[test]
    fn get_indexes_rows_top_down() {
        let mut image = Image::new(3, 2);
        image.pixels[5] = Color::ONE;
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }
}
