/// 2D drawing-context abstraction the frame renderer draws through
use glam::DVec2;

/// Minimal canvas-like drawing context.
///
/// Colours are CSS hex strings. Setting a colour that does not parse keeps
/// the current one, as a browser canvas does.
pub trait RenderSurface {
    /// (width, height) in pixels
    fn size(&self) -> (usize, usize);
    /// Reset a rectangle to fully transparent
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    /// Fill the closed path through `points` (non-zero winding)
    fn fill_polygon(&mut self, points: &[DVec2]);
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
}

/// Straight (non-premultiplied) RGBA colour
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self {
                r: nibble(0)?,
                g: nibble(1)?,
                b: nibble(2)?,
                a: nibble(3)?,
            }),
            6 => Some(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Pack as 0xAARRGGBB
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

/// One call made against a `CommandRecorder`
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    SetFillColor(String),
    SetStrokeColor(String),
    FillPolygon(Vec<DVec2>),
    StrokeLine { from: DVec2, to: DVec2 },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub width: usize,
    pub height: usize,
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPolygon(_)))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }
}

impl RenderSurface for CommandRecorder {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillColor(color.to_owned()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetStrokeColor(color.to_owned()));
    }

    fn fill_polygon(&mut self, points: &[DVec2]) {
        self.commands.push(DrawCommand::FillPolygon(points.to_vec()));
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::parse_hex("#4d3f31"), Some(Rgba::opaque(0x4d, 0x3f, 0x31)));
        assert_eq!(
            Rgba::parse_hex("#FFFFFF4f"),
            Some(Rgba { r: 255, g: 255, b: 255, a: 0x4f })
        );
        assert_eq!(Rgba::parse_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::parse_hex("#000"), Some(Rgba::BLACK));
    }

    #[test]
    fn rejects_invalid_colors() {
        assert_eq!(Rgba::parse_hex("#4g3f31"), None);
        assert_eq!(Rgba::parse_hex(""), None);
        assert_eq!(Rgba::parse_hex("4d3f31"), None);
        assert_eq!(Rgba::parse_hex("#12345"), None);
    }

    #[test]
    fn argb_packing_round_trips() {
        let c = Rgba { r: 1, g: 2, b: 3, a: 4 };
        assert_eq!(c.to_argb(), 0x04010203);
        assert_eq!(Rgba::from_argb(c.to_argb()), c);
    }
}
