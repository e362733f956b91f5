use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// How the ends of stroked segments are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub const ALL: [LineCap; 3] = [LineCap::Butt, LineCap::Round, LineCap::Square];

    pub fn label(&self) -> &'static str {
        match self {
            LineCap::Butt => "Butt",
            LineCap::Round => "Round",
            LineCap::Square => "Square",
        }
    }
}

/// Paint state stored on each shape and pushed onto the surface before drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styles {
    #[serde(with = "hex_color")]
    pub stroke_style: Color32,
    #[serde(with = "hex_color")]
    pub fill_style: Color32,
    pub width: f32,
    pub line_cap: LineCap,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            stroke_style: Color32::BLACK,
            fill_style: Color32::TRANSPARENT,
            width: 2.0,
            line_cap: LineCap::Round,
        }
    }
}

impl Styles {
    /// Styles used for the selection affordance drawn over a selected shape
    pub fn selection_marker() -> Self {
        Self {
            stroke_style: Color32::from_rgb(30, 144, 255),
            fill_style: Color32::from_rgb(30, 144, 255),
            width: 1.0,
            line_cap: LineCap::Butt,
        }
    }

    pub fn has_fill(&self) -> bool {
        self.fill_style.a() > 0
    }

    pub fn egui_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.stroke_style)
    }
}

/// Format a colour as a CSS hex string, dropping alpha when opaque
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
pub fn color_from_hex(text: &str) -> Result<Color32, ColorParseError> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(text.to_owned()))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(text.to_owned()));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return Err(ColorParseError::InvalidLength(text.to_owned())),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
            .map_err(|_| ColorParseError::InvalidDigit(text.to_owned()))
    };
    let alpha = if expanded.len() == 8 { channel(3)? } else { u8::MAX };
    Ok(Color32::from_rgba_unmultiplied(
        channel(0)?,
        channel(1)?,
        channel(2)?,
        alpha,
    ))
}

mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::color_to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::color_from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formats() {
        assert_eq!(color_from_hex("#000"), Ok(Color32::BLACK));
        assert_eq!(color_from_hex("#ff0000"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(color_to_hex(Color32::from_rgb(255, 0, 0)), "#ff0000");
        assert_eq!(color_to_hex(Color32::TRANSPARENT), "#00000000");
    }

    #[test]
    fn test_bad_hex() {
        assert!(matches!(color_from_hex("red"), Err(ColorParseError::MissingHash(_))));
        assert!(matches!(color_from_hex("#12345"), Err(ColorParseError::InvalidLength(_))));
        assert!(matches!(color_from_hex("#zzzzzz"), Err(ColorParseError::InvalidDigit(_))));
    }

    #[test]
    fn test_styles_json_keys() {
        let json = serde_json::to_value(Styles::default()).unwrap();
        assert_eq!(json["strokeStyle"], "#000000");
        assert_eq!(json["fillStyle"], "#00000000");
        assert_eq!(json["lineCap"], "round");
        assert_eq!(json["width"], 2.0);
    }
}
