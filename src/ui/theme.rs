use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub success: ColorSpec,
    pub error: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Look a theme up by its configured name, falling back to the default
    /// palette for unknown names.
    ///
    pub fn by_name(name: &str) -> Theme {
        match name {
            "dieta-light" => Theme::dieta_light(),
            _ => Theme::dieta_dark(),
        }
    }

    /// Dark palette matching the mobile app colors.
    ///
    pub fn dieta_dark() -> Theme {
        Theme {
            name: "dieta-dark".to_string(),
            primary: ColorSpec { r: 36, g: 128, b: 255 },
            banner: ColorSpec { r: 36, g: 128, b: 255 },
            text: ColorSpec { r: 236, g: 236, b: 236 },
            text_muted: ColorSpec { r: 140, g: 140, b: 150 },
            success: ColorSpec { r: 92, g: 200, b: 120 },
            error: ColorSpec { r: 235, g: 87, b: 87 },
            border_active: ColorSpec { r: 36, g: 128, b: 255 },
            border_normal: ColorSpec { r: 90, g: 90, b: 100 },
            highlight_bg: ColorSpec { r: 36, g: 128, b: 255 },
            highlight_fg: ColorSpec { r: 16, g: 18, b: 24 },
        }
    }

    /// Light palette for bright terminals.
    ///
    pub fn dieta_light() -> Theme {
        Theme {
            name: "dieta-light".to_string(),
            primary: ColorSpec { r: 20, g: 90, b: 200 },
            banner: ColorSpec { r: 20, g: 90, b: 200 },
            text: ColorSpec { r: 30, g: 30, b: 36 },
            text_muted: ColorSpec { r: 110, g: 110, b: 120 },
            success: ColorSpec { r: 30, g: 140, b: 70 },
            error: ColorSpec { r: 190, g: 40, b: 40 },
            border_active: ColorSpec { r: 20, g: 90, b: 200 },
            border_normal: ColorSpec { r: 170, g: 170, b: 180 },
            highlight_bg: ColorSpec { r: 20, g: 90, b: 200 },
            highlight_fg: ColorSpec { r: 250, g: 250, b: 252 },
        }
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::dieta_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_falls_back_to_the_dark_palette() {
        assert_eq!(Theme::by_name("dieta-light").name, "dieta-light");
        assert_eq!(Theme::by_name("no-such-theme").name, "dieta-dark");
    }

    #[test]
    fn color_spec_maps_to_rgb() {
        let spec = ColorSpec { r: 1, g: 2, b: 3 };
        assert_eq!(spec.to_color(), Color::Rgb(1, 2, 3));
    }
}
