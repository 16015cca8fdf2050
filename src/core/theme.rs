/// Page colour scheme, mirrored in the `data-theme` attribute of `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a `data-theme` value; anything but `light` is treated as dark.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Theme a toggle switches to from a raw `data-theme` value. Only an
    /// explicit `dark` turns light; a missing or unknown value goes dark.
    pub fn next_from_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Base colour for dots and connection lines: white on dark, black on light.
    pub fn base_rgb(self) -> [u8; 3] {
        match self {
            Theme::Dark => [255, 255, 255],
            Theme::Light => [0, 0, 0],
        }
    }

    /// CSS `rgba()` string of the base colour at `alpha`.
    pub fn rgba(self, alpha: f32) -> String {
        let [r, g, b] = self.base_rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}
