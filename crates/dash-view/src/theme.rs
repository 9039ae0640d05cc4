//! Theme resolution and colour palettes.

use dash_model::Theme;

/// A theme with `Auto` resolved against the system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Semantic colours for one resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
}

const LIGHT: Palette = Palette {
    background: Rgb(0xff, 0xff, 0xff),
    text: Rgb(0x1f, 0x29, 0x37),
    muted: Rgb(0x6b, 0x72, 0x80),
    accent: Rgb(0x25, 0x63, 0xeb),
    warning: Rgb(0xd9, 0x77, 0x06),
    danger: Rgb(0xdc, 0x26, 0x26),
};

const DARK: Palette = Palette {
    background: Rgb(0x11, 0x18, 0x27),
    text: Rgb(0xf9, 0xfa, 0xfb),
    muted: Rgb(0x9c, 0xa3, 0xaf),
    accent: Rgb(0x60, 0xa5, 0xfa),
    warning: Rgb(0xfb, 0xbf, 0x24),
    danger: Rgb(0xf8, 0x71, 0x71),
};

pub fn resolve_theme(theme: Theme, system_is_dark: bool) -> ResolvedTheme {
    match theme {
        Theme::Light => ResolvedTheme::Light,
        Theme::Dark => ResolvedTheme::Dark,
        Theme::Auto if system_is_dark => ResolvedTheme::Dark,
        Theme::Auto => ResolvedTheme::Light,
    }
}

impl ResolvedTheme {
    pub const fn palette(&self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_system() {
        assert_eq!(resolve_theme(Theme::Auto, true), ResolvedTheme::Dark);
        assert_eq!(resolve_theme(Theme::Auto, false), ResolvedTheme::Light);
        assert_eq!(resolve_theme(Theme::Light, true), ResolvedTheme::Light);
        assert_eq!(resolve_theme(Theme::Dark, false), ResolvedTheme::Dark);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(ResolvedTheme::Light.palette().accent.hex(), "#2563eb");
    }
}
