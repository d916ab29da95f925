use clap::ValueEnum;
use raylib::prelude::*;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::WHITE,
                text: Color::BLACK,
                muted_text: Color::new(107, 114, 128, 255),
                placeholder: Color::new(229, 231, 235, 255),
                panel: Color::WHITE,
                divider: Color::new(229, 231, 235, 255),
            },
            Theme::Dark => Palette {
                background: Color::new(17, 17, 19, 255),
                text: Color::new(244, 244, 245, 255),
                muted_text: Color::new(161, 161, 170, 255),
                placeholder: Color::new(39, 39, 42, 255),
                panel: Color::new(24, 24, 27, 255),
                divider: Color::new(63, 63, 70, 255),
            },
        }
    }
}

/// Colors that change with the theme. Turntable and records keep their own.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub placeholder: Color,
    pub panel: Color,
    pub divider: Color,
}
