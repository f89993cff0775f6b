//! Shades, palette registers and the built-in color schemes.
//!
//! A "shade" is the 2-bit value a palette register assigns to a tile color
//! number; a color scheme then maps each shade of the background and the
//! two object palettes to 24-bit RGB.

use super::RGB;

use self::Shade::*;

/// The 4 shades that the DMG's monochrome LCD can display.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shade {
    White = 0,
    LightGray = 1,
    DarkGray = 2,
    Black = 3,
}

impl Shade {
    /// Build a 'Shade' value from a byte.
    /// Assumption : value <= 3 (callers mask to two bits).
    pub fn from_u8(value: u8) -> Shade {
        match value {
            0 => White,
            1 => LightGray,
            2 => DarkGray,
            3 => Black,
            _ => unreachable!(),
        }
    }

    /// Translate a 2-bit tile color number through a palette register byte:
    /// bits 1-0 hold the shade for color 0, bits 3-2 for color 1, and so on.
    pub fn from_palette(palette: u8, color_num: u8) -> Shade {
        Shade::from_u8((palette >> (color_num * 2)) & 0x03)
    }
}

/// The three palette slots a color scheme provides RGB values for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaletteSlot {
    Bg = 0,
    Obj0 = 1,
    Obj1 = 2,
}

/// A named set of RGB values for the background palette and the two
/// object palettes, four shades each.
pub struct ColorScheme {
    pub name: &'static str,
    pub bg: [RGB; 4],
    pub obj0: [RGB; 4],
    pub obj1: [RGB; 4],
}

impl ColorScheme {
    pub fn palette(&self, slot: PaletteSlot) -> &[RGB; 4] {
        match slot {
            PaletteSlot::Bg => &self.bg,
            PaletteSlot::Obj0 => &self.obj0,
            PaletteSlot::Obj1 => &self.obj1,
        }
    }

    pub fn rgb(&self, slot: PaletteSlot, shade: Shade) -> RGB {
        self.palette(slot)[shade as usize]
    }

    const fn mono(name: &'static str, hex: [u32; 4]) -> ColorScheme {
        let palette = ColorScheme::palette_from_hex(hex);
        ColorScheme {
            name,
            bg: palette,
            obj0: palette,
            obj1: palette,
        }
    }

    const fn palette_from_hex(hex: [u32; 4]) -> [RGB; 4] {
        [
            RGB::from_hex(hex[0]),
            RGB::from_hex(hex[1]),
            RGB::from_hex(hex[2]),
            RGB::from_hex(hex[3]),
        ]
    }
}

/// The selectable color schemes. The RGB constants are kept bit-exact for
/// compatibility with existing configurations.
pub static COLOR_SCHEMES: [ColorScheme; 10] = [
    ColorScheme::mono("Gray Shades", [0xFFFFFF, 0xAAAAAA, 0x555555, 0x000000]),
    ColorScheme::mono("Game Boy Classic", [0x9BBC0F, 0x8BAC0F, 0x306230, 0x0F380F]),
    ColorScheme {
        name: "KIGB",
        bg: ColorScheme::palette_from_hex([0xE7E7DE, 0xADB594, 0x318C8C, 0x292929]),
        obj0: ColorScheme::palette_from_hex([0xFFFFFF, 0xE7C6BD, 0xAD7373, 0x292929]),
        obj1: ColorScheme::palette_from_hex([0xFFFFFF, 0xE7C6BD, 0xAD7373, 0x292929]),
    },
    ColorScheme::mono("bgb", [0xEFFFDE, 0xADD794, 0x529273, 0x183442]),
    ColorScheme::mono("NO$GMB", [0xFFE78C, 0xDEB55A, 0x9C7B39, 0x4A3918]),
    ColorScheme::mono("GameBoy Pocket", [0xC3CFA1, 0x8B9570, 0x4E533D, 0x1F1F1F]),
    ColorScheme {
        // from javaBoy 0.92
        name: "Psychadelic",
        bg: ColorScheme::palette_from_hex([0xFFC0FF, 0x8080FF, 0xC000C0, 0x800080]),
        obj0: ColorScheme::palette_from_hex([0xFFFF40, 0xC0C000, 0xFF4040, 0x800000]),
        obj1: ColorScheme::palette_from_hex([0x80FFFF, 0x00C0C0, 0x008080, 0x004000]),
    },
    ColorScheme::mono("Takedown", [0xE7D69C, 0xB5A56B, 0x7B7363, 0x393929]),
    ColorScheme {
        name: "Dark Brown",
        bg: ColorScheme::palette_from_hex([0xFCEAE4, 0xC4AE94, 0x947A4C, 0x4C2A04]),
        obj0: ColorScheme::palette_from_hex([0xFCEAE4, 0xEC9A54, 0x844204, 0x000000]),
        obj1: ColorScheme::palette_from_hex([0xFCEAE4, 0xEC9A54, 0x844204, 0x000000]),
    },
    ColorScheme::mono("Super GameBoy", [0xFEFEF7, 0xFEF7C0, 0xE29494, 0x414141]),
];
