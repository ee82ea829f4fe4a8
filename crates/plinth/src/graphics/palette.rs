//! Palette construction for surfaces that need one.
//!
//! A palette is needed when the granted pixel format is color-indexed, or
//! when an RGBA format can only be displayed through a palette (e.g. an
//! 8-bit display). In the first case the palette holds exactly the colors
//! the program draws with; in the second it is a ramp that maps every
//! representable RGB value to its nearest displayable color.

use super::ColorMode;

bitflags::bitflags! {
    pub struct PaletteFlags: u8 {
        /// Always allocate a fresh system palette slot for this entry instead
        /// of mapping it onto an existing one. Same bit as the platform's.
        const NO_COLLAPSE = 0x04;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub flags: PaletteFlags,
}

impl PaletteEntry {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, flags: PaletteFlags) -> Self {
        Self {
            red,
            green,
            blue,
            flags,
        }
    }
}

/// Width and position of one color channel within a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Channel {
    pub bits: u8,
    pub shift: u8,
}

impl Channel {
    #[must_use]
    pub fn mask(self) -> u32 {
        match 1u32.checked_shl(u32::from(self.bits)) {
            Some(v) => v - 1,
            None => u32::MAX,
        }
    }

    /// The 8-bit intensity of this channel in the packed pixel `pixel`.
    #[must_use]
    pub fn intensity(self, pixel: u32) -> u8 {
        let mask = self.mask();
        if mask == 0 {
            return 0;
        }

        let shifted = pixel.checked_shr(u32::from(self.shift)).unwrap_or(0);
        let value = u64::from(shifted & mask);
        // value <= mask, so the quotient is at most 255
        (value * 255 / u64::from(mask)) as u8
    }
}

/// The pixel format the platform granted, as far as palettes care.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelFormatInfo {
    pub color_mode: ColorMode,
    pub needs_palette: bool,
    pub color_bits: u8,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
}

/// An immutable, ordered list of at most 256 palette entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteTable {
    entries: Vec<PaletteEntry>,
}

impl PaletteTable {
    pub const MAX_ENTRIES: usize = 256;

    /// Builds the palette a surface with this pixel format should install,
    /// or `None` if the format doesn't use one.
    #[must_use]
    pub fn for_format(format: &PixelFormatInfo) -> Option<Self> {
        match format.color_mode {
            ColorMode::Indexed => Some(Self::indexed()),
            ColorMode::Rgba if format.needs_palette => Some(Self::rgb_ramp(format)),
            ColorMode::Rgba => None,
        }
    }

    /// Background, red, green, blue: the colors behind palette indices 0..=3.
    #[must_use]
    pub fn indexed() -> Self {
        let flags = PaletteFlags::NO_COLLAPSE;
        Self {
            entries: vec![
                PaletteEntry::new(0, 0, 0, flags),
                PaletteEntry::new(255, 0, 0, flags),
                PaletteEntry::new(0, 255, 0, flags),
                PaletteEntry::new(0, 0, 255, flags),
            ],
        }
    }

    /// One entry per representable pixel value (capped at 256), each set to
    /// the color that pixel value encodes.
    #[must_use]
    pub fn rgb_ramp(format: &PixelFormatInfo) -> Self {
        let len = 1usize
            .checked_shl(u32::from(format.color_bits))
            .unwrap_or(usize::MAX)
            .min(Self::MAX_ENTRIES);

        let entries = (0..len as u32)
            .map(|pixel| {
                PaletteEntry::new(
                    format.red.intensity(pixel),
                    format.green.intensity(pixel),
                    format.blue.intensity(pixel),
                    PaletteFlags::empty(),
                )
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3-3-2 RGB, the classic 8-bit palettized format.
    fn rgb332() -> PixelFormatInfo {
        PixelFormatInfo {
            color_mode: ColorMode::Rgba,
            needs_palette: true,
            color_bits: 8,
            red: Channel { bits: 3, shift: 0 },
            green: Channel { bits: 3, shift: 3 },
            blue: Channel { bits: 2, shift: 6 },
        }
    }

    #[test]
    fn indexed_palette_has_four_fixed_colors() {
        let format = PixelFormatInfo {
            color_mode: ColorMode::Indexed,
            color_bits: 8,
            ..PixelFormatInfo::default()
        };

        let table = PaletteTable::for_format(&format).unwrap();
        assert_eq!(table.len(), 4);

        let colors: Vec<_> = table
            .entries()
            .iter()
            .map(|e| (e.red, e.green, e.blue))
            .collect();
        assert_eq!(colors, [(0, 0, 0), (255, 0, 0), (0, 255, 0), (0, 0, 255)]);
        for entry in table.entries() {
            assert_eq!(entry.flags, PaletteFlags::NO_COLLAPSE);
        }
    }

    #[test]
    fn rgba_without_palette_need() {
        let format = PixelFormatInfo {
            needs_palette: false,
            color_bits: 32,
            ..rgb332()
        };

        assert_eq!(PaletteTable::for_format(&format), None);
    }

    #[test]
    fn ramp_channel_saturates_at_mask() {
        let channel = Channel { bits: 3, shift: 0 };
        assert_eq!(channel.mask(), 7);
        assert_eq!(channel.intensity(7), 255);
        assert_eq!(channel.intensity(0), 0);
        // 3 * 255 / 7 = 109 (integer division)
        assert_eq!(channel.intensity(3), 109);
    }

    #[test]
    fn ramp_follows_channel_layout() {
        let table = PaletteTable::for_format(&rgb332()).unwrap();
        assert_eq!(table.len(), 256);

        let rgb = |r, g, b| PaletteEntry::new(r, g, b, PaletteFlags::empty());
        let entries = table.entries();
        assert_eq!(entries[7], rgb(255, 0, 0));
        assert_eq!(entries[7 << 3], rgb(0, 255, 0));
        assert_eq!(entries[3 << 6], rgb(0, 0, 255));
        assert_eq!(entries[255], rgb(255, 255, 255));

        for (i, entry) in entries.iter().enumerate() {
            let i = i as u32;
            assert_eq!(u32::from(entry.red), ((i & 7) * 255) / 7);
            assert_eq!(u32::from(entry.green), (((i >> 3) & 7) * 255) / 7);
            assert_eq!(u32::from(entry.blue), (((i >> 6) & 3) * 255) / 3);
        }
    }

    #[test]
    fn ramp_is_capped_at_256_entries() {
        let small = PixelFormatInfo {
            color_bits: 4,
            ..rgb332()
        };
        assert_eq!(PaletteTable::rgb_ramp(&small).len(), 16);

        let wide = PixelFormatInfo {
            color_bits: 32,
            ..rgb332()
        };
        assert_eq!(
            PaletteTable::rgb_ramp(&wide).len(),
            PaletteTable::MAX_ENTRIES
        );
    }

    #[test]
    fn zero_width_channel_is_black() {
        let channel = Channel { bits: 0, shift: 0 };
        assert_eq!(channel.intensity(0xFF), 0);
    }
}
