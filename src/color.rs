use std::fmt;

/// A 24-bit `0xRRGGBB` colour, used both for materials and for canvas styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xffffff);
    pub const BLACK: Rgb = Rgb(0x000000);

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[0, 1]`, scaled by `intensity`.
    pub fn to_array(self, intensity: f32) -> [f32; 3] {
        [
            self.r() as f32 / 255.0 * intensity,
            self.g() as f32 / 255.0 * intensity,
            self.b() as f32 / 255.0 * intensity,
        ]
    }
}

/// CSS form, e.g. `#2c3e50`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xffffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_is_zero_padded() {
        assert_eq!(Rgb(0x0000ff).to_string(), "#0000ff");
        assert_eq!(Rgb(0x2c3e50).to_string(), "#2c3e50");
    }

    #[test]
    fn intensity_scales_channels() {
        let [r, g, b] = Rgb(0xff8000).to_array(0.5);
        assert_eq!(r, 0.5);
        assert!((g - 128.0 / 255.0 * 0.5).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }
}
