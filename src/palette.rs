//! Color palettes for confetti particles.
//!
//! Each palette holds five colors; every spawned particle picks one of them
//! uniformly at random.

use glam::Vec3;
use rand::Rng;

/// Convert a `0xRRGGBB` literal to an RGB vector in `0.0..=1.0`.
fn hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    )
}

/// Pre-defined confetti palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Site brand colors: blue, violet, teal, rose, amber (default).
    #[default]
    Brand,
}

impl Palette {
    /// Get the five colors of this palette.
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::Brand => [
                hex(0x2563EB), // Blue
                hex(0x8B5CF6), // Violet
                hex(0x14B8A6), // Teal
                hex(0xF43F5E), // Rose
                hex(0xF59E0B), // Amber
            ],
        }
    }

    /// Pick one color uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let colors = self.colors();
        colors[rng.gen_range(0..colors.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_brand_hex_conversion() {
        let blue = Palette::Brand.colors()[0];
        assert!((blue.x - 37.0 / 255.0).abs() < 1e-6);
        assert!((blue.y - 99.0 / 255.0).abs() < 1e-6);
        assert!((blue.z - 235.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_brand() {
        assert_eq!(Palette::default(), Palette::Brand);
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let mut rng = SmallRng::seed_from_u64(7);
        let colors = Palette::Brand.colors();
        for _ in 0..100 {
            let c = Palette::Brand.pick(&mut rng);
            assert!(colors.contains(&c));
        }
    }

    #[test]
    fn test_pick_reaches_every_color() {
        let mut rng = SmallRng::seed_from_u64(1);
        let colors = Palette::Brand.colors();
        let mut seen = [false; 5];
        for _ in 0..500 {
            let c = Palette::Brand.pick(&mut rng);
            let i = colors.iter().position(|x| *x == c).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
