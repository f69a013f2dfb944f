//! Injected colour sources.
//!
//! Generators that need "a new colour" (nested star layers, GIS features)
//! draw it from a `ColourSource` passed in by the caller. Tests substitute
//! `FixedColours` to keep output deterministic.

use palette::{Hsl, IntoColor, Srgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::{Colour, Palette};

/// A supplier of fill colours.
pub trait ColourSource {
    /// Produce the next colour.
    fn next_colour(&mut self) -> Colour;
}

/// Which unpaletted source a run draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMode {
    /// Random RGB, seeded when a seed is given.
    #[default]
    Random,
    /// Golden-angle hue walk starting at `seed % 360`.
    HueWalk,
}

/// Uniformly random RGB colours.
#[derive(Debug, Clone)]
pub struct RandomColours {
    rng: StdRng,
}

impl RandomColours {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColourSource for RandomColours {
    fn next_colour(&mut self) -> Colour {
        Colour::rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Cycles through a fixed list of colours.
#[derive(Debug, Clone)]
pub struct FixedColours {
    colours: Vec<Colour>,
    index: usize,
}

impl FixedColours {
    /// An empty list yields black.
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours, index: 0 }
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self::new(palette.colours.clone())
    }
}

impl ColourSource for FixedColours {
    fn next_colour(&mut self) -> Colour {
        if self.colours.is_empty() {
            return Colour::BLACK;
        }
        let colour = self.colours[self.index % self.colours.len()];
        self.index += 1;
        colour
    }
}

/// Golden-angle walk around the HSL hue wheel.
///
/// Consecutive colours are well separated without any randomness.
#[derive(Debug, Clone)]
pub struct HueWalk {
    hue: f32,
    saturation: f32,
    lightness: f32,
}

const GOLDEN_ANGLE: f32 = 137.507_76;

impl HueWalk {
    pub fn new(start_hue: f32) -> Self {
        Self {
            hue: start_hue,
            saturation: 0.65,
            lightness: 0.55,
        }
    }
}

impl Default for HueWalk {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ColourSource for HueWalk {
    fn next_colour(&mut self) -> Colour {
        let hsl: Hsl = Hsl::new(self.hue, self.saturation, self.lightness);
        self.hue = (self.hue + GOLDEN_ANGLE) % 360.0;

        let rgb: Srgb<f32> = hsl.into_color();
        Colour::rgb(
            (rgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (rgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (rgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}
