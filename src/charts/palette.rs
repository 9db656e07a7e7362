//! Colour palettes for the charts.

use plotters::style::RGBColor;

/// Named palettes.
///
/// Sequential palettes are sampled along their gradient; qualitative ones
/// cycle through their entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Viridis,
    Magma,
    Coolwarm,
    Blues,
    Oranges,
    Purples,
    RdYlGn,
    YlGnBu,
    Set1,
    Set2,
    Set3,
}

const VIRIDIS: &[(u8, u8, u8)] = &[(68, 1, 84), (59, 82, 139), (33, 145, 140), (94, 201, 98), (253, 231, 37)];
const MAGMA: &[(u8, u8, u8)] = &[(0, 0, 4), (81, 18, 124), (183, 55, 121), (252, 137, 97), (252, 253, 191)];
const COOLWARM: &[(u8, u8, u8)] = &[(59, 76, 192), (141, 176, 254), (221, 221, 221), (244, 154, 123), (180, 4, 38)];
const BLUES: &[(u8, u8, u8)] = &[(222, 235, 247), (158, 202, 225), (66, 146, 198), (8, 69, 148)];
const ORANGES: &[(u8, u8, u8)] = &[(254, 230, 206), (253, 174, 107), (241, 105, 19), (166, 54, 3)];
const PURPLES: &[(u8, u8, u8)] = &[(239, 237, 245), (188, 189, 220), (128, 125, 186), (84, 39, 143)];
const RDYLGN: &[(u8, u8, u8)] = &[(165, 0, 38), (244, 109, 67), (254, 224, 139), (166, 217, 106), (0, 104, 55)];
const YLGNBU: &[(u8, u8, u8)] = &[(255, 255, 217), (199, 233, 180), (65, 182, 196), (34, 94, 168), (8, 29, 88)];

const SET1: &[(u8, u8, u8)] = &[
    (228, 26, 28),
    (55, 126, 184),
    (77, 175, 74),
    (152, 78, 163),
    (255, 127, 0),
    (166, 86, 40),
];
const SET2: &[(u8, u8, u8)] = &[
    (102, 194, 165),
    (252, 141, 98),
    (141, 160, 203),
    (231, 138, 195),
    (166, 216, 84),
    (229, 196, 148),
];
const SET3: &[(u8, u8, u8)] = &[
    (141, 211, 199),
    (190, 186, 218),
    (251, 128, 114),
    (128, 177, 211),
    (253, 180, 98),
    (179, 222, 105),
];

impl Palette {
    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            Palette::Viridis => VIRIDIS,
            Palette::Magma => MAGMA,
            Palette::Coolwarm => COOLWARM,
            Palette::Blues => BLUES,
            Palette::Oranges => ORANGES,
            Palette::Purples => PURPLES,
            Palette::RdYlGn => RDYLGN,
            Palette::YlGnBu => YLGNBU,
            Palette::Set1 => SET1,
            Palette::Set2 => SET2,
            Palette::Set3 => SET3,
        }
    }

    pub fn is_qualitative(&self) -> bool {
        matches!(self, Palette::Set1 | Palette::Set2 | Palette::Set3)
    }

    /// Colour at `t` in `[0, 1]` along the gradient.
    pub fn at(&self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = scaled - lo as f64;

        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
        let (a, b) = (stops[lo], stops[hi]);
        RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }

    /// Colour for item `i` of `n`.
    pub fn pick(&self, i: usize, n: usize) -> RGBColor {
        if self.is_qualitative() {
            let (r, g, b) = self.stops()[i % self.stops().len()];
            return RGBColor(r, g, b);
        }
        if n <= 1 {
            return self.at(0.5);
        }
        self.at(i as f64 / (n - 1) as f64)
    }
}
