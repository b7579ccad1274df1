pub mod grayscale;
pub mod hsv;
pub mod inferno;
pub mod twilight;

use crate::core::data::colour::Colour;
use crate::core::ports::colour_map::Colormap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapKind {
    Grayscale,
    Hsv,
    Twilight,
    Inferno,
}

impl ColormapKind {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::Hsv, Self::Twilight, Self::Inferno];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Hsv => "hsv",
            Self::Twilight => "twilight",
            Self::Inferno => "inferno",
        }
    }

    #[must_use]
    pub fn create(self) -> Box<dyn Colormap> {
        match self {
            Self::Grayscale => Box::new(grayscale::Grayscale),
            Self::Hsv => Box::new(hsv::Hsv),
            Self::Twilight => Box::new(twilight::Twilight),
            Self::Inferno => Box::new(inferno::Inferno),
        }
    }
}

impl Default for ColormapKind {
    fn default() -> Self {
        Self::Hsv
    }
}

impl std::fmt::Display for ColormapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Piecewise-linear interpolation through equally spaced RGB anchors,
/// channels in `[0, 1]`. `t` is expected pre-clamped/wrapped by the caller.
fn interpolate_anchors(anchors: &[[f64; 3]], t: f64) -> Colour {
    debug_assert!(anchors.len() >= 2);
    debug_assert!((0.0..=1.0).contains(&t));

    let segments = (anchors.len() - 1) as f64;
    let position = t * segments;
    let index = (position.floor() as usize).min(anchors.len() - 2);
    let local_t = position - index as f64;

    let low = anchors[index];
    let high = anchors[index + 1];

    let channel = |a: f64, b: f64| ((a + (b - a) * local_t) * 255.0).round() as u8;

    Colour {
        r: channel(low[0], high[0]),
        g: channel(low[1], high[1]),
        b: channel(low[2], high[2]),
    }
}

/// Wraps `t` into `[0, 1)` for cyclic palettes.
fn wrap_unit(t: f64) -> f64 {
    let wrapped = t - t.floor();

    if wrapped.is_nan() { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_create_their_display_name() {
        for kind in ColormapKind::ALL {
            let palette = kind.create();

            assert_eq!(palette.display_name(), kind.display_name());
        }
    }

    #[test]
    fn test_interpolate_anchor_endpoints() {
        let anchors = [[0.0, 0.0, 0.0], [1.0, 0.5, 0.0]];

        assert_eq!(interpolate_anchors(&anchors, 0.0), Colour::BLACK);
        assert_eq!(
            interpolate_anchors(&anchors, 1.0),
            Colour {
                r: 255,
                g: 128,
                b: 0
            }
        );
    }

    #[test]
    fn test_interpolate_anchor_midpoint() {
        let anchors = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let mid = interpolate_anchors(&anchors, 0.5);

        assert_eq!(
            mid,
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(1.0), 0.0);
    }
}
