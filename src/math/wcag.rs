use crate::types::Rgb;

/// Convert an sRGB channel (0-255) to linear light.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.0.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG contrast ratio between two luminance values.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn black_luminance_is_zero() {
        assert_eq!(relative_luminance(BLACK), 0.0);
    }

    #[test]
    fn white_luminance_is_one() {
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_stays_in_unit_range() {
        let samples = [
            Rgb { r: 255, g: 0, b: 0 },
            Rgb { r: 0, g: 255, b: 0 },
            Rgb { r: 0, g: 0, b: 255 },
            Rgb {
                r: 119,
                g: 119,
                b: 119,
            },
            Rgb { r: 1, g: 2, b: 3 },
        ];
        for color in samples {
            let l = relative_luminance(color);
            assert!((0.0..=1.0).contains(&l), "luminance {l} out of range");
        }
    }

    #[test]
    fn luminance_monotonic_per_channel() {
        let dim = relative_luminance(Rgb { r: 100, g: 0, b: 0 });
        let bright = relative_luminance(Rgb { r: 200, g: 0, b: 0 });
        assert!(bright > dim);
    }

    #[test]
    fn green_dominates_luminance() {
        let red = relative_luminance(Rgb { r: 255, g: 0, b: 0 });
        let green = relative_luminance(Rgb { r: 0, g: 255, b: 0 });
        let blue = relative_luminance(Rgb { r: 0, g: 0, b: 255 });
        assert!(green > red && red > blue);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(relative_luminance(BLACK), relative_luminance(WHITE));
        assert!((ratio - 21.0).abs() < 1e-6);
    }

    #[test]
    fn equal_luminance_is_1() {
        assert_eq!(contrast_ratio(0.0, 0.0), 1.0);
        assert_eq!(contrast_ratio(0.5, 0.5), 1.0);
        assert_eq!(contrast_ratio(1.0, 1.0), 1.0);
    }

    #[test]
    fn order_independent() {
        assert_eq!(contrast_ratio(0.2, 0.9), contrast_ratio(0.9, 0.2));
        assert_eq!(contrast_ratio(0.0, 1.0), contrast_ratio(1.0, 0.0));
    }

    #[test]
    fn ratio_never_below_one() {
        let pairs = [(0.0, 0.0), (0.1, 0.2), (0.5, 0.55), (1.0, 0.99)];
        for (a, b) in pairs {
            assert!(contrast_ratio(a, b) >= 1.0);
        }
    }

    #[test]
    fn gray_119_on_white_just_misses_aa() {
        // 4.48:1, a hair under the 4.5:1 normal-text minimum.
        let gray = Rgb {
            r: 119,
            g: 119,
            b: 119,
        };
        let ratio = contrast_ratio(relative_luminance(gray), relative_luminance(WHITE));
        assert!((ratio - 4.48).abs() < 0.01, "got {ratio}");
        assert!(ratio < 4.5);
    }
}
