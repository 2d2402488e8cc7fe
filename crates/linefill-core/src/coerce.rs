use crate::error::ContractViolation;

/// Widens a 1-, 3- or 4-channel pixel to RGBA.
///
/// Gray is broadcast into R, G and B. Pixels without alpha become fully opaque.
pub fn to_rgba(pixel: &[u8]) -> Result<[u8; 4], ContractViolation> {
    match *pixel {
        [r, g, b, a] => Ok([r, g, b, a]),
        [r, g, b] => Ok([r, g, b, u8::MAX]),
        [v] => Ok([v, v, v, u8::MAX]),
        _ => Err(ContractViolation::UnsupportedChannels(pixel.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_broadcasts() {
        assert_eq!(to_rgba(&[128]), Ok([128, 128, 128, 255]));
    }

    #[test]
    fn rgb_gains_opaque_alpha() {
        assert_eq!(to_rgba(&[1, 2, 3]), Ok([1, 2, 3, 255]));
    }

    #[test]
    fn rgba_unchanged() {
        assert_eq!(to_rgba(&[1, 2, 3, 4]), Ok([1, 2, 3, 4]));
        assert_eq!(to_rgba(&[0, 0, 0, 0]), Ok([0, 0, 0, 0]));
    }

    #[test]
    fn other_lengths_fail() {
        assert_eq!(to_rgba(&[]), Err(ContractViolation::UnsupportedChannels(0)));
        assert_eq!(to_rgba(&[1, 2]), Err(ContractViolation::UnsupportedChannels(2)));
        assert_eq!(to_rgba(&[1, 2, 3, 4, 5]), Err(ContractViolation::UnsupportedChannels(5)));
    }
}
