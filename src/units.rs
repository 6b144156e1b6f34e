use derive_more::{Display, From, Into, Sub};

/// Whole pixels. Frame geometry and measured text extents are expressed in
/// pixels; when rendered to PDF one pixel maps onto one point.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sub,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub u32);

impl Px {
    /// Round a fractional pixel quantity up to the next whole pixel. Negative
    /// and NaN values clamp to zero.
    pub fn ceil(value: f32) -> Px {
        if value.is_nan() || value <= 0.0 {
            Px(0)
        } else {
            Px(value.ceil() as u32)
        }
    }

    /// Scale by a ratio, rounding down
    pub fn scale_floor(self, ratio: f32) -> Px {
        Px((self.0 as f32 * ratio).floor() as u32)
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

/// Typographic points, used for font sizes
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ceil_rounds_up_and_clamps() {
        assert_eq!(Px::ceil(12.01), Px(13));
        assert_eq!(Px::ceil(12.0), Px(12));
        assert_eq!(Px::ceil(-4.0), Px(0));
        assert_eq!(Px::ceil(f32::NAN), Px(0));
    }

    #[test]
    fn scale_floor_truncates() {
        assert_eq!(Px(900).scale_floor(0.7), Px(630));
        assert_eq!(Px(901).scale_floor(0.7), Px(630));
    }

    #[test]
    fn display_has_units() {
        assert_eq!(Px(900).to_string(), "900px");
        assert_eq!(Pt(12.5).to_string(), "12.5pt");
    }
}
