/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction; the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. Fonts use a Y-up coordinate
    /// system, so this is the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction; the right side of a region.
    pub x_max: T,
    /// Maximum extent in the y direction; the top of a region.
    pub y_max: T,
}

impl<T: PartialOrd> BoundingBox<T> {
    /// Returns `true` if neither minimum exceeds its maximum.
    ///
    /// An empty region, where minimum and maximum are equal, is well formed.
    pub fn is_well_formed(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }
}

impl BoundingBox<i16> {
    /// The horizontal extent of the region, in font units.
    pub fn width(&self) -> i32 {
        self.x_max as i32 - self.x_min as i32
    }

    /// The vertical extent of the region, in font units.
    pub fn height(&self) -> i32 {
        self.y_max as i32 - self.y_min as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let bbox = BoundingBox {
            x_min: -200i16,
            y_min: -300,
            x_max: 1200,
            y_max: 800,
        };
        assert!(bbox.is_well_formed());
        assert_eq!((bbox.width(), bbox.height()), (1400, 1100));

        let full = BoundingBox {
            x_min: i16::MIN,
            y_min: i16::MIN,
            x_max: i16::MAX,
            y_max: i16::MAX,
        };
        assert_eq!(full.width(), 65535);

        let flipped = BoundingBox { x_max: -201, ..bbox };
        assert!(!flipped.is_well_formed());
        assert!(BoundingBox::<i16>::default().is_well_formed());
    }
}
