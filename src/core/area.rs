use crate::domain::model::Ellipse;
use crate::utils::error::Result;
use crate::utils::validation::validate_axis;
use std::f64::consts::PI;

/// Area of an ellipse: `a * b * PI`.
///
/// No validation is performed. Negative or non-finite axes yield the
/// corresponding negative or non-finite result.
#[inline]
pub fn ellipse_area(ellipse: &Ellipse) -> f64 {
    ellipse.semi_major_axis * ellipse.semi_minor_axis * PI
}

/// Same as [`ellipse_area`], but rejects axes that are NaN, infinite or negative.
pub fn checked_ellipse_area(ellipse: &Ellipse) -> Result<f64> {
    ellipse.validate_axes()?;
    Ok(ellipse_area(ellipse))
}

impl Ellipse {
    pub const fn new(semi_major_axis: f64, semi_minor_axis: f64) -> Self {
        Self {
            semi_major_axis,
            semi_minor_axis,
        }
    }

    pub const fn circle(radius: f64) -> Self {
        Self::new(radius, radius)
    }

    /// Builds an ellipse whose axes are finite and non-negative.
    pub fn try_new(semi_major_axis: f64, semi_minor_axis: f64) -> Result<Self> {
        let ellipse = Self::new(semi_major_axis, semi_minor_axis);
        ellipse.validate_axes()?;
        Ok(ellipse)
    }

    pub fn validate_axes(&self) -> Result<()> {
        validate_axis("semi_major_axis", self.semi_major_axis)?;
        validate_axis("semi_minor_axis", self.semi_minor_axis)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        ellipse_area(self)
    }
}
