use serde::{Deserialize, Serialize};

/// An ellipse described by its two semi-axis lengths.
///
/// The layout is `#[repr(C)]` so the same value can be handed across the C ABI
/// as `struct { double a; double b; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ellipse {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
}

/// One row of a batch input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseRow {
    #[serde(default)]
    pub id: Option<String>,
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
}

impl EllipseRow {
    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.semi_major_axis, self.semi_minor_axis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub id: Option<String>,
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub area: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AreaReport {
    pub records: Vec<AreaRecord>,
    pub skipped: usize,
    pub total_area: f64,
}
