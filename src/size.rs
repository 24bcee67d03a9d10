use crate::gauge::Gauge;

/// Total stitches per row and total rows for a blanket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlanketSize {
    pub stitches: f64,
    pub rows: f64,
}

impl BlanketSize {
    pub fn for_gauge(width: f64, length: f64, gauge: Gauge) -> Self {
        calculate_blanket_size(width, length, gauge.stitches_per_inch, gauge.rows_per_inch)
    }
}

impl From<BlanketSize> for (f64, f64) {
    fn from(size: BlanketSize) -> Self {
        (size.stitches, size.rows)
    }
}

/// `width` and `length` are in inches. Nothing is rounded.
pub fn calculate_blanket_size(
    width: f64,
    length: f64,
    stitch_gauge: f64,
    row_gauge: f64,
) -> BlanketSize {
    BlanketSize {
        stitches: width * stitch_gauge,
        rows: length * row_gauge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throw_blanket() {
        let size = calculate_blanket_size(65.0, 90.0, 15.0, 9.0);
        assert_eq!(size.stitches, 975.0);
        assert_eq!(size.rows, 810.0);
    }

    #[test]
    fn from_measured_gauge() {
        let gauge = Gauge {
            stitches_per_inch: 3.75,
            rows_per_inch: 2.25,
        };
        let size = BlanketSize::for_gauge(60.0, 80.0, gauge);
        assert_eq!(<(f64, f64)>::from(size), (225.0, 180.0));
    }

    #[test]
    fn fractional_counts_are_kept() {
        let size = calculate_blanket_size(3.0, 1.0, 2.5, 0.5);
        assert_eq!(<(f64, f64)>::from(size), (7.5, 0.5));
    }
}
