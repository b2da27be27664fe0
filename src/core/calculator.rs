use crate::core::{Area, AreaRecord, RectangleDimensions, ValidationMode};
use crate::utils::error::{AreaError, Result};
use crate::utils::validation::validate_dimension;

/// Area of a rectangle: `width * height`.
///
/// No validation is done. Negative, zero and non-finite inputs give the plain
/// arithmetic product. Use [`try_calculate_area`] to reject them instead.
pub fn calculate_area(dimensions: &RectangleDimensions) -> f64 {
    dimensions.width * dimensions.height
}

/// Like [`calculate_area`], but fails with [`AreaError::InvalidDimension`]
/// when a dimension is negative, NaN or infinite. Width is checked first.
pub fn try_calculate_area(dimensions: &RectangleDimensions) -> Result<f64> {
    validate_dimension("width", dimensions.width)?;
    validate_dimension("height", dimensions.height)?;

    let area = calculate_area(dimensions);
    if area.is_infinite() {
        return Err(AreaError::InvalidDimension {
            field: "area".to_string(),
            value: format!("{} * {}", dimensions.width, dimensions.height),
            reason: "Product overflows f64".to_string(),
        });
    }

    Ok(area)
}

impl Area for RectangleDimensions {
    fn area(&self) -> f64 {
        calculate_area(self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator {
    mode: ValidationMode,
}

impl AreaCalculator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn compute(&self, dimensions: &RectangleDimensions) -> Result<f64> {
        let area = match self.mode {
            ValidationMode::Strict => try_calculate_area(dimensions)?,
            ValidationMode::Unchecked => calculate_area(dimensions),
        };

        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            area,
            "computed area"
        );

        Ok(area)
    }

    /// Computes every record, stopping at the first invalid one.
    pub fn compute_all(&self, dimensions: &[RectangleDimensions]) -> Result<Vec<AreaRecord>> {
        let records = dimensions
            .iter()
            .enumerate()
            .map(|(index, dims)| {
                self.compute(dims)
                    .map(|area| AreaRecord::new(dims, area))
                    .map_err(|e| e.at_record(index))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Computed {} areas ({:?} mode)", records.len(), self.mode);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, height: f64) -> RectangleDimensions {
        RectangleDimensions::new(width, height)
    }

    #[test]
    fn test_calculate_area_scenarios() {
        assert_eq!(calculate_area(&dims(4.0, 4.0)), 16.0);
        assert_eq!(calculate_area(&dims(5.0, 3.0)), 15.0);
        assert_eq!(calculate_area(&dims(0.0, 10.0)), 0.0);
    }

    #[test]
    fn test_calculate_area_is_commutative() {
        let samples = [(1.5, 2.0), (7.0, 0.25), (1e10, 3.0), (0.0, 42.0)];
        for (a, b) in samples {
            assert_eq!(calculate_area(&dims(a, b)), calculate_area(&dims(b, a)));
        }
    }

    #[test]
    fn test_zero_width_gives_zero_for_any_finite_height() {
        for height in [0.0, 1.0, 123.456, f64::MAX, -5.0] {
            assert_eq!(calculate_area(&dims(0.0, height)), 0.0);
        }
    }

    #[test]
    fn test_calculate_area_does_not_validate() {
        assert_eq!(calculate_area(&dims(-2.0, 3.0)), -6.0);
        assert!(calculate_area(&dims(f64::NAN, 3.0)).is_nan());
        assert_eq!(calculate_area(&dims(f64::INFINITY, 2.0)), f64::INFINITY);
    }

    #[test]
    fn test_calculate_area_leaves_input_untouched() {
        let input = dims(5.0, 3.0);
        let _ = calculate_area(&input);
        assert_eq!(input, dims(5.0, 3.0));
    }

    #[test]
    fn test_try_calculate_area_accepts_valid_input() {
        assert_eq!(try_calculate_area(&dims(5.0, 3.0)).unwrap(), 15.0);
        assert_eq!(try_calculate_area(&dims(0.0, 10.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_try_calculate_area_rejects_invalid_input() {
        let cases = [
            (dims(-1.0, 3.0), "width"),
            (dims(3.0, -1.0), "height"),
            (dims(f64::NAN, 3.0), "width"),
            (dims(3.0, f64::INFINITY), "height"),
            (dims(-1.0, f64::NAN), "width"),
            (dims(f64::MAX, 2.0), "area"),
        ];

        for (input, expected_field) in cases {
            match try_calculate_area(&input) {
                Err(AreaError::InvalidDimension { field, .. }) => {
                    assert_eq!(field, expected_field, "input {:?}", input)
                }
                other => panic!("expected InvalidDimension for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_area_trait() {
        assert_eq!(dims(4.0, 4.0).area(), 16.0);
    }

    #[test]
    fn test_calculator_modes() {
        let input = dims(-2.0, 3.0);
        assert!(AreaCalculator::new(ValidationMode::Strict).compute(&input).is_err());
        assert_eq!(
            AreaCalculator::new(ValidationMode::Unchecked)
                .compute(&input)
                .unwrap(),
            -6.0
        );
        assert_eq!(AreaCalculator::default().mode(), ValidationMode::Strict);
    }

    #[test]
    fn test_compute_all_reports_failing_index() {
        let calculator = AreaCalculator::default();
        let inputs = [dims(1.0, 2.0), dims(3.0, 4.0), dims(5.0, -1.0)];

        match calculator.compute_all(&inputs) {
            Err(AreaError::InvalidDimension { field, .. }) => {
                assert_eq!(field, "records[2].height")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let records = calculator.compute_all(&inputs[..2]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], AreaRecord { width: 3.0, height: 4.0, area: 12.0 });
    }
}
