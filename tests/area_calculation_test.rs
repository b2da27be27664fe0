use calculate_area::{
    calculate_area, try_calculate_area, Area, AreaCalculator, AreaError, RectangleDimensions,
    ValidationMode,
};

#[test]
fn test_square_area() {
    let result = calculate_area(&RectangleDimensions { width: 4.0, height: 4.0 });
    assert_eq!(result, 16.0);
}

#[test]
fn test_documented_scenarios() {
    let scenarios = [((4.0, 4.0), 16.0), ((5.0, 3.0), 15.0), ((0.0, 10.0), 0.0)];

    for ((width, height), expected) in scenarios {
        let dims = RectangleDimensions::new(width, height);
        assert_eq!(calculate_area(&dims), expected);
        assert_eq!(try_calculate_area(&dims).unwrap(), expected);
        assert_eq!(dims.area(), expected);
    }
}

#[test]
fn test_product_and_commutativity_over_a_grid() {
    let values = [0.0, 0.5, 1.0, 2.25, 3.0, 17.0, 1e-9, 1e9];

    for &a in &values {
        for &b in &values {
            let ab = calculate_area(&RectangleDimensions::new(a, b));
            let ba = calculate_area(&RectangleDimensions::new(b, a));
            assert_eq!(ab, a * b);
            assert_eq!(ab, ba);
        }
    }
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calculator = AreaCalculator::new(ValidationMode::Strict);

    let handles: Vec<_> = (1..=4)
        .map(|i| {
            std::thread::spawn(move || {
                calculator
                    .compute(&RectangleDimensions::new(i as f64, 2.0))
                    .unwrap()
            })
        })
        .collect();

    let areas: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(areas, vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_strict_mode_error_message_names_field() {
    let err = try_calculate_area(&RectangleDimensions::new(3.0, -4.0)).unwrap_err();

    assert!(matches!(err, AreaError::InvalidDimension { .. }));
    assert!(err.to_string().contains("height"));
    assert_eq!(err.exit_code(), 1);
}
