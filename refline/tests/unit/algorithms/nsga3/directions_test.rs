use super::*;
use crate::helpers::algorithms::create_das_dennis;

#[test]
fn can_create_reference_directions() {
    let directions = ReferenceDirections::new(vec![vec![1., 0.], vec![0.5, 0.5], vec![0., 1.]]).unwrap();

    assert_eq!(directions.dimension(), 2);
    assert_eq!(directions.len(), 3);
    assert!(!directions.is_empty());
    assert_eq!(directions.get(1), Some(&[0.5, 0.5][..]));
    assert_eq!(directions.get(3), None);
    assert_eq!(directions.unit(0), Some(&[1., 0.][..]));
    assert!((directions.unit(1).unwrap()[0] - 0.5_f64.sqrt()).abs() < 1E-12);
}

#[test]
fn can_keep_supplied_order_of_units() {
    let directions = ReferenceDirections::new(vec![vec![0., 2.], vec![3., 0.]]).unwrap();

    assert_eq!(directions.units().collect::<Vec<_>>(), vec![&[0., 1.][..], &[1., 0.][..]]);
}

#[test]
fn can_create_das_dennis_directions() {
    let directions = ReferenceDirections::new(create_das_dennis(3, 12)).unwrap();

    assert_eq!(directions.len(), 91);
    assert_eq!(directions.dimension(), 3);
    assert_eq!(directions.get(0), Some(&[0., 0., 1.][..]));
}

#[test]
fn can_reject_empty_directions() {
    assert!(matches!(ReferenceDirections::new(vec![]), Err(SelectionError::InvalidConfiguration(_))));
    assert!(matches!(ReferenceDirections::new(vec![vec![]]), Err(SelectionError::InvalidConfiguration(_))));
}

#[test]
fn can_reject_directions_with_different_dimensions() {
    let result = ReferenceDirections::new(vec![vec![1., 0.], vec![1.]]);

    assert!(matches!(result, Err(SelectionError::InvalidDimension { index: 1, expected: 2, actual: 1 })));
}

parameterized_test! {can_reject_invalid_direction, direction, {
    let result = ReferenceDirections::new(vec![vec![1., 0.], direction]);

    assert!(matches!(result, Err(SelectionError::InvalidConfiguration(_))));
}}

can_reject_invalid_direction! {
    case01_zero: vec![0., 0.],
    case02_nan: vec![Float::NAN, 1.],
    case03_infinite: vec![1., Float::INFINITY],
}
