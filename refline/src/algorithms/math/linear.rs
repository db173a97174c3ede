#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/linear_test.rs"]
mod linear_test;

use crate::utils::Float;

/// Pivot magnitude below which a matrix is considered singular.
const SINGULAR_THRESHOLD: Float = 1E-12;

/// Solves a square linear system `A x = b` using Gaussian elimination with partial pivoting.
/// Returns `None` when the matrix is not square, does not match `rhs` or is (numerically) singular.
pub fn solve_linear_system(matrix: &[Vec<Float>], rhs: &[Float]) -> Option<Vec<Float>> {
    let size = rhs.len();
    if size == 0 || matrix.len() != size || matrix.iter().any(|row| row.len() != size) {
        return None;
    }

    // augmented matrix [A | b]
    let mut augmented: Vec<Vec<Float>> = matrix
        .iter()
        .zip(rhs.iter())
        .map(|(row, &value)| row.iter().copied().chain(std::iter::once(value)).collect())
        .collect();

    for column in 0..size {
        // first row with the largest magnitude wins
        let pivot_row = (column..size).fold(column, |best, row| {
            if augmented[row][column].abs() > augmented[best][column].abs() { row } else { best }
        });

        let pivot = augmented[pivot_row][column];
        if !pivot.is_finite() || pivot.abs() < SINGULAR_THRESHOLD {
            return None;
        }

        augmented.swap(column, pivot_row);

        for row in (column + 1)..size {
            let factor = augmented[row][column] / pivot;
            if factor == 0. {
                continue;
            }

            for idx in column..=size {
                let delta = factor * augmented[column][idx];
                augmented[row][idx] -= delta;
            }
        }
    }

    let mut solution = vec![0.; size];
    for row in (0..size).rev() {
        let known = ((row + 1)..size).map(|idx| augmented[row][idx] * solution[idx]).sum::<Float>();
        solution[row] = (augmented[row][size] - known) / augmented[row][row];
    }

    if solution.iter().all(|value| value.is_finite()) { Some(solution) } else { None }
}
