// =========================================================================
// Matrix contract: structural identities the type must uphold.
// =========================================================================

use super::*;

/// A * I = A for square A
#[test]
fn contract_identity_is_multiplicative_neutral() {
    for n in 1..=4 {
        let data: Vec<f64> = (0..n * n).map(|k| (k as f64) - 3.5).collect();
        let a = Matrix::from_vec(n, n, data).expect("data length matches n*n");
        let i = Matrix::identity(n).expect("positive size");

        let product = a.matmul(&i).expect("compatible dimensions");
        assert_eq!(product, a, "A * I != A for n={n}");

        let product = i.matmul(&a).expect("compatible dimensions");
        assert_eq!(product, a, "I * A != A for n={n}");
    }
}

/// dot(A, A) = sum of squared entries (Frobenius-style self product)
#[test]
fn contract_self_dot_is_sum_of_squares() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.0, 0.5, 4.0, -1.5])
        .expect("data length matches 2*3");

    let dot = a.dot(&a).expect("same shape");
    let expected: f64 = a.as_slice().iter().map(|x| x * x).sum();

    assert!((dot - expected).abs() < 1e-12, "dot(A,A)={dot} != {expected}");
}

/// transpose(transpose(A)) = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("data length matches 3*2");
    assert_eq!(a.transpose().transpose(), a);
}

/// (A + B) - B = A
#[test]
fn contract_add_sub_roundtrip() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches 2*2");
    let b = Matrix::from_vec(2, 2, vec![-1.0, 0.5, 2.0, -3.0]).expect("data length matches 2*2");

    let roundtrip = a
        .add(&b)
        .expect("same shape")
        .sub(&b)
        .expect("same shape");

    for (x, y) in roundtrip.as_slice().iter().zip(a.as_slice()) {
        assert!((x - y).abs() < 1e-12);
    }
}

/// Operations return new matrices; operands are untouched.
#[test]
fn contract_operations_do_not_mutate_operands() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches 2*2");
    let before = a.clone();

    let _ = a.transpose();
    let _ = a.add(&a).expect("same shape");
    let _ = a.matmul(&a).expect("square");
    let _ = &a * 2.0;

    assert_eq!(a, before);
}
