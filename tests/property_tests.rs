//! Property-based tests using proptest.
//!
//! These tests verify algebraic invariants of the primitives and the
//! decomposition algorithms on randomized inputs.

use denso::decomposition::qr_decomposition;
use denso::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-10.0f64..10.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("test data should be valid")
    })
}

// Strategy for generating vectors
fn vector_strategy(len: usize) -> impl Strategy<Value = Vector> {
    proptest::collection::vec(-10.0f64..10.0, len)
        .prop_map(|data| Vector::from_vec(data).expect("test data should be valid"))
}

// Strategy for generating symmetric matrices (A + A^T is always symmetric)
fn symmetric_strategy(n: usize) -> impl Strategy<Value = Matrix> {
    matrix_strategy(n, n).prop_map(|m| m.add(&m.transpose()).expect("same shape"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Vector properties

    #[test]
    fn vector_dot_is_commutative(a in vector_strategy(8), b in vector_strategy(8)) {
        let dot_ab = a.dot(&b).expect("equal lengths");
        let dot_ba = b.dot(&a).expect("equal lengths");
        prop_assert!((dot_ab - dot_ba).abs() < 1e-9);
    }

    #[test]
    fn vector_norm_is_non_negative(v in vector_strategy(8)) {
        prop_assert!(v.norm() >= 0.0);
    }

    #[test]
    fn vector_cauchy_schwarz(a in vector_strategy(6), b in vector_strategy(6)) {
        let dot = a.dot(&b).expect("equal lengths").abs();
        prop_assert!(dot <= a.norm() * b.norm() + 1e-9);
    }

    #[test]
    fn vector_scalar_mul_distributes(
        a in vector_strategy(6),
        b in vector_strategy(6),
        s in -5.0f64..5.0,
    ) {
        let lhs = s * &(&a + &b);
        let rhs = &(s * &a) + &(s * &b);
        for i in 0..lhs.len() {
            prop_assert!((lhs.get(i) - rhs.get(i)).abs() < 1e-9);
        }
    }

    #[test]
    fn vector_basis_is_unit(n in 1usize..8, raw_index in 0usize..8) {
        let index = raw_index % n;
        let e = Vector::basis(n, index).expect("valid size and index");
        prop_assert!((e.norm() - 1.0).abs() < 1e-12);
    }

    // Matrix properties

    #[test]
    fn matrix_identity_is_neutral(a in matrix_strategy(3, 3)) {
        let identity = Matrix::identity(3).expect("positive size");
        let product = a.matmul(&identity).expect("compatible dimensions");
        for i in 0..3 {
            for j in 0..3 {
                prop_assert!((product.get(i, j) - a.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn matrix_self_dot_is_sum_of_squares(a in matrix_strategy(3, 4)) {
        let dot = a.dot(&a).expect("same shape");
        let expected: f64 = a.as_slice().iter().map(|x| x * x).sum();
        prop_assert!((dot - expected).abs() < 1e-9);
        prop_assert!(dot >= 0.0);
    }

    #[test]
    fn matrix_transpose_involution(a in matrix_strategy(3, 5)) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    // QR decomposition properties

    #[test]
    fn qr_product_reconstructs_input(a in matrix_strategy(3, 3)) {
        // A zero trailing column is the one degenerate input the
        // factorization rejects; skip those cases.
        prop_assume!(qr_decomposition(&a).is_ok());
        let (q, r) = qr_decomposition(&a).expect("checked above");

        let qr = q.matmul(&r).expect("compatible dimensions");
        for i in 0..3 {
            for j in 0..3 {
                prop_assert!(
                    (qr.get(i, j) - a.get(i, j)).abs() < 1e-8,
                    "Q*R differs from A at ({}, {})", i, j
                );
            }
        }
    }

    #[test]
    fn qr_q_is_orthogonal(a in matrix_strategy(4, 4)) {
        prop_assume!(qr_decomposition(&a).is_ok());
        let (q, _) = qr_decomposition(&a).expect("checked above");

        let qtq = q.transpose().matmul(&q).expect("compatible dimensions");
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((qtq.get(i, j) - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn qr_r_is_upper_triangular(a in matrix_strategy(3, 3)) {
        prop_assume!(qr_decomposition(&a).is_ok());
        let (_, r) = qr_decomposition(&a).expect("checked above");

        for i in 0..3 {
            for j in 0..i {
                prop_assert!(r.get(i, j).abs() < 1e-8);
            }
        }
    }

    // Jacobi eigendecomposition properties

    #[test]
    fn jacobi_eigenpairs_satisfy_definition(a in symmetric_strategy(3)) {
        let eig = EigenvalueDecomposition::new(&a, DecompositionMethod::Jacobi)
            .expect("square input");

        for col in 0..3 {
            let lambda = eig.eigenvalues().get(col);
            let v = eig.eigenvectors().column(col).expect("column within bounds");
            let tolerance = 1e-6 * (1.0 + lambda.abs());

            for i in 0..3 {
                let mut av = 0.0;
                for j in 0..3 {
                    av += a.get(i, j) * v.get(j);
                }
                prop_assert!(
                    (av - lambda * v.get(i)).abs() < tolerance,
                    "A*v != lambda*v at row {} for column {}", i, col
                );
            }
        }
    }

    #[test]
    fn jacobi_eigenvalue_sum_equals_trace(a in symmetric_strategy(4)) {
        let eig = EigenvalueDecomposition::new(&a, DecompositionMethod::Jacobi)
            .expect("square input");

        let trace: f64 = (0..4).map(|i| a.get(i, i)).sum();
        let sum: f64 = (0..4).map(|i| eig.eigenvalues().get(i)).sum();
        prop_assert!((trace - sum).abs() < 1e-6 * (1.0 + trace.abs()));
    }

    // PCA properties

    #[test]
    fn pca_output_shape(data in matrix_strategy(5, 3), k in 1usize..4) {
        let mut pca = PCA::new(k).expect("positive component count");
        prop_assume!(pca.fit(&data).is_ok());
        let transformed = pca.transform(&data).expect("fitted");
        prop_assert_eq!(transformed.shape(), (5, k));
    }
}
