// =========================================================================
// Vector contract: algebraic identities the type must uphold regardless
// of the data it carries.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;

/// dot(u, v) = dot(v, u)
#[test]
fn contract_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("non-empty data");
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]).expect("non-empty data");

    let uv = u.dot(&v).expect("equal lengths");
    let vu = v.dot(&u).expect("equal lengths");

    assert!((uv - vu).abs() < 1e-12, "dot(u,v)={uv} != dot(v,u)={vu}");
}

/// norm(v) >= 0, and norm([-3, 4]) = 5
#[test]
fn contract_norm_non_negative() {
    let v = Vector::from_slice(&[-3.0, 4.0]).expect("non-empty data");
    let n = v.norm();

    assert!(n >= 0.0, "norm={n}, expected >= 0");
    assert!((n - 5.0).abs() < 1e-12, "norm of [-3,4]={n}, expected 5");
}

/// |dot(u, v)| <= norm(u) * norm(v)
#[test]
fn contract_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]).expect("non-empty data");
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]).expect("non-empty data");

    let dot = u.dot(&v).expect("equal lengths").abs();
    let bound = u.norm() * v.norm();

    assert!(dot <= bound + 1e-12, "|dot|={dot} > norm(u)*norm(v)={bound}");
}

/// mean(v) = sum(v) / len(v)
#[test]
fn contract_mean_equals_sum_over_len() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]).expect("non-empty data");

    let mean = v.mean();
    let expected = v.sum() / v.len() as f64;

    assert!((mean - expected).abs() < 1e-12);
    assert!((mean - 6.0).abs() < 1e-12);
}

/// norm(basis(n, i)) = 1 for every valid (n, i)
#[test]
fn contract_basis_vectors_are_unit() {
    for n in 1..=6 {
        for i in 0..n {
            let e = Vector::basis(n, i).expect("valid size and index");
            assert!(
                (e.norm() - 1.0).abs() < 1e-12,
                "norm(basis({n}, {i})) != 1"
            );
        }
    }
}

/// outer(u, v)[i][j] = u[i] * v[j] and dot(u, v) = trace-compatible sum
#[test]
fn contract_outer_product_entries() {
    let u = Vector::from_slice(&[1.0, -2.0, 0.5]).expect("non-empty data");
    let v = Vector::from_slice(&[3.0, 4.0]).expect("non-empty data");

    let m = u.outer_product(&v);
    assert_eq!(m.shape(), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            assert!((m.get(i, j) - u.get(i) * v.get(j)).abs() < 1e-12);
        }
    }
}
