// =========================================================================
// PCA contract: properties that must hold for any input, independent of
// the data's particular shape or scale.
//
// References:
//   - Hotelling (1933) "Analysis of a complex of statistical variables"
// =========================================================================

use super::*;

fn sample_data() -> Matrix {
    Matrix::from_vec(
        5,
        4,
        vec![
            1.0, 2.1, 3.0, 4.2, //
            2.0, 2.9, 4.3, 5.0, //
            3.1, 4.0, 5.0, 6.3, //
            4.0, 5.2, 6.1, 7.0, //
            5.2, 6.0, 7.0, 8.1, //
        ],
    )
    .expect("data length matches 5*4")
}

/// Output keeps the sample count and has exactly n_components columns.
#[test]
fn contract_dimensionality_reduction() {
    let data = sample_data();

    for n_components in [1, 2, 3] {
        let mut pca = PCA::new(n_components).expect("positive component count");
        pca.fit(&data).expect("fit succeeds");
        let transformed = pca.transform(&data).expect("transform succeeds");

        let (n_samples, n_cols) = transformed.shape();
        assert_eq!(n_samples, 5, "sample count changed");
        assert_eq!(
            n_cols, n_components,
            "output has {n_cols} cols, expected {n_components}"
        );
    }
}

/// Explained variance ratios are bounded by [0, 1] and sum to at most 1.
#[test]
fn contract_explained_variance_ratio_bounded() {
    let data = sample_data();

    let mut pca = PCA::new(4).expect("positive component count");
    pca.fit(&data).expect("fit succeeds");

    let ratios = pca.explained_variance_ratio().expect("fitted");
    let sum: f64 = ratios.iter().sum();

    for (i, &r) in ratios.iter().enumerate() {
        assert!(r >= -1e-6, "ratio[{i}] = {r} < 0");
        assert!(r <= 1.0 + 1e-6, "ratio[{i}] = {r} > 1");
    }
    assert!(sum <= 1.0 + 1e-4, "sum(ratios) = {sum} > 1");
}

/// Components are ordered by descending explained variance magnitude.
#[test]
fn contract_variance_ordering() {
    let data = sample_data();

    let mut pca = PCA::new(3).expect("positive component count");
    pca.fit(&data).expect("fit succeeds");

    let variances = pca.explained_variance().expect("fitted");
    for i in 1..variances.len() {
        assert!(
            variances[i].abs() <= variances[i - 1].abs() + 1e-9,
            "variance[{i}]={} out of order with variance[{}]={}",
            variances[i],
            i - 1,
            variances[i - 1]
        );
    }
}

/// Fitting the same data twice produces the same transform.
#[test]
fn contract_deterministic() {
    let data = sample_data();

    let mut first = PCA::new(2).expect("positive component count");
    first.fit(&data).expect("fit succeeds");
    let t1 = first.transform(&data).expect("transform succeeds");

    let mut second = PCA::new(2).expect("positive component count");
    second.fit(&data).expect("fit succeeds");
    let t2 = second.transform(&data).expect("transform succeeds");

    let (rows, cols) = t1.shape();
    for i in 0..rows {
        for j in 0..cols {
            assert!(
                (t1.get(i, j) - t2.get(i, j)).abs() < 1e-12,
                "transform differs at [{i},{j}]"
            );
        }
    }
}
