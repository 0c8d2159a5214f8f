pub(crate) use super::*;

#[test]
fn test_new_zero_components_error() {
    let err = PCA::new(0).unwrap_err();
    assert!(matches!(err, DensoError::InvalidHyperparameter { .. }));
}

#[test]
fn test_fit_more_components_than_columns_error() {
    let data = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("data length matches 2*2");
    let mut pca = PCA::new(3).expect("positive component count");
    assert!(pca.fit(&data).is_err());
}

#[test]
fn test_fit_single_row_produces_nan_projection() {
    // With one sample the variance scale divides by zero; fit completes
    // and the projection is NaN instead of an error.
    let data = Matrix::from_vec(1, 2, vec![1.0, 2.0]).expect("data length matches 1*2");
    let mut pca = PCA::new(1).expect("positive component count");
    pca.fit(&data).expect("fit completes");

    let projected = pca.transform(&data).expect("fitted");
    assert!(projected.get(0, 0).is_nan());
}

#[test]
fn test_transform_before_fit_error() {
    let data = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("data length matches 2*2");
    let pca = PCA::new(1).expect("positive component count");
    let err = pca.transform(&data).unwrap_err();
    assert!(matches!(err, DensoError::NotFitted { .. }));
}

#[test]
fn test_perfectly_correlated_data_single_component() {
    // Rows (x, 2x): all variance lies along one axis.
    let data = Matrix::from_vec(3, 2, vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0])
        .expect("data length matches 3*2");

    let mut pca = PCA::new(1).expect("positive component count");
    pca.fit(&data).expect("fit succeeds");

    let ratio = pca.explained_variance_ratio().expect("fitted");
    assert!(
        ratio[0] > 0.999,
        "single component should explain ~100% of variance, got {}",
        ratio[0]
    );

    // Projections are proportional to x (up to the eigenvector sign).
    let projected = pca.transform(&data).expect("fitted and shape matches");
    assert_eq!(projected.shape(), (3, 1));
    let first = projected.get(0, 0);
    assert!(first.abs() > 1e-6);
    assert!((projected.get(1, 0) - 2.0 * first).abs() < 1e-6);
    assert!((projected.get(2, 0) - 3.0 * first).abs() < 1e-6);
}

#[test]
fn test_fit_transform_shape() {
    let data = Matrix::from_vec(
        4,
        3,
        vec![
            1.0, 2.0, 3.5, 4.0, 5.5, 6.0, 7.0, 8.0, 9.5, 10.0, 11.5, 12.0,
        ],
    )
    .expect("data length matches 4*3");

    let mut pca = PCA::new(2).expect("positive component count");
    let transformed = pca.fit_transform(&data).expect("fit_transform succeeds");
    assert_eq!(transformed.shape(), (4, 2));
    assert_eq!(
        pca.components().expect("fitted").shape(),
        (3, 2)
    );
}

#[test]
fn test_transform_wrong_column_count_error() {
    let train = Matrix::from_vec(3, 3, vec![1.0, 0.0, 2.0, 0.5, 1.0, 0.0, 2.0, 1.5, 1.0])
        .expect("data length matches 3*3");
    let mut pca = PCA::new(2).expect("positive component count");
    pca.fit(&train).expect("fit succeeds");

    let narrow = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
        .expect("data length matches 2*2");
    assert!(pca.transform(&narrow).is_err());
}

#[test]
fn test_fit_does_not_mutate_input() {
    let data = Matrix::from_vec(3, 2, vec![1.0, 0.5, 2.0, 1.5, 4.0, 2.5])
        .expect("data length matches 3*2");
    let before = data.clone();

    let mut pca = PCA::new(1).expect("positive component count");
    pca.fit(&data).expect("fit succeeds");
    let _ = pca.transform(&data).expect("fitted");

    assert_eq!(data, before);
}

#[test]
fn test_accessors_none_before_fit() {
    let pca = PCA::new(2).expect("positive component count");
    assert!(pca.components().is_none());
    assert!(pca.explained_variance().is_none());
    assert!(pca.explained_variance_ratio().is_none());
    assert_eq!(pca.n_components(), 2);
}
