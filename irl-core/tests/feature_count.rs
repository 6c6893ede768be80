use anyhow::Result;
use irl_core::{
    dummy::DummyIrl,
    IrlAlgorithm, Trajectory, TrajectorySet,
};
use ndarray::{arr1, Array1};

fn traj(features: Vec<Array1<f64>>) -> Trajectory<usize, usize> {
    let n = features.len();
    Trajectory::new(vec![0; n], vec![0; n], features).unwrap()
}

fn algo(feature_dim: usize, gamma: f64) -> DummyIrl {
    DummyIrl::new(feature_dim, TrajectorySet::new(vec![]), gamma).unwrap()
}

fn assert_close(a: &Array1<f64>, b: &Array1<f64>) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-12, "{} != {}", x, y);
    }
}

#[test]
fn test_worked_example() {
    // Trajectory A: [[1,0],[1,0]], trajectory B: [[0,1]], gamma 0.5.
    // A's discounted sum is [1.5, 0], B's is [0, 1]; averaged: [0.75, 0.5].
    let trajs = vec![
        traj(vec![arr1(&[1.0, 0.0]), arr1(&[1.0, 0.0])]),
        traj(vec![arr1(&[0.0, 1.0])]),
    ];
    let fc = algo(2, 0.5).feature_count(&trajs);
    assert_close(&fc, &arr1(&[0.75, 0.5]));
}

#[test]
fn test_gamma_one_is_plain_average() {
    let trajs = vec![
        traj(vec![arr1(&[1.0, 2.0]), arr1(&[3.0, 4.0]), arr1(&[5.0, 6.0])]),
        traj(vec![arr1(&[0.5, 0.5])]),
        traj(vec![arr1(&[2.0, 0.0]), arr1(&[0.0, 2.0])]),
    ];
    let fc = algo(2, 1.0).feature_count(&trajs);

    let mut expected = Array1::<f64>::zeros(2);
    for t in &trajs {
        for f in t.features() {
            expected += f;
        }
    }
    expected /= trajs.len() as f64;
    assert_close(&fc, &expected);
}

#[test]
fn test_decreasing_gamma_reduces_late_timestep_weight() {
    let trajs = vec![traj(vec![arr1(&[1.0, 1.0]), arr1(&[1.0, 1.0]), arr1(&[1.0, 1.0])])];
    let high = algo(2, 0.9).feature_count(&trajs);
    let low = algo(2, 0.5).feature_count(&trajs);
    for (h, l) in high.iter().zip(low.iter()) {
        assert!(h > l);
    }
}

#[test]
fn test_linearity_over_disjoint_collections() {
    let xs = vec![
        traj(vec![arr1(&[1.0, 0.0]), arr1(&[0.0, 3.0])]),
        traj(vec![arr1(&[2.0, 2.0])]),
    ];
    let ys = vec![traj(vec![arr1(&[0.0, 1.0]), arr1(&[4.0, 0.0]), arr1(&[1.0, 1.0])])];

    let a = algo(2, 0.7);
    let fc_x = a.feature_count(&xs);
    let fc_y = a.feature_count(&ys);

    let mut all = xs.clone();
    all.extend(ys.clone());
    let fc_all = a.feature_count(&all);

    let n_x = xs.len() as f64;
    let n_y = ys.len() as f64;
    let expected = (fc_x * n_x + fc_y * n_y) / (n_x + n_y);
    assert_close(&fc_all, &expected);
}

#[test]
fn test_zero_length_trajectory_contributes_zero() -> Result<()> {
    let trajs = vec![
        traj(vec![arr1(&[1.0, 0.0])]),
        Trajectory::new(vec![], vec![], vec![])?,
    ];
    let fc = algo(2, 0.5).feature_count(&trajs);
    assert_close(&fc, &arr1(&[0.5, 0.0]));
    Ok(())
}

#[test]
fn test_output_dimensionality_follows_env() {
    let trajs = vec![traj(vec![arr1(&[1.0, 2.0, 3.0])])];
    let fc = algo(3, 1.0).feature_count(&trajs);
    assert_eq!(fc.len(), 3);
}
