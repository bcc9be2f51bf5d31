use floor_plan_similarity::{iou, ious, ious_stacked, mean_iou, Background, Error};
use ndarray::{arr2, Array2, Array3};

fn floor_plan() -> Array2<u32> {
    arr2(&[[0, 0, 1], [0, 12, 1], [3, 3, 1]])
}

#[test]
fn test_single_pixel_difference() {
    let q = floor_plan();
    let mut k = floor_plan();
    k[[0, 2]] = 2;

    // 8 non-background pixels, 7 of them agree
    let s = iou(q.view(), k.view(), Background::default()).unwrap();
    assert_eq!(7.0 / 8.0, s.get());
}

#[test]
fn test_identical_images() {
    let q = floor_plan();
    assert_eq!(1.0, iou(q.view(), q.view(), Background::default()).unwrap().get());

    let with_background = Background {
        include: true,
        ..Background::default()
    };
    assert_eq!(1.0, iou(q.view(), q.view(), with_background).unwrap().get());
}

#[test]
fn test_disjoint_images() {
    let q = arr2(&[[0, 0], [12, 12]]);
    let k = arr2(&[[1, 1], [12, 12]]);
    assert_eq!(0.0, iou(q.view(), k.view(), Background::default()).unwrap().get());

    let q = arr2(&[[0, 12], [12, 12]]);
    let k = arr2(&[[12, 12], [12, 4]]);
    assert_eq!(0.0, iou(q.view(), k.view(), Background::default()).unwrap().get());
}

#[test]
fn test_symmetry() {
    let q = floor_plan();
    let k = arr2(&[[0, 2, 1], [12, 12, 1], [3, 0, 5]]);
    for &include in &[false, true] {
        let background = Background {
            include,
            ..Background::default()
        };
        let qk = iou(q.view(), k.view(), background).unwrap();
        let kq = iou(k.view(), q.view(), background).unwrap();
        assert_eq!(qk.get(), kq.get());
    }
}

#[test]
fn test_shape_mismatch() {
    let q = floor_plan();
    let k = Array2::<u32>::zeros((3, 4));
    match iou(q.view(), k.view(), Background::default()) {
        Err(Error::ShapeMismatch { query, key }) => {
            assert_eq!((3, 3), query);
            assert_eq!((3, 4), key);
        }
        other => panic!("expected a shape mismatch, got {:?}", other),
    }
}

#[test]
fn test_batched_order() {
    let q = floor_plan();
    let mut one_off = floor_plan();
    one_off[[0, 2]] = 2;
    let all_off = arr2(&[[5, 5, 5], [5, 12, 5], [5, 5, 5]]);

    let candidates = vec![all_off, q.clone(), one_off];
    let views = candidates.iter().map(|c| c.view());
    let scores = ious(q.view(), views, Background::default()).unwrap();
    assert_eq!(3, scores.len());
    for (score, candidate) in scores.iter().zip(&candidates) {
        let single = iou(q.view(), candidate.view(), Background::default()).unwrap();
        assert_eq!(single.get(), score.get());
    }
    assert_eq!(0.0, scores[0].get());
    assert_eq!(1.0, scores[1].get());

    let stacked = Array3::from_shape_fn((3, 3, 3), |(n, i, j)| candidates[n][[i, j]]);
    let from_stack = ious_stacked(q.view(), stacked.view(), Background::default()).unwrap();
    let from_stack: Vec<f32> = from_stack.iter().map(|s| s.get()).collect();
    let from_list: Vec<f32> = scores.iter().map(|s| s.get()).collect();
    assert_eq!(from_list, from_stack);
}

#[test]
fn test_batched_empty_collection() {
    let q = floor_plan();
    let scores = ious(q.view(), Vec::new(), Background::default()).unwrap();
    assert!(scores.is_empty());
}

#[test]
fn test_mean_iou() {
    let truth = floor_plan();
    let mut pred = floor_plan();
    pred[[2, 0]] = 1;

    let classes: Vec<u32> = (0..18).collect();
    let m = mean_iou(pred.view(), truth.view(), &classes, 1e-10).unwrap();
    // classes 0 and 12 match, 1 gains a pixel (3/4), 3 loses one (1/2)
    let expected = (1.0 + 1.0 + 0.75 + 0.5) / 4.0;
    assert!((m.get() - expected).abs() < 1e-6);
}
