use line_clip::clip_liang_barsky::clip_liang_barsky;
use line_clip::clip_sutherland_cohen::clip_sutherland_cohen;
use line_clip::{Algorithm, ClipConfig, ClipScene, ClipWindow, Segment};

fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
    Segment::from_coords(x1, y1, x2, y2)
}

fn clip_all(s: Segment, window: &ClipWindow) -> Vec<(Algorithm, Vec<Segment>)> {
    let cfg = ClipConfig::default();
    Algorithm::ALL
        .iter()
        .map(|&a| (a, a.clip(&s, window, &cfg).unwrap()))
        .collect()
}

fn window_50() -> ClipWindow {
    ClipWindow::new(-50, -50, 50, 50).unwrap()
}

/// Crossing and diagonal segments that do not graze a corner.
fn crossing_segments() -> Vec<Segment> {
    vec![
        seg(-100, 0, 100, 0),
        seg(-100, -100, 100, 100),
        seg(-80, 20, 90, -35),
        seg(-70, -90, 30, 80),
        seg(0, 0, 200, 37),
        seg(13, -77, 13, 77),
        seg(-200, -30, 40, -10),
        seg(-90, 45, 90, -45),
        seg(-33, -99, 66, 101),
        seg(10, 10, -20, 30),
        seg(-130, -20, 130, -20),
    ]
}

fn assert_within_one(a: &Segment, b: &Segment) {
    let (a1, a2, a3, a4) = a.coords();
    let (b1, b2, b3, b4) = b.coords();
    for (p, q) in [(a1, b1), (a2, b2), (a3, b3), (a4, b4)] {
        assert!((p - q).abs() <= 1, "{a} vs {b}");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_a_horizontal_through_window() {
    for (a, out) in clip_all(seg(-100, 0, 100, 0), &window_50()) {
        assert_eq!(out, vec![seg(-50, 0, 50, 0)], "{a}");
    }
}

#[test]
fn test_scenario_b_outside_corner() {
    for (a, out) in clip_all(seg(60, 60, 100, 100), &window_50()) {
        assert!(out.is_empty(), "{a}");
    }
}

#[test]
fn test_scenario_c_diagonal() {
    for (a, out) in clip_all(seg(-100, -100, 100, 100), &window_50()) {
        assert_eq!(out, vec![seg(-50, -50, 50, 50)], "{a}");
    }
}

#[test]
fn test_scenario_d_vertical_crossing_top_and_bottom() {
    let w = ClipWindow::new(0, 0, 10, 10).unwrap();
    for (a, out) in clip_all(seg(5, -5, 5, 15), &w) {
        assert_eq!(out, vec![seg(5, 0, 5, 10)], "{a}");
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_containment_identity() {
    let w = window_50();
    for s in [
        seg(-49, -49, 49, 49),
        seg(0, 0, 0, 0),
        seg(10, -30, -20, 40),
        seg(-49, 0, 49, 1),
    ] {
        for (a, out) in clip_all(s, &w) {
            assert_eq!(out, vec![s], "{a}");
        }
    }
}

#[test]
fn test_external_rejection_terminates() {
    let w = window_50();
    let cfg = ClipConfig::default().with_max_subdivision_depth(40);
    for s in [
        seg(-100, -80, -60, 80),
        seg(60, -1000, 70, 1000),
        seg(-1000, -51, 1000, -60),
        seg(-100, 51, 100, 1000),
        seg(i32::MIN, i32::MAX, i32::MAX, i32::MAX),
    ] {
        for a in Algorithm::ALL {
            assert_eq!(a.clip(&s, &w, &cfg), Ok(Vec::new()), "{a} {s}");
        }
    }
}

#[test]
fn test_idempotence() {
    let w = window_50();
    let cfg = ClipConfig::default();
    for s in crossing_segments() {
        for a in Algorithm::ALL {
            for piece in a.clip(&s, &w, &cfg).unwrap() {
                assert_eq!(a.clip(&piece, &w, &cfg).unwrap(), vec![piece], "{a} {s}");
            }
        }
    }
}

#[test]
fn test_cross_algorithm_agreement() {
    let w = window_50();
    let cfg = ClipConfig::default();
    // Steep segments crossing a corner region just outside the window.
    let steep = [seg(-49, -25, -53, 130), seg(-43, 100, -55, -120)];
    for s in crossing_segments().into_iter().chain(steep) {
        let sc = Algorithm::SutherlandCohen.clip(&s, &w, &cfg).unwrap();
        let lb = Algorithm::LiangBarsky.clip(&s, &w, &cfg).unwrap();
        assert_eq!(sc.len(), lb.len(), "{s}");
        for (a, b) in sc.iter().zip(lb.iter()) {
            assert_within_one(a, b);
        }
    }
    for s in [seg(60, 60, 100, 100), seg(-120, 10, -10, 120)] {
        assert!(Algorithm::SutherlandCohen.clip(&s, &w, &cfg).unwrap().is_empty());
        assert!(Algorithm::LiangBarsky.clip(&s, &w, &cfg).unwrap().is_empty());
    }
}

#[test]
fn test_cross_algorithm_agreement_grid() {
    let w = window_50();
    let coords: Vec<i32> = (-121..=121).step_by(11).collect();
    for &x1 in &coords {
        for &y1 in &coords {
            for &x2 in &coords {
                for &y2 in &coords {
                    let s = seg(x1, y1, x2, y2);
                    let sc = clip_sutherland_cohen(&s, &w, 8).unwrap();
                    let lb = clip_liang_barsky(&s, &w);
                    match (sc, lb) {
                        (Some(a), Some(b)) => assert_within_one(&a, &b),
                        (None, None) => {}
                        (a, b) => panic!("{s}: {a:?} vs {b:?}"),
                    }
                }
            }
        }
    }
}

#[test]
fn test_midpoint_close_to_exact() {
    let w = window_50();
    let cfg = ClipConfig::default();
    for s in crossing_segments() {
        let lb = Algorithm::LiangBarsky.clip(&s, &w, &cfg).unwrap();
        let mid = Algorithm::Midpoint.clip(&s, &w, &cfg).unwrap();
        assert_eq!(mid.len(), 1, "{s}");
        assert_within_one(&mid[0], &lb[0]);
    }
}

#[test]
fn test_scene_render_pass_for_every_algorithm() {
    let mut scene = ClipScene::new(window_50(), ClipConfig::default());
    scene.add_line(-100, 0, 100, 0);
    scene.add_line(60, 60, 100, 100);
    scene.add_line(-100, -100, 100, 100);
    for index in 0..3 {
        scene.set_algorithm_index(index).unwrap();
        assert_eq!(
            scene.accepted_segments(),
            vec![seg(-50, 0, 50, 0), seg(-50, -50, 50, 50)],
            "{}",
            scene.algorithm()
        );
    }
}
