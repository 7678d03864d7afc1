use pdf_nup::layout::{compute_placements, slot_rects};
use pdf_nup::*;

const EPS: f32 = 0.01;

const A4_W: f32 = 595.28;
const A4_H: f32 = 841.89;
const LETTER_W: f32 = 612.0;
const LETTER_H: f32 = 792.0;

#[test]
fn test_letter_on_a4_side_by_side() {
    let placements = compute_placements(
        ArrangementMode::SideBySide,
        A4_W,
        A4_H,
        LETTER_W,
        LETTER_H,
        false,
    )
    .unwrap();

    assert_eq!(placements.len(), 2);

    // scale = min(297.64/612, 841.89/792)
    let expected_scale = (A4_W / 2.0 / LETTER_W).min(A4_H / LETTER_H);
    assert!((expected_scale - 0.4864).abs() < 0.001);
    for p in &placements {
        assert!((p.scale - expected_scale).abs() < EPS);
        assert!(!p.is_rotated());
    }

    // Offsets symmetric about the sheet's vertical midline
    let scaled_w = LETTER_W * expected_scale;
    let left_center = placements[0].x + scaled_w / 2.0;
    let right_center = placements[1].x + scaled_w / 2.0;
    assert!((left_center + right_center - A4_W).abs() < EPS);
}

#[test]
fn test_contain_never_overflows() {
    let sources = [
        (612.0, 792.0),
        (792.0, 612.0),
        (100.0, 1000.0),
        (1000.0, 100.0),
        (300.0, 300.0),
    ];
    let modes = [
        ArrangementMode::SideBySide,
        ArrangementMode::Stacked,
        ArrangementMode::RotatedTopBottom,
        ArrangementMode::Grid,
    ];

    for mode in modes {
        for (src_w, src_h) in sources {
            for rotate_grid in [false, true] {
                let placements =
                    compute_placements(mode, A4_W, A4_H, src_w, src_h, rotate_grid).unwrap();
                for p in placements {
                    let (drawn_w, drawn_h) = p.drawn_size(src_w, src_h);
                    assert!(
                        drawn_w <= p.slot.width + EPS && drawn_h <= p.slot.height + EPS,
                        "overflow in {:?}: drawn {}x{} in slot {}x{}",
                        mode,
                        drawn_w,
                        drawn_h,
                        p.slot.width,
                        p.slot.height
                    );
                }
            }
        }
    }
}

#[test]
fn test_unrotated_content_is_centered() {
    for mode in [ArrangementMode::SideBySide, ArrangementMode::Stacked] {
        let placements =
            compute_placements(mode, A4_W, A4_H, LETTER_W, LETTER_H, false).unwrap();
        for p in placements {
            let (drawn_w, drawn_h) = p.drawn_size(LETTER_W, LETTER_H);
            assert!((p.x + drawn_w / 2.0 - p.slot.center_x()).abs() < EPS);
            assert!((p.y + drawn_h / 2.0 - p.slot.center_y()).abs() < EPS);
        }
    }
}

#[test]
fn test_grid_slots_tile_the_sheet() {
    let slots = slot_rects(ArrangementMode::Grid, A4_W, A4_H);
    assert_eq!(slots.len(), 4);

    // Equal-area quarters
    for slot in &slots {
        assert!((slot.width - A4_W / 2.0).abs() < EPS);
        assert!((slot.height - A4_H / 2.0).abs() < EPS);
    }

    // No overlap: all four corners distinct
    let mut origins: Vec<(i64, i64)> = slots
        .iter()
        .map(|s| ((s.x * 100.0) as i64, (s.y * 100.0) as i64))
        .collect();
    origins.sort();
    origins.dedup();
    assert_eq!(origins.len(), 4);

    // No gap: slot edges reach the sheet edges
    let max_right = slots.iter().map(|s| s.right()).fold(0.0f32, f32::max);
    let max_top = slots.iter().map(|s| s.top()).fold(0.0f32, f32::max);
    assert!((max_right - A4_W).abs() < EPS);
    assert!((max_top - A4_H).abs() < EPS);
}

#[test]
fn test_rotated_top_bottom_rotates_both() {
    let placements = compute_placements(
        ArrangementMode::RotatedTopBottom,
        A4_W,
        A4_H,
        LETTER_W,
        LETTER_H,
        false,
    )
    .unwrap();

    assert_eq!(placements.len(), 2);
    for p in &placements {
        assert!(p.is_rotated());
        assert!((p.rotation_degrees - 90.0).abs() < EPS);

        // Drawn x range under the quarter-turn convention is [x - w, x]
        let (drawn_w, _) = p.drawn_size(LETTER_W, LETTER_H);
        assert!(p.x - drawn_w >= p.slot.x - EPS);
        assert!(p.x <= p.slot.right() + EPS);
    }
}

#[test]
fn test_grid_rotation_flag_is_uniform() {
    let unrotated =
        compute_placements(ArrangementMode::Grid, A4_W, A4_H, LETTER_W, LETTER_H, false).unwrap();
    assert!(unrotated.iter().all(|p| !p.is_rotated()));

    let rotated =
        compute_placements(ArrangementMode::Grid, A4_W, A4_H, LETTER_W, LETTER_H, true).unwrap();
    assert_eq!(rotated.len(), 4);
    assert!(rotated.iter().all(|p| p.is_rotated()));
}

#[test]
fn test_rotate_flag_ignored_outside_grid() {
    let placements = compute_placements(
        ArrangementMode::SideBySide,
        A4_W,
        A4_H,
        LETTER_W,
        LETTER_H,
        true,
    )
    .unwrap();
    assert!(placements.iter().all(|p| !p.is_rotated()));
}

#[test]
fn test_invalid_geometry_is_rejected() {
    let result = compute_placements(
        ArrangementMode::SideBySide,
        0.0,
        A4_H,
        LETTER_W,
        LETTER_H,
        false,
    );
    assert!(matches!(result, Err(NupError::Config(_))));

    let result =
        compute_placements(ArrangementMode::SideBySide, A4_W, A4_H, 0.0, LETTER_H, false);
    assert!(matches!(result, Err(NupError::InvalidDocument(_))));
}
