use super::*;

#[test]
fn anchor_percentages_cover_the_box() {
    assert_eq!(Anchor::Center.percent(), (0.5, 0.5));
    assert_eq!(Anchor::TopLeft.percent(), (0.0, 0.0));
    assert_eq!(Anchor::BottomRight.percent(), (1.0, 1.0));
    assert_eq!(Anchor::Right.percent(), (1.0, 0.5));
    assert_eq!(Anchor::Custom { x: 0.25, y: 0.75 }.percent(), (0.25, 0.75));
}

#[test]
fn anchor_classification() {
    assert!(Anchor::TopRight.is_corner());
    assert!(!Anchor::Top.is_corner());
    assert!(Anchor::Left.is_edge());
    assert!(!Anchor::Center.is_edge());
}

#[test]
fn anchor_serde_is_snake_case() {
    let s = serde_json::to_string(&Anchor::BottomLeft).unwrap();
    assert_eq!(s, "\"bottom_left\"");
    let back: Anchor = serde_json::from_str("\"top_right\"").unwrap();
    assert_eq!(back, Anchor::TopRight);
}
