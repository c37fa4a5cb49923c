use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinemaError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        KinemaError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        KinemaError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(KinemaError::scene("x").to_string().contains("scene error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinemaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
