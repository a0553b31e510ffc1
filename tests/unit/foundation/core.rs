use super::*;

#[test]
fn fps_rejects_zero_components() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30, 1).is_ok());
}

#[test]
fn fps_conversions_round_trip() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert_eq!(fps.frame_duration_secs(), 1.0 / 60.0);
    assert_eq!(fps.secs_to_frames_round(8.0), 480);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 0.01);
}

#[test]
fn secs_to_frames_round_uses_nearest() {
    let fps = Fps::new(10, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(7.24), 72);
    assert_eq!(fps.secs_to_frames_round(7.26), 73);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
}

#[test]
fn canvas_center_is_half_extent() {
    let c = Canvas::new(720, 480).unwrap();
    assert_eq!(c.center(), Point::new(360.0, 240.0));
}
