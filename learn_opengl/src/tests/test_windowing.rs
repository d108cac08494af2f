use crate::core::windowing::*;

#[test]
fn test_default_window() {
    let builder = WindowBuilder::default();
    assert_eq!(builder.width, 800);
    assert_eq!(builder.height, 600);
    assert_eq!(builder.title, "LearnOpenGL");
    assert_eq!(builder.gl_version, (3, 3));
    assert!(builder.vsync);
    assert!(builder.resizable);
}

#[test]
fn test_builder_setters() {
    let builder = WindowBuilder::new()
        .with_width(1280)
        .with_height(720)
        .with_title("Triangle")
        .with_gl_version(4, 1)
        .with_vsync(false)
        .with_resizable(false);

    assert_eq!(builder.width, 1280);
    assert_eq!(builder.height, 720);
    assert_eq!(builder.title, "Triangle");
    assert_eq!(builder.gl_version, (4, 1));
    assert!(!builder.vsync);
    assert!(!builder.resizable);
}

#[test]
fn test_zero_sized_error_message() {
    let err = WindowError::ZeroSized {
        width: 0,
        height: 600,
    };
    assert_eq!(err.to_string(), "Window size must be non-zero, got 0x600");
}
