use crate::core::layer::Layer;
use crate::core::rendering::render_api::{RenderAPIBackend, RenderError};
use crate::core::rendering::shader::{ShaderError, ShaderSrc};
use crate::tests::shared_mocks::{MockRenderBackend, RenderCall};
use crate::triangles::*;

#[test]
fn test_hello_triangle_vertex_data() {
    let layout = HelloTriangle::vertex_layout();
    assert_eq!(layout.get_stride(), 12);
    assert_eq!(
        layout.vertex_count(std::mem::size_of_val(&HELLO_TRIANGLE_VERTICES)),
        Ok(3)
    );
    assert!(HELLO_TRIANGLE_VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos;"));
    assert!(HELLO_TRIANGLE_FRAGMENT_SHADER.contains("vec4(1.0f, 0.5f, 0.2f, 1.0f)"));
}

#[test]
fn test_colored_triangle_vertex_data() {
    let layout = HelloTriangleColored::vertex_layout();
    assert_eq!(layout.get_stride(), 24);
    assert_eq!(layout.get_buffer_elements()[1].get_name(), "aColor");
    assert_eq!(layout.get_buffer_elements()[1].get_offset(), 12);
    assert_eq!(
        layout.vertex_count(std::mem::size_of_val(&COLORED_TRIANGLE_VERTICES)),
        Ok(3)
    );

    // One pure red, green and blue vertex
    let colors: Vec<&[f32]> = COLORED_TRIANGLE_VERTICES
        .chunks(6)
        .map(|vertex| &vertex[3..])
        .collect();
    assert_eq!(colors[0], &[1.0_f32, 0.0, 0.0]);
    assert_eq!(colors[1], &[0.0_f32, 1.0, 0.0]);
    assert_eq!(colors[2], &[0.0_f32, 0.0, 1.0]);
}

#[test]
fn test_hello_triangle_lifecycle() {
    let mut render = MockRenderBackend::new();
    let calls = render.call_log();
    let mut layer = HelloTriangle::new();

    layer.on_attach(&mut render).unwrap();
    assert_eq!(render.live_resources(), 3);
    let shader = layer.get_shader().unwrap();
    assert_eq!(render.get_shader_name(shader), Some("hello_triangle"));
    let vertex_array = layer.get_vertex_array().unwrap();
    assert!(render.get_vertex_array_vertex_buffer(vertex_array).is_some());

    layer.update(0.016, &mut render).unwrap();

    layer.on_detach(&mut render);
    assert_eq!(render.live_resources(), 0);
    assert!(!render.shader_exists(shader));
    assert!(layer.get_shader().is_none());

    assert_eq!(
        *calls.borrow(),
        vec![
            RenderCall::CreateShader("hello_triangle".to_owned()),
            RenderCall::CreateVertexBuffer {
                float_count: 9,
                stride: 12
            },
            RenderCall::CreateVertexArray,
            RenderCall::SetVertexArrayVertexBuffer,
            RenderCall::BindShader("hello_triangle".to_owned()),
            RenderCall::DrawArrays { vertex_count: 3 },
            RenderCall::DestroyVertexArray,
            RenderCall::DestroyVertexBuffer,
            RenderCall::DestroyShader("hello_triangle".to_owned()),
        ]
    );
}

#[test]
fn test_colored_triangle_lifecycle() {
    let mut render = MockRenderBackend::new();
    let calls = render.call_log();
    let mut layer = HelloTriangleColored::new();

    layer.on_attach(&mut render).unwrap();
    layer.update(0.016, &mut render).unwrap();
    layer.update(0.016, &mut render).unwrap();
    layer.on_detach(&mut render);

    let calls = calls.borrow();
    assert!(calls.contains(&RenderCall::CreateVertexBuffer {
        float_count: 18,
        stride: 24
    }));
    let draws = calls
        .iter()
        .filter(|call| **call == RenderCall::DrawArrays { vertex_count: 3 })
        .count();
    assert_eq!(draws, 2);
    assert_eq!(render.live_resources(), 0);
}

#[test]
fn test_colored_triangle_from_files() {
    let dir = std::env::temp_dir();
    let vertex_path = dir.join(format!("learn_opengl_{}_colored.vert", std::process::id()));
    let fragment_path = dir.join(format!("learn_opengl_{}_colored.frag", std::process::id()));
    std::fs::write(&vertex_path, COLORED_TRIANGLE_VERTEX_SHADER).unwrap();
    std::fs::write(&fragment_path, COLORED_TRIANGLE_FRAGMENT_SHADER).unwrap();

    let mut render = MockRenderBackend::new();
    let mut layer = HelloTriangleColored::from_files(&vertex_path, &fragment_path);
    let result = layer.on_attach(&mut render);

    std::fs::remove_file(&vertex_path).unwrap();
    std::fs::remove_file(&fragment_path).unwrap();

    result.unwrap();
    assert!(layer.get_shader().is_some());
    layer.on_detach(&mut render);
}

#[test]
fn test_missing_shader_file_fails_attach() {
    let mut render = MockRenderBackend::new();
    let mut layer = HelloTriangleColored::with_shader_sources(
        ShaderSrc::File("/nonexistent/learn_opengl/colored.vert".into()),
        ShaderSrc::from(COLORED_TRIANGLE_FRAGMENT_SHADER),
    );

    let err = layer.on_attach(&mut render).unwrap_err();
    assert!(matches!(err, RenderError::Shader(ShaderError::Io { .. })));
    assert!(layer.get_shader().is_none());
    assert_eq!(render.live_resources(), 0);
}

#[test]
fn test_update_before_attach_draws_nothing() {
    let mut render = MockRenderBackend::new();
    let calls = render.call_log();
    let mut layer = HelloTriangle::new();

    layer.update(0.016, &mut render).unwrap();
    layer.on_detach(&mut render);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_uniform_helpers() {
    let mut render = MockRenderBackend::new();
    let calls = render.call_log();
    let shader = render
        .create_shader(
            "uniforms",
            ShaderSrc::from(HELLO_TRIANGLE_VERTEX_SHADER),
            ShaderSrc::from(
                "#version 330 core\nout vec4 FragColor;\nuniform vec4 ourColor;\nuniform bool useColor;\nvoid main() {}\n",
            ),
        )
        .unwrap();

    render
        .set_shader_uniform_fvec4(shader, "ourColor", &glam::Vec4::new(0.0, 1.0, 0.0, 1.0))
        .unwrap();
    render.set_shader_uniform_bool(shader, "useColor", true).unwrap();
    assert!(calls
        .borrow()
        .contains(&RenderCall::SetUniform("ourColor".to_owned())));

    let err = render
        .set_shader_uniform_f32(shader, "missing", 1.0)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Shader(ShaderError::UniformNotFound { .. })
    ));
    render.destroy_shader(shader);
}
