use crate::core::{BackingSize, HEART_FRAG, QUAD_VERT};
use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

mod program;
use program::{attrib_location, compile_shader, link_program, uniform_location, ShaderStage};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to initialize WebGL")]
    NoContext,
    #[error("{stage} shader compile failed with: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("program failed to link: {0}")]
    Link(String),
    #[error("cannot find attribute {0}")]
    MissingAttribute(&'static str),
    #[error("cannot find uniform {0}")]
    MissingUniform(&'static str),
    #[error("WebGL call failed: {0}")]
    Js(String),
}

/// Full-screen triangle strip: top-left, bottom-left, top-right, bottom-right.
const QUAD_STRIP: [[f32; 2]; 4] = [[-1.0, 1.0], [-1.0, -1.0], [1.0, 1.0], [1.0, -1.0]];

/// Draws the two heart glow curves over the whole canvas.
pub struct HeartRenderer {
    gl: GL,
    _program: web::WebGlProgram,
    _quad: web::WebGlBuffer,
    time_loc: web::WebGlUniformLocation,
    width_loc: web::WebGlUniformLocation,
    height_loc: web::WebGlUniformLocation,
}

impl HeartRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, RenderError> {
        let gl: GL = canvas
            .get_context("webgl")
            .map_err(|e| RenderError::Js(format!("{:?}", e)))?
            .ok_or(RenderError::NoContext)?
            .dyn_into()
            .map_err(|_| RenderError::NoContext)?;

        let vs = compile_shader(&gl, ShaderStage::Vertex, QUAD_VERT)?;
        let fs = compile_shader(&gl, ShaderStage::Fragment, HEART_FRAG)?;
        let program = link_program(&gl, &vs, &fs)?;
        gl.use_program(Some(&program));

        let quad = gl
            .create_buffer()
            .ok_or_else(|| RenderError::Js("createBuffer returned null".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_STRIP),
            GL::STATIC_DRAW,
        );

        let position = attrib_location(&gl, &program, "position")?;
        gl.enable_vertex_attrib_array(position);
        // vec2 of f32, tightly packed
        gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 2 * 4, 0);

        let time_loc = uniform_location(&gl, &program, "time")?;
        let width_loc = uniform_location(&gl, &program, "width")?;
        let height_loc = uniform_location(&gl, &program, "height")?;

        let renderer = Self {
            gl,
            _program: program,
            _quad: quad,
            time_loc,
            width_loc,
            height_loc,
        };
        renderer.resize(BackingSize {
            width: canvas.width(),
            height: canvas.height(),
        });
        log::info!(
            "[render] heart shader ready at {}x{}",
            canvas.width(),
            canvas.height()
        );
        Ok(renderer)
    }

    /// Match viewport and resolution uniforms to the canvas backing size.
    pub fn resize(&self, size: BackingSize) {
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        self.gl.uniform1f(Some(&self.width_loc), size.width as f32);
        self.gl.uniform1f(Some(&self.height_loc), size.height as f32);
    }

    pub fn draw(&self, time: f32) {
        self.gl.uniform1f(Some(&self.time_loc), time);
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, QUAD_STRIP.len() as i32);
    }
}
