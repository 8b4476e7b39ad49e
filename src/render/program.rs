use super::RenderError;
use std::fmt;
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub fn compile_shader(
    gl: &GL,
    stage: ShaderStage,
    source: &str,
) -> Result<web::WebGlShader, RenderError> {
    let shader = gl
        .create_shader(stage.gl_type())
        .ok_or_else(|| RenderError::Js(format!("createShader({}) returned null", stage)))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(RenderError::Compile { stage, log })
}

pub fn link_program(
    gl: &GL,
    vs: &web::WebGlShader,
    fs: &web::WebGlShader,
) -> Result<web::WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or_else(|| RenderError::Js("createProgram returned null".into()))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(program);
    }
    let log = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(RenderError::Link(log))
}

pub fn attrib_location(
    gl: &GL,
    program: &web::WebGlProgram,
    name: &'static str,
) -> Result<u32, RenderError> {
    let loc = gl.get_attrib_location(program, name);
    if loc < 0 {
        return Err(RenderError::MissingAttribute(name));
    }
    Ok(loc as u32)
}

pub fn uniform_location(
    gl: &GL,
    program: &web::WebGlProgram,
    name: &'static str,
) -> Result<web::WebGlUniformLocation, RenderError> {
    gl.get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}
