use sandbox_shader::Stage;

use crate::error::Error;
use crate::gl::{GlContext, GraphicsApi};

/// GL shader-object type for `stage`.
pub fn stage_kind(stage: Stage) -> u32 {
    match stage {
        Stage::Vertex => glow::VERTEX_SHADER,
        Stage::Geometry => glow::GEOMETRY_SHADER,
        Stage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Compiles one stage.
///
/// On failure the info log is logged, the stage object is deleted and the log
/// is returned in [`Error::ShaderCompile`].
pub fn compile_stage<G: GraphicsApi>(
    gl: &GlContext<G>,
    stage: Stage,
    source: &str,
) -> Result<G::Shader, Error> {
    let shader = gl
        .call("create_shader", |api| api.create_shader(stage_kind(stage)))
        .map_err(|message| Error::Allocation {
            object: "shader",
            message,
        })?;

    gl.call("shader_source", |api| api.shader_source(shader, source));
    gl.call("compile_shader", |api| api.compile_shader(shader));

    let compiled = gl.call("get_shader_compile_status", |api| {
        api.get_shader_compile_status(shader)
    });
    log::debug!("{stage} shader compile status: {compiled}");
    if compiled {
        return Ok(shader);
    }

    let log = non_empty(gl.call("get_shader_info_log", |api| api.get_shader_info_log(shader)));
    log::error!("failed to compile {stage} shader:\n{log}");
    gl.call("delete_shader", |api| api.delete_shader(shader));
    Err(Error::ShaderCompile { stage, log })
}

/// Links compiled stages into a program.
///
/// The stages are consumed either way: on success they are detached and
/// deleted (the program no longer needs them), on failure they are deleted
/// together with the program.
pub fn link<G: GraphicsApi>(gl: &GlContext<G>, stages: &[G::Shader]) -> Result<G::Program, Error> {
    let program = match gl.call("create_program", |api| api.create_program()) {
        Ok(program) => program,
        Err(message) => {
            delete_stages(gl, stages);
            return Err(Error::Allocation {
                object: "program",
                message,
            });
        }
    };

    for &shader in stages {
        gl.call("attach_shader", |api| api.attach_shader(program, shader));
    }
    gl.call("link_program", |api| api.link_program(program));

    let linked = gl.call("get_program_link_status", |api| {
        api.get_program_link_status(program)
    });
    log::debug!("program link status: {linked}");

    for &shader in stages {
        gl.call("detach_shader", |api| api.detach_shader(program, shader));
    }
    delete_stages(gl, stages);

    if linked {
        validate(gl, program);
        return Ok(program);
    }

    let log = non_empty(gl.call("get_program_info_log", |api| {
        api.get_program_info_log(program)
    }));
    log::error!("failed to link program:\n{log}");
    gl.call("delete_program", |api| api.delete_program(program));
    Err(Error::ShaderLink { log })
}

// Validation depends on the current GL state, so it is advisory only.
fn validate<G: GraphicsApi>(gl: &GlContext<G>, program: G::Program) {
    gl.call("validate_program", |api| api.validate_program(program));
    let log = gl.call("get_program_info_log", |api| api.get_program_info_log(program));
    if !log.trim().is_empty() {
        log::debug!("program validation log:\n{log}");
    }
}

pub(super) fn delete_stages<G: GraphicsApi>(gl: &GlContext<G>, stages: &[G::Shader]) {
    for &shader in stages {
        gl.call("delete_shader", |api| api.delete_shader(shader));
    }
}

// Some drivers return an empty log for failures.
fn non_empty(log: String) -> String {
    if log.trim().is_empty() {
        "(driver returned no info log)".to_string()
    } else {
        log
    }
}
