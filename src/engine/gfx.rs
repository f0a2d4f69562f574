//
// Copyright 2025 Jeff Bush
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::config::WindowConfig;
use crate::error::EngineError;
use crate::text::{FontAtlas, ATLAS_PIXEL_SIZE};
use crate::util::{Color, Rect};
use gl::types::{GLint, GLsizeiptr, GLuint};
use image::ImageReader;
use std::path::Path;

// Position (2), texture coordinate (2), color (4)
const ATTR_ELEMS_PER_VERTEX: usize = 8;
const VERTICES_PER_QUAD: usize = 6;
const CIRCLE_TEXTURE_SIZE: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Texture {
    id: GLuint,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    // Source rectangle covering the whole image.
    pub fn full_rect(&self) -> Rect<f32> {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

// A run of consecutive vertices that share a texture.
struct Batch {
    texture_id: GLuint,
    first: usize,
    count: usize,
}

pub struct RenderContext {
    window: sdl2::video::Window,
    _gl_context: sdl2::video::GLContext, // Hold this so it doesn't get dropped
    vbo: GLuint,
    position_attrib: GLuint,
    texcoord_attrib: GLuint,
    color_attrib: GLuint,
    width: u32,
    height: u32,
    vertices: Vec<f32>,
    batches: Vec<Batch>,
    offset: (f32, f32),
    white_texture: Texture,
    circle_texture: Texture,
    font: Option<LoadedFont>,
}

struct LoadedFont {
    atlas: FontAtlas,
    texture: Texture,
}

const VERTEX_SHADER: &str = r#"
attribute vec2 aPosition;
attribute vec2 aTexcoord;
attribute vec4 aColor;
varying vec2 vTexcoord;
varying vec4 vColor;

void main() {
    gl_Position = vec4(aPosition, 0.0, 1.0);
    vTexcoord = aTexcoord;
    vColor = aColor;
}
"#;

const FRAGMENT_SHADER: &str = r#"
varying vec2 vTexcoord;
varying vec4 vColor;
uniform sampler2D texture0;

void main() {
    gl_FragColor = texture2D(texture0, vTexcoord) * vColor;
}
"#;

fn check_gl_error() -> Result<(), EngineError> {
    let err = unsafe { gl::GetError() };
    if err != gl::NO_ERROR {
        return Err(EngineError::Gl(format!("GL error {:#x}", err)));
    }

    Ok(())
}

// Disk with a one pixel soft edge, used for round shapes like rain drops.
fn circle_pixels(size: u32) -> Vec<u8> {
    let radius = size as f32 / 2.0;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let dist = (dx * dx + dy * dy).sqrt();
            let alpha = (radius - dist).clamp(0.0, 1.0);
            pixels.extend_from_slice(&[255, 255, 255, (alpha * 255.0) as u8]);
        }
    }

    pixels
}

fn upload_texture(width: u32, height: u32, pixels: &[u8], repeat: bool) -> Result<Texture, EngineError> {
    let wrap = if repeat { gl::REPEAT } else { gl::CLAMP_TO_EDGE };
    unsafe {
        let mut id: GLuint = 0;
        gl::GenTextures(1, &mut id);
        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, id);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as GLint,
            width as GLint,
            height as GLint,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_ptr().cast(),
        );

        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
        check_gl_error()?;

        Ok(Texture { id, width, height })
    }
}

impl RenderContext {
    pub fn new(sdl: &sdl2::Sdl, config: &WindowConfig) -> Result<Self, EngineError> {
        let video_subsystem = sdl.video().map_err(EngineError::Sdl)?;

        let (width, height) = if config.fullscreen {
            let mode = video_subsystem.desktop_display_mode(0).map_err(EngineError::Sdl)?;
            (mode.w as u32, mode.h as u32)
        } else {
            (config.width, config.height)
        };

        let mut builder = video_subsystem.window(&config.title, width, height);
        builder.opengl();
        if config.fullscreen {
            builder.fullscreen_desktop();
        } else {
            builder.position_centered();
        }

        let window = builder.build()?;
        let gl_context = window.gl_create_context().map_err(EngineError::Sdl)?;
        gl::load_with(|s| video_subsystem.gl_get_proc_address(s) as *const std::os::raw::c_void);
        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };

        if let Err(msg) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Unable to set swap interval: {}", msg);
        }

        let program = compile_program(VERTEX_SHADER, FRAGMENT_SHADER)?;
        let (position_attrib, texcoord_attrib, color_attrib) = unsafe {
            gl::UseProgram(program);
            (
                gl::GetAttribLocation(program, c"aPosition".as_ptr().cast()) as GLuint,
                gl::GetAttribLocation(program, c"aTexcoord".as_ptr().cast()) as GLuint,
                gl::GetAttribLocation(program, c"aColor".as_ptr().cast()) as GLuint,
            )
        };

        let vbo = unsafe {
            let mut vbo = 0;
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            vbo
        };

        let white_texture = upload_texture(1, 1, &[255, 255, 255, 255], false)?;
        let circle_texture = upload_texture(
            CIRCLE_TEXTURE_SIZE,
            CIRCLE_TEXTURE_SIZE,
            &circle_pixels(CIRCLE_TEXTURE_SIZE),
            false,
        )?;

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);

            // Assign texture unit
            let image_attr = gl::GetUniformLocation(program, c"texture0".as_ptr().cast());
            if image_attr == -1 {
                return Err(EngineError::Gl("texture0 uniform not found".to_string()));
            }
            gl::Uniform1i(image_attr, 0);

            // Enable source alpha blending
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

            let (drawable_w, drawable_h) = window.drawable_size();
            gl::Viewport(0, 0, drawable_w as GLint, drawable_h as GLint);
        }

        check_gl_error()?;

        log::info!("Created {}x{} window", width, height);

        Ok(RenderContext {
            window,
            _gl_context: gl_context,
            vbo,
            position_attrib,
            texcoord_attrib,
            color_attrib,
            width,
            height,
            vertices: Vec::new(),
            batches: Vec::new(),
            offset: (0.0, 0.0),
            white_texture,
            circle_texture,
            font: None,
        })
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    // Repeating textures tile when sampled outside [0, 1], which is how
    // scrolling backgrounds are drawn.
    pub fn load_texture(&mut self, path: &Path, repeat: bool) -> Result<Texture, EngineError> {
        let decoded = ImageReader::open(path)?.decode()?;
        let width = decoded.width();
        let height = decoded.height();
        let rgba = decoded.into_rgba8();
        let texture = upload_texture(width, height, rgba.as_raw(), repeat)?;
        log::debug!("Loaded {} ({}x{})", path.display(), width, height);
        Ok(texture)
    }

    // Everything drawn after this is shifted so (x, y) lands at the top
    // left of the window. (0, 0) draws in screen space.
    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    pub fn draw_texture(
        &mut self,
        texture: &Texture,
        dest: &Rect<f32>,
        src: &Rect<f32>,
        flip_h: bool,
        tint: Color,
    ) {
        let (tex_w, tex_h) = texture.size();
        let mut u0 = src.left / tex_w;
        let mut u1 = src.right() / tex_w;
        let v0 = src.top / tex_h;
        let v1 = src.bottom() / tex_h;
        if flip_h {
            std::mem::swap(&mut u0, &mut u1);
        }

        self.push_quad(texture.id, dest, (u0, v0, u1, v1), tint);
    }

    pub fn fill_rect(&mut self, dest: &Rect<f32>, color: Color) {
        let id = self.white_texture.id;
        self.push_quad(id, dest, (0.0, 0.0, 1.0, 1.0), color);
    }

    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        let id = self.circle_texture.id;
        let dest = Rect::centered(center.0, center.1, radius * 2.0, radius * 2.0);
        self.push_quad(id, &dest, (0.0, 0.0, 1.0, 1.0), color);
    }

    // Replaces any font loaded earlier. Until one loads, text is skipped.
    pub fn load_font(&mut self, path: &Path) -> Result<(), EngineError> {
        let atlas = FontAtlas::from_bytes(std::fs::read(path)?, ATLAS_PIXEL_SIZE)?;
        let (width, height) = atlas.size();
        let texture = upload_texture(width, height, &atlas.rgba_pixels(), false)?;
        log::debug!("Loaded font {} ({}x{} atlas)", path.display(), width, height);
        self.font = Some(LoadedFont { atlas, texture });
        Ok(())
    }

    pub fn text_size(&self, text: &str, char_size: u32) -> (f32, f32) {
        self.font
            .as_ref()
            .map_or((0.0, 0.0), |font| font.atlas.text_size(text, char_size as f32))
    }

    // position is the top left of the line.
    pub fn draw_text(&mut self, text: &str, position: (f32, f32), char_size: u32, color: Color) {
        let Some(font) = self.font.as_ref() else {
            return;
        };

        let texture = font.texture;
        let quads = font.atlas.layout(text, position, char_size as f32);
        for (dest, src) in quads.iter() {
            self.draw_texture(&texture, dest, src, false, color);
        }
    }

    fn push_quad(&mut self, texture_id: GLuint, dest: &Rect<f32>, uv: (f32, f32, f32, f32), color: Color) {
        // Convert from pixel coordinates to OpenGL coordinate space.
        let to_ogl_x = |x: f32| ((x - self.offset.0) / self.width as f32) * 2.0 - 1.0;
        let to_ogl_y = |y: f32| 1.0 - ((y - self.offset.1) / self.height as f32) * 2.0;

        let left = to_ogl_x(dest.left);
        let right = to_ogl_x(dest.right());
        let top = to_ogl_y(dest.top);
        let bottom = to_ogl_y(dest.bottom());
        let (u0, v0, u1, v1) = uv;
        let [r, g, b, a] = color.to_f32();

        // Quads are composed of two abutting triangles, with four
        // vertices:
        // 0      1
        // +------+
        // |    / |
        // |   /  |
        // |  /   |
        // | /    |
        // +------+
        // 2      3
        #[cfg_attr(any(), rustfmt::skip)]
        self.vertices.extend_from_slice(&[
            // Upper left triangle
            left, top, u0, v0, r, g, b, a, // 0
            right, top, u1, v0, r, g, b, a, // 1
            left, bottom, u0, v1, r, g, b, a, // 2
            // Lower right triangle
            right, top, u1, v0, r, g, b, a, // 1
            right, bottom, u1, v1, r, g, b, a, // 3
            left, bottom, u0, v1, r, g, b, a, // 2
        ]);

        match self.batches.last_mut() {
            Some(batch) if batch.texture_id == texture_id => batch.count += VERTICES_PER_QUAD,
            _ => {
                let first = self.vertices.len() / ATTR_ELEMS_PER_VERTEX - VERTICES_PER_QUAD;
                self.batches.push(Batch {
                    texture_id,
                    first,
                    count: VERTICES_PER_QUAD,
                });
            }
        }
    }

    pub fn render(&mut self) {
        let stride = (ATTR_ELEMS_PER_VERTEX * std::mem::size_of::<f32>()) as GLint;
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);

            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.vertices.len() * std::mem::size_of::<f32>()) as GLsizeiptr,
                self.vertices.as_ptr().cast(),
                gl::STREAM_DRAW,
            );

            // Screen coordinate attribute
            gl::VertexAttribPointer(
                self.position_attrib,
                2, // Size (elements)
                gl::FLOAT,
                gl::FALSE,
                stride,
                std::ptr::null(),
            );

            // Texture coordinate attribute
            gl::VertexAttribPointer(
                self.texcoord_attrib,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                std::ptr::null::<f32>().add(2).cast(), // Offset into packed array.
            );

            gl::VertexAttribPointer(
                self.color_attrib,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                std::ptr::null::<f32>().add(4).cast(),
            );

            gl::EnableVertexAttribArray(self.position_attrib);
            gl::EnableVertexAttribArray(self.texcoord_attrib);
            gl::EnableVertexAttribArray(self.color_attrib);

            for batch in self.batches.iter() {
                gl::BindTexture(gl::TEXTURE_2D, batch.texture_id);
                gl::DrawArrays(gl::TRIANGLES, batch.first as GLint, batch.count as GLint);
            }
        }

        if let Err(e) = check_gl_error() {
            log::error!("Render failed: {}", e);
        }

        self.window.gl_swap_window();

        self.vertices.clear();
        self.batches.clear();
    }
}

fn compile_shader(shader_type: GLuint, source: &str) -> Result<GLuint, EngineError> {
    unsafe {
        let shader = gl::CreateShader(shader_type);
        check_gl_error()?;
        let length = source.len() as GLint;
        gl::ShaderSource(shader, 1, &(source.as_bytes().as_ptr().cast()), &length);

        gl::CompileShader(shader);
        let mut status: GLint = 1;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == 0 {
            let mut v: [u8; 1024] = [0; 1024];
            let mut log_length = 0i32;
            gl::GetShaderInfoLog(shader, 1024, &mut log_length, v.as_mut_ptr().cast());
            return Err(EngineError::Gl(format!(
                "Shader compile error {}",
                String::from_utf8_lossy(&v[..log_length as usize])
            )));
        }

        Ok(shader)
    }
}

fn compile_program(vertex_source: &str, fragment_source: &str) -> Result<GLuint, EngineError> {
    let vertex_shader = compile_shader(gl::VERTEX_SHADER, vertex_source)?;
    let fragment_shader = compile_shader(gl::FRAGMENT_SHADER, fragment_source)?;

    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vertex_shader);
        gl::AttachShader(program, fragment_shader);
        gl::LinkProgram(program);

        let mut status: GLint = 1;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status == 0 {
            let mut v: [u8; 1024] = [0; 1024];
            let mut log_length = 0i32;
            gl::GetProgramInfoLog(program, 1024, &mut log_length, v.as_mut_ptr().cast());
            return Err(EngineError::Gl(format!(
                "Error linking shaders {}",
                String::from_utf8_lossy(&v[..log_length as usize])
            )));
        }

        check_gl_error()?;

        Ok(program)
    }
}
