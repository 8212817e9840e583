//! Windowed presenter: uploads the engine's frame as a texture and blits it
//! over a dark clear color. Everything here is demo plumbing; the engine
//! itself never touches the GPU.

use std::sync::Arc;
use std::time::Duration;

use wgpu::util::DeviceExt;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::engine::FieldEngine;
use crate::error::{EngineError, PresentError};
use crate::render::Frame;

const WINDOW_TITLE: &str = "driftfield";

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

/// Adapter acquisition can fail transiently right after launch on some
/// driver stacks; retry a few times before going into degraded mode.
const ADAPTER_RETRIES: u32 = 5;
const ADAPTER_RETRY_BASE: Duration = Duration::from_millis(100);

/// Pixels of virtual page scroll per wheel line.
const SCROLL_LINE_HEIGHT: f32 = 40.0;

/// Print an FPS line every this many frames.
const FPS_LOG_INTERVAL: u64 = 120;

const BLIT_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 0.0, 1.0);
    out.uv = in.uv;
    return out;
}

@group(0) @binding(0) var field_texture: texture_2d<f32>;
@group(0) @binding(1) var field_sampler: sampler;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(field_texture, field_sampler, in.uv);
}
"#;

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct BlitVertex {
    position: [f32; 2],
    uv: [f32; 2],
}

impl BlitVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BlitVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// One oversized triangle; the viewport clips it to a quad and the
/// interpolated uv covers [0, 1] across the visible area, v flipped so the
/// frame's top row lands at the top of the window.
const BLIT_VERTICES: [BlitVertex; 3] = [
    BlitVertex {
        position: [-1.0, -1.0],
        uv: [0.0, 1.0],
    },
    BlitVertex {
        position: [3.0, -1.0],
        uv: [2.0, 1.0],
    },
    BlitVertex {
        position: [-1.0, 3.0],
        uv: [0.0, -1.0],
    },
];

/// Surface, device, and the blit pipeline that presents engine frames.
pub struct Display {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    bind_group_layout: wgpu::BindGroupLayout,
    texture: wgpu::Texture,
    texture_size: (u32, u32),
    bind_group: wgpu::BindGroup,
}

impl Display {
    pub async fn new(window: Arc<Window>) -> Result<Self, PresentError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;
        let adapter = request_adapter_with_retry(&instance, &surface).await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(BLIT_SHADER.into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blit Vertex Buffer"),
            contents: bytemuck::cast_slice(&BLIT_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Field Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Blit Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Blit Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[BlitVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let texture = create_field_texture(&device, size.width, size.height);
        let bind_group = create_blit_bind_group(&device, &bind_group_layout, &texture, &sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            sampler,
            bind_group_layout,
            texture,
            texture_size: (size.width.max(1), size.height.max(1)),
            bind_group,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size, e.g. after a lost frame.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Copy the frame's pixels into the blit texture, recreating it when the
    /// frame size changed.
    pub fn upload(&mut self, frame: &Frame) {
        if frame.width() == 0 || frame.height() == 0 {
            return;
        }
        if (frame.width(), frame.height()) != self.texture_size {
            self.texture = create_field_texture(&self.device, frame.width(), frame.height());
            self.bind_group = create_blit_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.texture,
                &self.sampler,
            );
            self.texture_size = (frame.width(), frame.height());
        }

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            frame.data(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * frame.width()),
                rows_per_image: Some(frame.height()),
            },
            wgpu::Extent3d {
                width: frame.width(),
                height: frame.height(),
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Blit Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..3, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

async fn request_adapter_with_retry(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> Result<wgpu::Adapter, PresentError> {
    for attempt in 1..=ADAPTER_RETRIES {
        match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => return Ok(adapter),
            Err(err) => {
                if attempt < ADAPTER_RETRIES {
                    let backoff = ADAPTER_RETRY_BASE * attempt;
                    eprintln!(
                        "Adapter request failed (attempt {}/{}): {}; retrying in {:?}",
                        attempt, ADAPTER_RETRIES, err, backoff
                    );
                    std::thread::sleep(backoff);
                }
            }
        }
    }
    Err(PresentError::NoAdapter)
}

fn create_field_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Field Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn create_blit_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Blit Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

struct App {
    engine: FieldEngine,
    window: Option<Arc<Window>>,
    display: Option<Display>,
    /// Virtual page offset accumulated from wheel events.
    scroll_offset: f32,
}

impl App {
    fn new(engine: FieldEngine) -> Self {
        Self {
            engine,
            window: None,
            display: None,
            scroll_offset: 0.0,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.engine.viewport_width(),
                self.engine.viewport_height(),
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                eprintln!("Failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        // The actual surface size can differ from the requested one
        // (DPI scaling, tiling window managers).
        let size = window.inner_size();
        if size.width > 0
            && size.height > 0
            && (size.width, size.height)
                != (self.engine.viewport_width(), self.engine.viewport_height())
        {
            self.engine.resize(size.width, size.height);
        }

        match pollster::block_on(Display::new(window)) {
            Ok(display) => self.display = Some(display),
            Err(err) => {
                eprintln!("Presenter unavailable, continuing without visuals: {}", err);
            }
        }

        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(display) = &mut self.display {
                    display.resize(physical_size);
                }
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.engine.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        repeat: false,
                        logical_key,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Space) => {
                    self.engine.toggle_pause();
                    self.request_redraw();
                }
                Key::Named(NamedKey::Escape) => event_loop.exit(),
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.engine.pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.engine.pointer_left();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                // Wheel up scrolls the virtual page toward its top.
                self.scroll_offset = (self.scroll_offset - dy).max(0.0);
                self.engine.scroll_to(self.scroll_offset);
            }
            WindowEvent::RedrawRequested => {
                self.engine.advance();

                if let Some(display) = &mut self.display {
                    let frame = self.engine.render();
                    display.upload(frame);
                    match display.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => display.reconfigure(),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(err) => eprintln!("Render error: {:?}", err),
                    }
                }

                let frames = self.engine.frame_count();
                if frames > 0 && frames % FPS_LOG_INTERVAL == 0 {
                    println!(
                        "{} particles | {:.1} fps",
                        self.engine.field().len(),
                        self.engine.fps()
                    );
                }

                if self.engine.is_animating() && self.display.is_some() {
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_animating() && self.display.is_some() {
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

/// Open a window for `engine` and run it until closed.
pub fn run(engine: FieldEngine) -> Result<(), EngineError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(engine);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_shader_is_valid_wgsl() {
        let module = naga::front::wgsl::parse_str(BLIT_SHADER).expect("blit shader should parse");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        );
        validator
            .validate(&module)
            .expect("blit shader should validate");
    }

    #[test]
    fn test_blit_vertices_cover_the_viewport() {
        assert_eq!(std::mem::size_of::<BlitVertex>(), 16);
        assert_eq!(BLIT_VERTICES.len(), 3);

        // The triangle must reach past every clip-space corner.
        let xs: Vec<f32> = BLIT_VERTICES.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = BLIT_VERTICES.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().any(|&x| x <= -1.0) && xs.iter().any(|&x| x >= 1.0));
        assert!(ys.iter().any(|&y| y <= -1.0) && ys.iter().any(|&y| y >= 1.0));
    }
}
