/// Main application entry point
/// Handles window creation, keyboard input and the fixed-tick render loop
use clap::Parser;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::error::Error;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use voxel_painter::*;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

#[derive(Parser)]
#[command(name = "voxel_painter")]
#[command(about = "Painter's-algorithm voxel renderer", long_about = None)]
struct Cli {
    /// TOML scene file; the built-in starter scene is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Accumulate camera rotation instead of resetting it on every key press
    #[arg(long)]
    incremental_rotation: bool,
    /// Divide by depth relative to the camera instead of absolute vertex z
    #[arg(long)]
    camera_relative_projection: bool,
}

/// Page colour the translucent canvas is composited over
const BACKDROP: Rgba = Rgba::WHITE;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let scene_config = match &cli.scene {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::starter(),
    };
    let scene = scene_config.build_scene()?;

    let rotation_mode = if cli.incremental_rotation {
        RotationMode::Incremental
    } else {
        RotationMode::Compatibility
    };
    let mut camera = scene_config.camera.build(rotation_mode);

    let renderer_config = RendererConfig {
        projection: if cli.camera_relative_projection {
            ProjectionMode::CameraRelative
        } else {
            ProjectionMode::Compatibility
        },
        ..Default::default()
    };
    let (width, height) = (renderer_config.width, renderer_config.height);
    let mut renderer = FrameRenderer::new(renderer_config);
    let mut framebuffer = Framebuffer::new(width, height);
    let mut composited = vec![0u32; width * height];

    println!("=== Voxel Painter ===");
    println!("Controls:");
    println!("  W/S - Move along z");
    println!("  A/D - Move along x");
    println!("  Space/Shift - Up/Down");
    println!("  E/Q - Rotate about z");
    println!("  C/V - Rotate about x");
    println!("  ESC - Exit");
    println!();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Voxel Painter")
            .with_inner_size(PhysicalSize::new(width as u32, height as u32))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let context = softbuffer::Context::new(window.clone())?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())?;

    let mut next_tick = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::NewEvents(StartCause::Init | StartCause::ResumeTimeReached { .. }) => {
            window.request_redraw();
            next_tick += TICK_INTERVAL;
            // Ticks that fell behind are dropped rather than queued
            let now = Instant::now();
            if next_tick < now {
                next_tick = now + TICK_INTERVAL;
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let key = match &event.logical_key {
                    Key::Named(NamedKey::Escape) => {
                        elwt.exit();
                        return;
                    }
                    Key::Named(NamedKey::Shift) => "Shift",
                    Key::Named(NamedKey::Space) => " ",
                    Key::Character(c) => c.as_str(),
                    _ => return,
                };
                if let Some(command) = command_for_key(key) {
                    command.apply(&mut camera);
                    log::debug!(
                        "camera at {} rotation {}",
                        camera.position,
                        camera.rotation
                    );
                }
            }
            WindowEvent::RedrawRequested => {
                match renderer.render(&scene, &camera, &mut framebuffer) {
                    Ok(stats) => log::trace!("{:?}", stats),
                    Err(err) => {
                        log::error!("frame skipped: {err}");
                        return;
                    }
                }

                if let Err(err) = present(
                    &mut surface,
                    &window.inner_size(),
                    &framebuffer,
                    &mut composited,
                ) {
                    log::error!("failed to present frame: {err}");
                    elwt.exit();
                }
            }
            _ => {}
        },
        _ => {}
    })?;

    Ok(())
}

/// Copy the framebuffer into the window, cropping to whichever is smaller
fn present(
    surface: &mut softbuffer::Surface<Arc<winit::window::Window>, Arc<winit::window::Window>>,
    size: &PhysicalSize<u32>,
    framebuffer: &Framebuffer,
    composited: &mut [u32],
) -> Result<(), softbuffer::SoftBufferError> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h)?;
    framebuffer.composite_into(composited, BACKDROP);

    let (win_w, win_h) = (size.width as usize, size.height as usize);
    let copy_w = win_w.min(framebuffer.width);
    let mut buffer = surface.buffer_mut()?;
    buffer.fill(BACKDROP.to_argb() & 0x00FF_FFFF);
    for y in 0..win_h.min(framebuffer.height) {
        let src = &composited[y * framebuffer.width..y * framebuffer.width + copy_w];
        buffer[y * win_w..y * win_w + copy_w].copy_from_slice(src);
    }
    buffer.present()
}
