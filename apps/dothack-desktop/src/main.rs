use anyhow::{Context, Result};
use clap::Parser;
use dothack_assets::{AssetPaths, DEFAULT_ASSET_DIR, load_texture_or_warn};
use dothack_input::{Action, InputState, KeyBindings};
use dothack_kernel::{Game, GameConfig, LoopState};
use dothack_render::{Frame, Scene, Viewport};
use dothack_render_wgpu::{GpuContext, WgpuRenderer};
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

mod keys;
mod overlay;

/// Longest frame the simulation will step in one go, in seconds.
const MAX_FRAME_TIME: f32 = 0.1;

/// Seconds between two frames, clamped so a stalled window does not make
/// the world jump.
fn frame_delta(last: Instant, now: Instant) -> f32 {
    now.saturating_duration_since(last)
        .as_secs_f32()
        .min(MAX_FRAME_TIME)
}

#[derive(Parser)]
#[command(name = "dothack-desktop", about = "Play dothack in a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the game's images
    #[arg(long, default_value = DEFAULT_ASSET_DIR)]
    asset_dir: PathBuf,

    /// Freeze the world while the exit prompt is shown
    #[arg(long)]
    pause_on_exit_prompt: bool,
}

/// Application state.
struct AppState {
    game: Game,
    scene: Scene,
    input: InputState,
    bindings: KeyBindings,
    show_inspector: bool,
    /// GPU backend name, shown in the inspector once the window exists.
    backend: Option<&'static str>,
    last_frame: Instant,
    frame_time: f32,
}

impl AppState {
    fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            scene: Scene::new(Viewport::DEFAULT),
            input: InputState::new(),
            bindings: KeyBindings::default(),
            show_inspector: false,
            backend: None,
            last_frame: Instant::now(),
            frame_time: 0.0,
        }
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        if let Some(key) = keys::map_key(code) {
            self.input.handle_key(key, pressed);
        }
    }

    /// Advance one frame with the input gathered since the last one.
    fn update(&mut self, dt: f32) -> LoopState {
        let actions = self.bindings.actions(&self.input);
        if actions.iter().any(|a| matches!(a, Action::ToggleInspector)) {
            self.show_inspector = !self.show_inspector;
        }
        let state = self.game.frame(&actions, dt);
        self.input.end_frame();
        self.frame_time = dt;
        state
    }

    fn draw_ui(&mut self, ctx: &EguiContext, frame: &Frame, scale: f32) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("screen_layer"),
        ));
        overlay::paint_screen_layer(&painter, &frame.screen, scale);

        if !self.show_inspector {
            return;
        }

        let world = self.game.world();
        let mut open = self.show_inspector;
        egui::Window::new("Inspector")
            .open(&mut open)
            .default_pos([10.0, 40.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(world.summary().to_string());
                ui.label(format!("State: {:?}", self.game.state()));
                ui.label(format!("Build: {:?}", self.game.config().build_mode));
                if let Some(backend) = self.backend {
                    ui.label(format!("Backend: {backend}"));
                }
                if self.frame_time > 0.0 {
                    ui.label(format!(
                        "Frame: {:.1} ms ({:.0} fps)",
                        self.frame_time * 1000.0,
                        1.0 / self.frame_time
                    ));
                }
                ui.separator();

                ui.heading("Enemies");
                for (id, enemy) in world.enemies().iter() {
                    ui.label(format!(
                        "{id}: ({:.1}, {:.1}) hp={}",
                        enemy.position.x, enemy.position.y, enemy.health
                    ));
                }
                ui.label(format!("Hash: {:016x}", world.state_hash()));

                ui.separator();
                ui.small("F1: Toggle Inspector | Arrows/WASD: Move | Esc: Exit");
            });
        self.show_inspector = open;
    }
}

/// GPU resources that exist once the window does.
struct Gpu {
    ctx: GpuContext,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    assets: AssetPaths,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    /// Set when startup fails; reported from `main` once the loop ends.
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: GameConfig, assets: AssetPaths) -> Self {
        Self {
            state: AppState::new(config),
            assets,
            window: None,
            gpu: None,
            egui_ctx: EguiContext::default(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let viewport = self.state.scene.viewport();
        let attrs = Window::default_attributes()
            .with_title(Viewport::TITLE)
            .with_inner_size(LogicalSize::new(viewport.width, viewport.height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let size = window.inner_size();
        let ctx = GpuContext::new(window.clone(), size.width, size.height)
            .context("initialise GPU")?;
        let mut renderer = WgpuRenderer::new(&ctx.device, &ctx.queue, ctx.format());
        self.state.backend = Some(ctx.backend().to_str());

        let logo = load_texture_or_warn(self.assets.logo())
            .map(|data| renderer.upload_texture(&ctx.device, &ctx.queue, &data));
        self.state.scene.set_logo(logo);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.format(), None, 1, false);

        self.window = Some(window);
        self.gpu = Some(Gpu {
            ctx,
            renderer,
            egui_winit,
            egui_renderer,
        });
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = frame_delta(self.state.last_frame, now);
        self.state.last_frame = now;

        if self.state.update(dt) == LoopState::Exited {
            tracing::info!("exit confirmed, closing window");
            event_loop.exit();
            return;
        }

        let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) else {
            return;
        };

        let frame = self.state.scene.compose(&self.state.game);

        let Some(output) = gpu.ctx.acquire() else {
            return;
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer
            .render(&gpu.ctx.device, &gpu.ctx.queue, &view, &frame);

        let (width, height) = gpu.ctx.size();
        let raw_input = gpu.egui_winit.take_egui_input(window);
        let state = &mut self.state;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let scale = width as f32 / frame.viewport.width as f32 / ctx.pixels_per_point();
            state.draw_ui(ctx, &frame, scale);
        });

        gpu.egui_winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        {
            let device = &gpu.ctx.device;
            let queue = &gpu.ctx.queue;
            let egui_renderer = &mut gpu.egui_renderer;
            for (id, image_delta) in &full_output.textures_delta.set {
                egui_renderer.update_texture(device, queue, *id, image_delta);
            }
            let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
            egui_renderer.update_buffers(
                device,
                queue,
                &mut encoder,
                &paint_jobs,
                &screen_descriptor,
            );
            {
                let mut pass = encoder
                    .begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui_pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    })
                    .forget_lifetime();
                egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
            }
            queue.submit(std::iter::once(encoder.finish()));
            for id in &full_output.textures_delta.free {
                egui_renderer.free_texture(id);
            }
        }

        output.present();
        window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            tracing::error!("startup failed: {e:#}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) {
            let response = gpu.egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            // Closing goes through the confirmation prompt.
            WindowEvent::CloseRequested => {
                tracing::debug!("window close requested");
                self.state.input.request_close();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.ctx.resize(new_size.width, new_size.height);
                }
            }
            // Keys released while unfocused never arrive, so drop them all.
            WindowEvent::Focused(false) => {
                self.state.input.release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("dothack-desktop starting");

    let config = GameConfig {
        pause_on_exit_prompt: cli.pause_on_exit_prompt,
        ..GameConfig::default()
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config, AssetPaths::new(cli.asset_dir));
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }
    tracing::info!("dothack-desktop stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dothack_input::Key;
    use std::time::Duration;

    fn press(state: &mut AppState, code: KeyCode) {
        state.handle_key(code, true);
        state.handle_key(code, false);
    }

    #[test]
    fn f1_toggles_inspector() {
        let mut state = AppState::new(GameConfig::default());
        press(&mut state, KeyCode::F1);
        state.update(1.0 / 60.0);
        assert!(state.show_inspector);
        press(&mut state, KeyCode::F1);
        state.update(1.0 / 60.0);
        assert!(!state.show_inspector);
    }

    #[test]
    fn escape_then_y_exits() {
        let mut state = AppState::new(GameConfig::default());
        press(&mut state, KeyCode::Escape);
        assert_eq!(state.update(1.0 / 60.0), LoopState::ExitConfirmPending);
        press(&mut state, KeyCode::KeyY);
        assert_eq!(state.update(1.0 / 60.0), LoopState::Exited);
    }

    #[test]
    fn window_close_prompts_instead_of_exiting() {
        let mut state = AppState::new(GameConfig::default());
        state.input.request_close();
        assert_eq!(state.update(1.0 / 60.0), LoopState::ExitConfirmPending);
        assert!(!state.input.is_down(Key::Escape));
    }

    #[test]
    fn stalled_frame_steps_at_most_a_tenth_of_a_second() {
        let start = Instant::now();
        let dt = frame_delta(start, start + Duration::from_secs(2));
        assert_eq!(dt, MAX_FRAME_TIME);

        let mut state = AppState::new(GameConfig::default());
        state.update(dt);
        // Enemy 0 starts at (300, 0) and closes in at 25 units per second.
        let enemy = state.game.world().enemies().values().next().unwrap().position;
        assert!((enemy.x - 297.5).abs() < 1e-4);
        assert!(enemy.y.abs() < 1e-4);
    }

    #[test]
    fn short_frames_are_not_clamped() {
        let start = Instant::now();
        let dt = frame_delta(start, start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(frame_delta(start + Duration::from_secs(1), start), 0.0);
    }

    #[test]
    fn focus_loss_keeps_pending_close_request() {
        let mut state = AppState::new(GameConfig::default());
        state.handle_key(KeyCode::ArrowLeft, true);
        state.input.request_close();
        state.input.release_all();
        assert_eq!(state.update(1.0 / 60.0), LoopState::ExitConfirmPending);
        let player = state.game.world().player().map(|p| p.position);
        assert_eq!(player, Some(glam::Vec2::ZERO));
    }

    #[test]
    fn held_arrow_moves_player() {
        let mut state = AppState::new(GameConfig::default());
        state.handle_key(KeyCode::ArrowRight, true);
        state.update(0.5);
        let player = state.game.world().player().map(|p| p.position);
        assert_eq!(player, Some(glam::Vec2::new(50.0, 0.0)));
    }
}
