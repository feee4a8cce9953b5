use pointcloud_core::{Palette, SceneUniforms, SpriteInstance, SpriteRenderer, StartupError};

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprites: SpriteRenderer,
}

impl<'w> GpuState<'w> {
    /// Fails with `StartupError` when no adapter or device can be had.
    pub async fn new(window: &'w winit::window::Window, instances: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = pointcloud_core::require_graphics(instance.create_surface(window))?;
        let adapter = pointcloud_core::require_graphics(
            instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .ok_or("no compatible GPU adapter"),
        )?;
        let (device, queue) = pointcloud_core::require_graphics(
            adapter
                .request_device(
                    &wgpu::DeviceDescriptor {
                        required_features: wgpu::Features::empty(),
                        required_limits: wgpu::Limits::default(),
                        memory_hints: wgpu::MemoryHints::Performance,
                        label: None,
                    },
                    None,
                )
                .await,
        )?;
        log::info!("[gpu] adapter: {}", adapter.get_info().name);

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| StartupError::no_context("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let sprites = SpriteRenderer::new(&device, format, instances);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            sprites,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        uniforms: &SceneUniforms,
        instances: &[SpriteInstance],
        palette: &Palette,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.sprites
            .draw(&self.device, &self.queue, &view, uniforms, instances, palette);
        frame.present();
        Ok(())
    }
}
