use std::sync::{mpsc::Sender, Arc};

use cgmath::Matrix4;

use crate::camera::Camera;
use crate::color::Color;
use crate::config::*;
use crate::environment::Environment;
use crate::float::*;
use crate::scene::Scene;
use crate::tracer::{self, Trace};

use super::coordinator::{Block, RenderCoordinator};
use super::traced_image::CHANNELS;
use super::RenderCounters;

pub struct RenderWorker {
    scene: Arc<Scene>,
    environment: Arc<dyn Environment>,
    camera: Camera,
    clip_to_world: Matrix4<Float>,
    config: RenderConfig,
    coordinator: Arc<RenderCoordinator>,
    counters: Arc<RenderCounters>,
    result_tx: Sender<(Block, Vec<f32>)>,
}

impl RenderWorker {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        scene: Arc<Scene>,
        environment: Arc<dyn Environment>,
        camera: Camera,
        clip_to_world: Matrix4<Float>,
        config: RenderConfig,
        coordinator: Arc<RenderCoordinator>,
        counters: Arc<RenderCounters>,
        result_tx: Sender<(Block, Vec<f32>)>,
    ) -> RenderWorker {
        RenderWorker {
            scene,
            environment,
            camera,
            clip_to_world,
            config,
            coordinator,
            counters,
            result_tx,
        }
    }

    fn trace_sample(&self, clip_x: Float, clip_y: Float) -> Option<Trace> {
        let ray = match self.camera.primary_ray(&self.clip_to_world, clip_x, clip_y) {
            Ok(ray) => ray,
            Err(err) => {
                tracing::warn!("Skipping sample at ({}, {}): {}", clip_x, clip_y, err);
                return None;
            }
        };
        let res = match &self.config.render_mode {
            RenderMode::Shaded => tracer::trace(
                ray,
                &self.scene,
                self.environment.as_ref(),
                &self.config.trace,
            ),
            RenderMode::Debug(DebugMode::Normals) => tracer::trace_normals(ray, &self.scene),
        };
        Some(res)
    }

    pub fn run(&self) {
        let (width, height) = (self.coordinator.width, self.coordinator.height);
        let samples_per_dir = self.config.samples_per_dir.max(1);
        let n_samples = samples_per_dir.pow(2).to_float();
        let mut total_samples = 0;
        let mut total_bounces = 0;
        let mut n_blocks = 0;
        while let Some(block) = self.coordinator.next_block() {
            let mut data = vec![0.0f32; CHANNELS * block.n_pixels()];
            for h in 0..block.height {
                for w in 0..block.width {
                    let mut c = Color::black();
                    let mut alpha = 0.0;
                    for j in 0..samples_per_dir {
                        for i in 0..samples_per_dir {
                            let dx = (i.to_float() + rand::random::<Float>())
                                / samples_per_dir.to_float();
                            let dy = (j.to_float() + rand::random::<Float>())
                                / samples_per_dir.to_float();
                            let clip_x =
                                2.0 * ((block.left + w).to_float() + dx) / width.to_float() - 1.0;
                            let clip_y =
                                1.0 - 2.0 * ((block.top + h).to_float() + dy) / height.to_float();
                            if let Some(res) = self.trace_sample(clip_x, clip_y) {
                                c += res.color;
                                alpha += res.alpha();
                                total_bounces += res.bounces;
                            }
                            total_samples += 1;
                        }
                    }
                    c /= n_samples;
                    alpha /= n_samples;
                    let pixel_i = CHANNELS * (h as usize * block.width as usize + w as usize);
                    let rgb: [f32; 3] = c.into();
                    data[pixel_i..pixel_i + 3].copy_from_slice(&rgb);
                    data[pixel_i + 3] = alpha as f32;
                }
            }
            n_blocks += 1;
            if self.result_tx.send((block, data)).is_err() {
                tracing::error!("Result receiver closed, stopping worker");
                break;
            }
        }
        self.counters.add(total_samples, total_bounces);
        tracing::debug!(
            "Worker finished {} blocks with {} samples",
            n_blocks,
            total_samples
        );
    }
}
