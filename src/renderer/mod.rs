use std::path::Path;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc,
};
use std::thread;
use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::environment::Environment;
use crate::error::RenderError;
use crate::scene::Scene;

mod coordinator;
mod render_worker;
mod traced_image;

pub use self::coordinator::{Block, RenderCoordinator};
use self::render_worker::RenderWorker;
pub use self::traced_image::TracedImage;

/// Totals shared by all workers of a render
#[derive(Default)]
pub(crate) struct RenderCounters {
    samples: AtomicUsize,
    bounces: AtomicUsize,
}

impl RenderCounters {
    fn add(&self, samples: usize, bounces: usize) {
        self.samples.fetch_add(samples, Ordering::Relaxed);
        self.bounces.fetch_add(bounces, Ordering::Relaxed);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStats {
    /// Primary rays traced
    pub samples: usize,
    /// Reflected rays traced
    pub bounces: usize,
    pub duration: Duration,
}

impl RenderStats {
    /// Million primary samples per second
    pub fn msps(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.samples as f64 / secs / 1_000_000.0
        } else {
            0.0
        }
    }
}

/// Offline renderer that splits the image between worker threads
pub struct Renderer {
    image: TracedImage,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer {
            image: TracedImage::empty(0, 0),
        }
    }

    /// Render the scene and block until every worker has finished
    pub fn render(
        &mut self,
        scene: &Arc<Scene>,
        environment: &Arc<dyn Environment>,
        camera: &Camera,
        config: &RenderConfig,
    ) -> Result<RenderStats, RenderError> {
        let (width, height) = (config.width, config.height);
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyTarget { width, height });
        }
        let clip_to_world = camera.clip_to_world(width, height).map_err(|err| {
            tracing::error!("Failed to set up camera: {}", err);
            err
        })?;
        let n_threads = config.max_threads.max(1);
        tracing::info!(
            "Rendering {}x{} with {} threads, {} samples per pixel",
            width,
            height,
            n_threads,
            config.samples_per_pixel()
        );

        let start = Instant::now();
        self.image = TracedImage::empty(width, height);
        let coordinator = Arc::new(RenderCoordinator::new(config));
        let counters = Arc::new(RenderCounters::default());
        let (result_tx, result_rx) = mpsc::channel();
        let mut thread_handles = Vec::with_capacity(n_threads);
        for _ in 0..n_threads {
            let worker = RenderWorker::new(
                scene.clone(),
                environment.clone(),
                camera.clone(),
                clip_to_world,
                config.clone(),
                coordinator.clone(),
                counters.clone(),
                result_tx.clone(),
            );
            thread_handles.push(thread::spawn(move || worker.run()));
        }
        drop(result_tx);

        // Consume blocks while the workers run, iteration ends when all senders are gone
        for (block, data) in result_rx.iter() {
            self.image.update_block(block, &data);
        }
        let mut panicked = false;
        for handle in thread_handles {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(RenderError::WorkerPanicked);
        }

        let stats = RenderStats {
            samples: counters.samples.load(Ordering::Relaxed),
            bounces: counters.bounces.load(Ordering::Relaxed),
            duration: start.elapsed(),
        };
        tracing::info!(
            "Rendered {} samples and {} bounces in {:.2?}",
            stats.samples,
            stats.bounces,
            stats.duration
        );
        Ok(stats)
    }

    pub fn image(&self) -> &TracedImage {
        &self.image
    }

    pub fn save_image(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save_image(path)
    }
}
