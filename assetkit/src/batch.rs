use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, error, info, warn};
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rand_xoshiro::SplitMix64;

use crate::error::AssetError;

/// One pipeline's per-index step: render one asset and write it.
pub trait AssetGenerator {
    /// Plural noun used in progress lines, e.g. "backgrounds".
    fn label(&self) -> &str;

    fn output_dir(&self) -> &Path;

    /// Produces the asset for `index` from `seed` and returns the written path.
    fn generate(&mut self, index: u32, seed: u64) -> Result<PathBuf, AssetError>;
}

/// Outcome of a batch run. Failed indices are listed, not fatal.
#[derive(Debug)]
pub struct BatchReport {
    pub count: u32,
    pub written: Vec<PathBuf>,
    pub failures: Vec<(u32, AssetError)>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn shortfall(&self) -> u32 {
        self.count - self.written.len() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct BatchDriver {
    count: u32,
    progress_every: u32,
    master_seed: Option<u64>,
}

impl BatchDriver {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            progress_every: 20,
            master_seed: None,
        }
    }

    /// Emit a milestone line every `n` indices; 0 disables milestones.
    pub fn progress_every(mut self, n: u32) -> Self {
        self.progress_every = n;
        self
    }

    /// Pins the seed stream. Unpinned runs draw the master seed from the OS.
    pub fn master_seed(mut self, seed: u64) -> Self {
        self.master_seed = Some(seed);
        self
    }

    pub fn run<G: AssetGenerator + ?Sized>(&self, generator: &mut G) -> BatchReport {
        let label = generator.label().to_owned();
        let out_dir = absolute(generator.output_dir());

        info!("Starting {label} generation...");
        info!("Output directory: {}", out_dir.display());

        let master = self
            .master_seed
            .unwrap_or_else(|| SmallRng::from_os_rng().next_u64());
        debug!("master seed {master:#018x}");
        let mut seeds = SplitMix64::seed_from_u64(master);

        let start = Instant::now();
        let mut written = Vec::with_capacity(self.count as usize);
        let mut failures = Vec::new();

        for index in 1..=self.count {
            let seed = seeds.next_u64();
            match generator.generate(index, seed) {
                Ok(path) => {
                    info!("Generated: {}", file_name(&path));
                    written.push(path);
                }
                Err(e) => {
                    error!("Error generating {label} {index}: {e}");
                    failures.push((index, e));
                }
            }

            if self.progress_every > 0 && index % self.progress_every == 0 {
                info!("Progress: {index}/{} {label} generated", self.count);
            }
        }

        let report = BatchReport {
            count: self.count,
            written,
            failures,
            elapsed: start.elapsed(),
        };

        info!("{label} generation complete");
        info!(
            "Generated {} {label} in {:.2} seconds",
            report.written.len(),
            report.elapsed.as_secs_f64()
        );
        if !report.is_complete() {
            warn!(
                "{} of {} {label} failed and were skipped",
                report.shortfall(),
                report.count
            );
        }
        info!("Files saved to: {}", out_dir.display());

        report
    }
}

fn absolute(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
