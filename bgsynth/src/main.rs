use anyhow::Context;
use assetkit::{BatchDriver, LoggingConfig, init_logging};
use bgsynth::{BackgroundCfg, BackgroundGenerator};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = BackgroundCfg::default();
    let driver = BatchDriver::new(cfg.count).progress_every(cfg.progress_every);
    let mut generator = BackgroundGenerator::new(cfg)
        .context("cannot open the backgrounds manifest")?;

    driver.run(&mut generator);
    if let Some(path) = &generator.config().manifest {
        log::info!("Manifest: {}", path.display());
    }
    generator
        .finalize()
        .context("cannot flush the backgrounds manifest")?;
    Ok(())
}
