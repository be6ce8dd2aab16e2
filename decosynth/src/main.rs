use assetkit::{BatchDriver, LoggingConfig, init_logging};
use decosynth::{DecorationCfg, DecorationGenerator};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = DecorationCfg::default();
    let driver = BatchDriver::new(cfg.count).progress_every(cfg.progress_every);
    let mut generator = DecorationGenerator::new(cfg);
    driver.run(&mut generator);
    Ok(())
}
