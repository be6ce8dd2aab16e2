use std::{io::Write, sync::Once};

use log::{Level, LevelFilter};

/// How the generator binaries report on stderr.
///
/// Info lines print bare (`Generated: bg-001.png`) so batch output reads as a
/// plain progress log; other levels carry a `[LEVEL]` tag.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    /// Extra `env_logger` directives, e.g. "bgsynth::generator=debug".
    /// `RUST_LOG` is applied after these and wins.
    pub directives: Option<String>,
    pub tag_levels: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            directives: None,
            tag_levels: true,
        }
    }
}

fn tag(level: Level, tag_levels: bool) -> Option<&'static str> {
    if !tag_levels {
        return None;
    }
    match level {
        Level::Info => None,
        Level::Error => Some("[ERROR] "),
        Level::Warn => Some("[WARN] "),
        Level::Debug => Some("[DEBUG] "),
        Level::Trace => Some("[TRACE] "),
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level);
        if let Some(directives) = &config.directives {
            builder.parse_filters(directives);
        }
        builder.parse_default_env();

        let tag_levels = config.tag_levels;
        builder.format(move |buf, record| {
            if let Some(t) = tag(record.level(), tag_levels) {
                buf.write_all(t.as_bytes())?;
            }
            writeln!(buf, "{}", record.args())
        });
        builder.init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_lines_are_untagged() {
        assert_eq!(tag(Level::Info, true), None);
        assert_eq!(tag(Level::Warn, true), Some("[WARN] "));
        assert_eq!(tag(Level::Error, true), Some("[ERROR] "));
        assert_eq!(tag(Level::Error, false), None);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            level: LevelFilter::Debug,
            ..LoggingConfig::default()
        });
        log::info!("still one logger");
    }
}
