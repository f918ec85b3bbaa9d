use std::env;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _site.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,

    /// Site destination folder [default: ./_site]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) destination: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<ggb_site::Config> {
        let mut config = if let Some(config_path) = self.config.as_deref() {
            ggb_config::Config::from_file(config_path).with_context(|| {
                anyhow::format_err!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            ggb_config::Config::from_cwd(cwd)?
        };

        config.abs_dest = self.destination.clone();

        Ok(config)
    }

    /// The file `load_config` reads, if there is one
    pub(crate) fn config_file(&self) -> Result<Option<path::PathBuf>> {
        if let Some(config_path) = self.config.as_deref() {
            return Ok(Some(config_path.to_owned()));
        }
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Ok(ggb_config::find_project_file(cwd, ggb_config::CONFIG_FILE))
    }
}

pub(crate) fn init_logging(
    level: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
    colored: bool,
) {
    use std::io::Write as _;

    let Some(level) = level.log_level() else {
        return;
    };

    let palette = if colored {
        Palette::colored()
    } else {
        Palette::plain()
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());

    if level == log::Level::Trace || level == log::Level::Debug {
        builder.format_timestamp_secs();
    } else {
        builder.format(move |f, record| match record.level() {
            log::Level::Error => writeln!(
                f,
                "{}{}:{} {}",
                palette.error.render(),
                record.level(),
                palette.error.render_reset(),
                record.args()
            ),
            log::Level::Warn => writeln!(
                f,
                "{}{}:{} {}",
                palette.warn.render(),
                record.level(),
                palette.warn.render_reset(),
                record.args()
            ),
            log::Level::Info => writeln!(f, "{}", record.args()),
            log::Level::Debug | log::Level::Trace => writeln!(
                f,
                "{}{}:{} {}",
                palette.hint.render(),
                record.level(),
                palette.hint.render_reset(),
                record.args()
            ),
        });
    }

    builder.init();
}

#[derive(Copy, Clone, Debug, Default)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    hint: anstyle::Style,
}

impl Palette {
    fn colored() -> Self {
        Self {
            error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
            warn: anstyle::AnsiColor::Yellow.on_default(),
            hint: anstyle::Effects::DIMMED.into(),
        }
    }

    fn plain() -> Self {
        Self::default()
    }
}
