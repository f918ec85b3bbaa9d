use std::path;
use std::process;
use std::sync::Arc;
use std::sync::mpsc::channel;
use std::thread;

use anyhow::Context as _;
use ggb_site::RenderedSite;
use ggb_site::RouteTable;
use ggb_site::serve::Server;
use ggb_site::serve::ServerBuilder;
use ggb_site::serve::Store;
use notify::Watcher as _;

use crate::args;
use crate::error::Result;

/// Render and serve the site, re-rendering when the config changes
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ServeArgs {
    /// Open a browser
    #[arg(long)]
    pub(crate) open: bool,

    /// Host to serve from
    #[arg(long, value_name = "HOSTNAME_OR_IP", default_value = "localhost")]
    pub(crate) host: String,

    /// Port to serve from
    #[arg(short = 'P', long, value_name = "NUM")]
    pub(crate) port: Option<u16>,

    /// Disable re-rendering on change
    #[arg(long)]
    pub(crate) no_watch: bool,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl ServeArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let site = RenderedSite::render(&config.site, RouteTable::standard())?;
        let store = Arc::new(Store::new(site));

        let mut server = ServerBuilder::new();
        server.hostname(&self.host);
        if let Some(port) = self.port {
            server.port(port);
        }
        let server = server.build(Arc::clone(&store));

        if self.open {
            let url = format!("http://{}", server.addr());
            open_browser(url);
        }

        let config_file = if self.no_watch {
            None
        } else {
            self.config.config_file()?
        };
        match config_file {
            Some(config_file) => {
                thread::spawn(move || {
                    let e = serve(&server);
                    if let Some(e) = e.err() {
                        log::error!("{e}");
                    }
                    process::exit(1)
                });

                watch(&self.config, &config_file, &store)?;
            }
            None => {
                if !self.no_watch {
                    log::info!("No config file to watch, serving the default site");
                }
                serve(&server)?;
            }
        }

        Ok(())
    }
}

fn serve(server: &Server) -> Result<()> {
    log::info!("Server Listening on http://{}", server.addr());
    log::info!("Ctrl-c to stop the server");

    Ok(server.serve()?)
}

fn open_browser(url: String) {
    match open::that(url) {
        Ok(()) => log::info!("Please check your browser!"),
        Err(why) => log::error!("Failure to execute command: {why}"),
    }
}

fn watch(config: &args::ConfigArgs, config_file: &path::Path, store: &Store) -> Result<()> {
    // Editors often replace the file rather than modify it, so watch the
    // directory and filter on the file name.
    let config_file = dunce::canonicalize(config_file).with_context(|| {
        anyhow::format_err!("Failed to canonicalize config `{}`", config_file.display())
    })?;
    let parent = config_file
        .parent()
        .ok_or_else(|| anyhow::format_err!("`{}` has no parent", config_file.display()))?;

    let (tx, rx) = channel();
    let mut watcher =
        notify::recommended_watcher(tx).with_context(|| anyhow::format_err!("Notify error"))?;
    watcher
        .watch(parent, notify::RecursiveMode::NonRecursive)
        .with_context(|| anyhow::format_err!("Notify error"))?;
    log::info!("Watching {} for changes", config_file.display());

    for event in rx {
        let event = event.with_context(|| anyhow::format_err!("Notify error"))?;
        match event.kind {
            notify::EventKind::Create(_)
            | notify::EventKind::Modify(_)
            | notify::EventKind::Remove(_) => {
                log::trace!("Noticed {:?} for {:#?}", event.kind, event.paths);
            }
            _ => {
                continue;
            }
        }
        let changed = event
            .paths
            .iter()
            .any(|event_path| event_path.file_name() == config_file.file_name());
        if !changed {
            continue;
        }

        log::debug!("Config changed {event:?}");
        match reload(config) {
            Ok(site) => {
                store.replace(site);
                log::info!("Site re-rendered");
            }
            Err(fail) => {
                log::error!("Reload failed, still serving the previous site\n{fail:?}");
            }
        }
    }

    Ok(())
}

fn reload(config: &args::ConfigArgs) -> Result<RenderedSite> {
    let config = config.load_config()?;
    RenderedSite::render(&config.site, RouteTable::standard())
}
