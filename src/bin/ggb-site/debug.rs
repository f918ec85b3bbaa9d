use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the route table
    Routes,
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                for duplicate in config.site.menus().duplicate_ids() {
                    log::warn!("{duplicate}");
                }
                print!("{config}");
            }
            Self::Routes => {
                let routes = ggb_site::RouteTable::standard();
                for route in routes.routes() {
                    println!(
                        "{} -> {} ({})",
                        route.path,
                        route.page.name(),
                        route.output_file()
                    );
                }
                println!("* -> not found ({})", ggb_site::routes::NOT_FOUND_FILE);
            }
        }

        Ok(())
    }
}
