use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use rouille::Server;

use portfolio_viewer::cache::ContentLoader;
use portfolio_viewer::config::ViewerConfig;
use portfolio_viewer::note;
use portfolio_viewer::server::{ViewerService, server_handler};
use portfolio_viewer::source::{ContentSource, DirSource};
use portfolio_viewer::workbench::Workbench;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env()?;

    let source = config.content_source();
    let policy = config.cache_policy;
    note!("Reading content from {}{}",
          source.describe(),
          if policy.bypass { " (cache bypass)" } else { "" });
    let new_workbench = move || Workbench::new(ContentLoader::new(Box::new(source.clone()),
                                                                  policy));

    // Only serve our own content files if we read them from disk
    let files = match &config.content_url {
        Some(_) => None,
        None => Some(DirSource::new(&config.sitedir)),
    };
    let service = Arc::new(ViewerService::new(new_workbench, files, &config.site_title));

    let server = Server::new(config.listen_addr.clone(), server_handler(service))
        .map_err(|e| anyhow!("can't listen on {:?}: {e}", config.listen_addr))?;
    note!("Listening on http://{}/", server.server_addr());
    server.run();
    bail!("Server stopped.");
}
