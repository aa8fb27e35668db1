mod compare;
mod element;
mod index;
mod link;
mod reactions;
mod search;
mod stats;
mod validate;

use anyhow::{Context as _, Result};

use periodically::{Config, Layout};

use crate::cli::{Command, GlobalOptions};
use crate::display::Context;

/// Configuration and resolved database layout for one invocation.
pub struct Session {
    pub config: Config,
    pub layout: Layout,
}

impl Session {
    fn open(global: &GlobalOptions) -> Result<Self> {
        let config = Config::load(global.config.as_deref())
            .context("Failed to load configuration")?;
        let layout = Layout::new(&global.root, &config.layout);
        Ok(Self { config, layout })
    }
}

pub fn dispatch(command: Command, global: &GlobalOptions, ctx: Context) -> Result<()> {
    let session = Session::open(global)?;

    match command {
        Command::Element(args) => element::run_element(args, &session),
        Command::Search(args) => search::run_search(args, &session),
        Command::Reactions(args) => reactions::run_reactions(args, &session),
        Command::Compare(args) => compare::run_compare(args, &session),
        Command::Stats => stats::run_stats(&session),
        Command::Index => index::run_index(&session, ctx),
        Command::Link => link::run_link(&session, ctx),
        Command::Validate => validate::run_validate(&session, ctx),
    }
}
