use std::io::{self, Write};

use anyhow::Result;

use periodically::query::ReactionFilter;
use periodically::store;

use super::Session;
use crate::cli::ReactionsArgs;
use crate::display::print_reactions;
use crate::util::text::plural;

pub fn run_reactions(args: ReactionsArgs, session: &Session) -> Result<()> {
    let filter = ReactionFilter {
        element: args.element,
        category: args.category,
        reaction_type: args.reaction_type,
    };

    let reactions = store::load_reactions_lenient(&session.layout)?;
    let hits = filter.apply(&reactions);

    let mut out = io::stdout().lock();
    print_reactions(&mut out, &hits);
    writeln!(out, "  {}", plural(hits.len(), "reaction"))?;
    out.flush()?;
    Ok(())
}
