use std::io::{self, Write};

use anyhow::Result;

use periodically::query::{ElementFilter, Threshold, parse_bool};
use periodically::store;

use super::Session;
use crate::cli::SearchArgs;
use crate::display::print_search_results;
use crate::util::text::plural;

fn build_filter(args: SearchArgs) -> Result<ElementFilter> {
    let above = args
        .above
        .as_deref()
        .map(str::parse::<Threshold>)
        .transpose()?;
    let below = args
        .below
        .as_deref()
        .map(str::parse::<Threshold>)
        .transpose()?;
    let radioactive = args.radioactive.as_deref().map(parse_bool).transpose()?;

    Ok(ElementFilter {
        above,
        below,
        category: args.category,
        phase: args.phase.map(Into::into),
        block: args.block.map(Into::into),
        radioactive,
    })
}

pub fn run_search(args: SearchArgs, session: &Session) -> Result<()> {
    // Validate user input before touching storage.
    let filter = build_filter(args)?;
    let elements = store::load_elements_lenient(&session.layout)?;
    let hits = filter.apply(&elements);

    let mut out = io::stdout().lock();
    if !hits.is_empty() {
        let property = filter.above.or(filter.below).map(|t| t.property);
        print_search_results(&mut out, &hits, property);
    }
    writeln!(out, "\n  Found {}", plural(hits.len(), "element"))?;
    out.flush()?;
    Ok(())
}
