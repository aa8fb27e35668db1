use std::io::{self, Write};

use anyhow::Result;

use periodically::{query, store};

use super::Session;
use crate::cli::CompareArgs;
use crate::display::print_comparison;

pub fn run_compare(args: CompareArgs, session: &Session) -> Result<()> {
    let elements = store::load_elements_lenient(&session.layout)?;
    let comparison = query::compare(&elements, &args.identifiers)?;

    let mut out = io::stdout().lock();
    print_comparison(&mut out, &comparison);
    out.flush()?;
    Ok(())
}
