use std::io::{self, Write};

use anyhow::Result;

use periodically::{query, store};

use super::Session;
use crate::cli::ElementArgs;
use crate::display::print_element;

pub fn run_element(args: ElementArgs, session: &Session) -> Result<()> {
    let elements = store::load_elements_lenient(&session.layout)?;
    let element = query::resolve(&elements, &args.identifier)?;

    let mut out = io::stdout().lock();
    print_element(&mut out, element, &session.config.display);
    out.flush()?;
    Ok(())
}
