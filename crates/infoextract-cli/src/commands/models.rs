//! Models command implementation.

use crate::error::Result;
use crate::output::Formatter;
use infoextract_domain::ModelSelector;

/// Execute the models command.
pub fn execute_models(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_models(ModelSelector::all())?);
    Ok(())
}
