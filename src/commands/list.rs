use crate::core::config::{Config, Fact};
use anyhow::Result;
use colored::Colorize;

/// Print every known fact, marking the ones the current config will show.
pub fn execute(config: &Config) -> Result<()> {
    for fact in Fact::ALL {
        if config.facts.contains(&fact) {
            println!("{}", fact.name().green());
        } else {
            println!("{}", format!("{} (hidden)", fact.name()).dimmed());
        }
    }
    Ok(())
}
