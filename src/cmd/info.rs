//! Contact details and team roster.

use anyhow::Result;

use fireup::showcase::{team_roster, CONTACT};
use fireup::templates::{Templates, CONTACT_TEMPLATE, TEAM_TEMPLATE};

pub fn cmd_contact() -> Result<()> {
    let templates = Templates::new(None)?;
    print!("{}", templates.render(CONTACT_TEMPLATE, &CONTACT)?);
    Ok(())
}

pub fn cmd_team() -> Result<()> {
    let templates = Templates::new(None)?;
    print!("{}", templates.render(TEAM_TEMPLATE, &team_roster())?);
    Ok(())
}
