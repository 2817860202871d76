use color_eyre::eyre::Result;
use team_roster::{
    log_error_chain, services::notifiers::StdoutNotifier,
    utils::tracing::init_tracing, Roster,
};
use tracing::Level;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let roster = Roster::seeded(Box::new(StdoutNotifier));

    if let Err(e) = roster.render_all() {
        log_error_chain(&e, Level::ERROR);
        return Err(e.into());
    }

    Ok(())
}
