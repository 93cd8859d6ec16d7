use color_eyre::eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use lexigrid_tui::{App, logging};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {}", e);
    }

    let terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = App::new().run(terminal).await;

    crossterm::execute!(std::io::stdout(), DisableMouseCapture, DisableBracketedPaste)?;
    ratatui::restore();
    result
}
