pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod storage;

pub use app::*;
pub use config::*;
pub use console::*;
pub use error::*;
pub use models::*;
pub use storage::*;

use std::io::{BufRead, Write};

/// Run a whole interactive session: ask for the file location, then loop on the menu
pub fn run_session<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let console = Console::new(input, output);
    let mut app = BetApp::start(console)?;
    app.run()
}
