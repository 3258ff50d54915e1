use crate::config::StoreConfig;
use crate::console::messages::*;
use crate::console::Console;
use crate::error::{BetError, Result};
use crate::storage::RecordStore;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddBet,
    ListBets,
    ResetFile,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(MenuOption::AddBet),
            2 => Some(MenuOption::ListBets),
            3 => Some(MenuOption::ResetFile),
            0 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Interactive session over one bets file
pub struct BetApp<R, W> {
    console: Console<R, W>,
    store: RecordStore,
}

impl<R: BufRead, W: Write> BetApp<R, W> {
    pub fn new(console: Console<R, W>, store: RecordStore) -> Self {
        Self { console, store }
    }

    /// Ask for the folder and file names, then open (and create) the store
    pub fn start(mut console: Console<R, W>) -> Result<Self> {
        let directory = console.ask_string(ASK_FOLDER)?;
        let file = console.ask_string(ASK_FILE)?;
        let config = StoreConfig::from_answers(&directory, &file);

        let store = RecordStore::open(&config.data_directory, &config.file_name)?;
        info!(path = %store.file_path().display(), "Using bets file");
        Ok(Self::new(console, store))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Show the menu until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_once() {
                Ok(Some(MenuOption::Exit)) => return Ok(()),
                Ok(_) => {}
                Err(BetError::EndOfInput) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu once and carry out the chosen action
    ///
    /// Returns `None` when the choice is not a menu option.
    pub fn run_once(&mut self) -> Result<Option<MenuOption>> {
        self.console.show_menu(START_MENU)?;
        let choice = self.console.ask_integer(ASK_OPTION, ERROR_NO_INTEGER)?;

        let Some(option) = MenuOption::from_choice(choice) else {
            self.console.show_error(ERROR_INVALID_OPTION)?;
            return Ok(None);
        };

        let outcome = match option {
            MenuOption::AddBet => self.add_bet(),
            MenuOption::ListBets => self.list_bets(),
            MenuOption::ResetFile => self.reset_file(),
            MenuOption::Exit => return Ok(Some(MenuOption::Exit)),
        };

        match outcome {
            Ok(()) => {}
            Err(e @ (BetError::EndOfInput | BetError::Console(_))) => return Err(e),
            Err(e) => {
                warn!(error = %e, "Menu action failed");
                self.console.show_error(&e.to_string())?;
            }
        }

        Ok(Some(option))
    }

    fn add_bet(&mut self) -> Result<()> {
        let sport = self
            .console
            .ask_non_empty_string(ASK_SPORT, ERROR_EMPTY_STRING)?;
        let event = self
            .console
            .ask_non_empty_string(ASK_EVENT, ERROR_EMPTY_STRING)?;
        let bet_type = self
            .console
            .ask_non_empty_string(ASK_BET_TYPE, ERROR_EMPTY_STRING)?;
        let odds = self.ask_positive(ASK_ODDS)?;
        let amount = self.ask_positive(ASK_AMOUNT)?;

        self.store
            .append_bet(&sport, &event, &bet_type, odds, amount)?;
        self.console.show_info(INFO_BET_SAVED)
    }

    fn ask_positive(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let value = self.console.ask_float(prompt, ERROR_NO_FLOAT)?;
            if value > 0.0 {
                return Ok(value);
            }
            self.console.show_error(ERROR_NOT_POSITIVE)?;
        }
    }

    fn list_bets(&mut self) -> Result<()> {
        let contents = self.store.read_all()?;
        if contents.trim().is_empty() {
            return self.console.show_info(INFO_NO_BETS);
        }
        self.console.show_bets(&contents)?;
        Ok(())
    }

    fn reset_file(&mut self) -> Result<()> {
        self.store.reset()?;
        self.console.show_info(INFO_FILE_RESET)
    }
}
