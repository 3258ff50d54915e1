use crate::error::{BetError, Result};
use crate::models::BetRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Owns the bets directory and the append-only bets file inside it
#[derive(Debug, Clone)]
pub struct RecordStore {
    directory: PathBuf,
    file: PathBuf,
}

impl RecordStore {
    /// Resolve the directory and file names without touching the filesystem
    ///
    /// Relative directory names are anchored at the current working directory.
    /// The file name must be a single plain component so the file always sits
    /// inside the directory.
    pub fn new(directory_name: &str, file_name: &str) -> Result<Self> {
        if directory_name.is_empty() || file_name.is_empty() {
            return Err(BetError::InvalidArgument(
                "directory and file names must not be empty".to_string(),
            ));
        }

        let mut components = Path::new(file_name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(BetError::InvalidArgument(format!(
                "file name {:?} must not contain a path",
                file_name
            )));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| BetError::io("resolve working directory for", directory_name, e))?;
        let directory = cwd.join(directory_name);
        let file = directory.join(file_name);

        Ok(Self { directory, file })
    }

    /// Resolve the paths and make sure both the directory and the file exist
    pub fn open(directory_name: &str, file_name: &str) -> Result<Self> {
        let store = Self::new(directory_name, file_name)?;
        store.ensure_directory()?;
        store.ensure_file()?;
        Ok(store)
    }

    pub fn directory_path(&self) -> &Path {
        &self.directory
    }

    pub fn file_path(&self) -> &Path {
        &self.file
    }

    pub fn directory_exists(&self) -> bool {
        self.directory.exists()
    }

    pub fn file_exists(&self) -> bool {
        self.file.exists()
    }

    pub fn ensure_directory(&self) -> Result<()> {
        if self.directory_exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.directory)
            .map_err(|e| BetError::io("create directory", &self.directory, e))?;
        info!(path = %self.directory.display(), "Created data directory");
        Ok(())
    }

    pub fn ensure_file(&self) -> Result<()> {
        if self.file_exists() {
            return Ok(());
        }
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.file)
            .map_err(|e| BetError::io("create file", &self.file, e))?;
        info!(path = %self.file.display(), "Created data file");
        Ok(())
    }

    pub fn delete_file_if_present(&self) -> Result<()> {
        if !self.file_exists() {
            return Ok(());
        }
        fs::remove_file(&self.file).map_err(|e| BetError::io("delete file", &self.file, e))?;
        info!(path = %self.file.display(), "Deleted data file");
        Ok(())
    }

    /// Remove the directory, refusing while it still holds any entry
    pub fn delete_directory_if_empty(&self) -> Result<()> {
        if !self.directory_exists() {
            return Ok(());
        }

        let mut entries = fs::read_dir(&self.directory)
            .map_err(|e| BetError::io("list directory", &self.directory, e))?;
        if entries.next().is_some() {
            return Err(BetError::NotEmpty(self.directory.clone()));
        }

        fs::remove_dir(&self.directory)
            .map_err(|e| BetError::io("delete directory", &self.directory, e))?;
        info!(path = %self.directory.display(), "Deleted data directory");
        Ok(())
    }

    /// Whole file contents; invalid UTF-8 is replaced rather than rejected
    pub fn read_all(&self) -> Result<String> {
        self.require_file()?;
        let bytes = fs::read(&self.file).map_err(|e| BetError::io("read file", &self.file, e))?;
        let contents = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %self.file.display(), bytes = contents.len(), "Read data file");
        Ok(contents)
    }

    /// Append `text` followed by a newline
    pub fn append_line(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(BetError::InvalidArgument(
                "cannot append an empty line".to_string(),
            ));
        }
        self.require_file()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.file)
            .map_err(|e| BetError::io("open for append", &self.file, e))?;
        file.write_all(format!("{}\n", text).as_bytes())
            .map_err(|e| BetError::io("append to", &self.file, e))?;

        debug!(path = %self.file.display(), "Appended line");
        Ok(())
    }

    /// Validate, timestamp and append one bet
    pub fn append_bet(
        &self,
        sport: &str,
        event: &str,
        bet_type: &str,
        odds: f64,
        amount: f64,
    ) -> Result<BetRecord> {
        let bet = BetRecord::new(sport, event, bet_type, odds, amount)?;
        self.append_line(&bet.to_line()?)?;
        info!(sport = %bet.sport, event = %bet.event, odds = bet.odds, amount = bet.amount, "Recorded bet");
        Ok(bet)
    }

    /// Drop every stored bet, leaving an empty file in place
    pub fn reset(&self) -> Result<()> {
        self.delete_file_if_present()?;
        self.ensure_directory()?;
        self.ensure_file()?;
        info!(path = %self.file.display(), "Reset data file");
        Ok(())
    }

    fn require_file(&self) -> Result<()> {
        if self.file_exists() {
            Ok(())
        } else {
            Err(BetError::InvalidState(format!(
                "data file {} does not exist",
                self.file.display()
            )))
        }
    }
}
