pub const APP_TITLE: &str = "BET TRACKER";
pub const ERROR_HEADER: &str = "ERROR";
pub const INFO_HEADER: &str = "INFO";
pub const SEPARATOR: &str =
    "---------------------------------------------------------------------------------------";

pub const DEFAULT_PROMPT: &str = "Enter a value:";
pub const DEFAULT_INPUT_ERROR: &str = "The value entered is not valid";

pub const ASK_FOLDER: &str =
    "Name of the folder where the bets file is stored (enter for the default):";
pub const ASK_FILE: &str = "Name of the bets file (enter for the default):";
pub const ASK_OPTION: &str = "Enter the number of an option:";
pub const ASK_SPORT: &str = "Sport:";
pub const ASK_EVENT: &str = "Event:";
pub const ASK_BET_TYPE: &str = "Bet type:";
pub const ASK_ODDS: &str = "Odds:";
pub const ASK_AMOUNT: &str = "Amount:";

pub const ERROR_INVALID_OPTION: &str = "That is not a valid option";
pub const ERROR_NO_INTEGER: &str = "The value entered is not a whole number";
pub const ERROR_NO_FLOAT: &str = "The value entered is not a number";
pub const ERROR_EMPTY_STRING: &str = "The text entered is empty";
pub const ERROR_NOT_POSITIVE: &str = "The value must be greater than zero";

pub const INFO_BET_SAVED: &str = "Bet saved";
pub const INFO_NO_BETS: &str = "No bets recorded yet";
pub const INFO_FILE_RESET: &str = "The bets file has been reset";

pub const START_MENU: &str = "\
1) Add a bet.
2) List bets.
3) Reset the bets file.
0) Exit.";
