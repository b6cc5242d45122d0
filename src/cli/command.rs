use thiserror::Error;

use crate::ui::home::HomeEvent;
use crate::ui::trade::TradeEvent;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Trade(TradeEvent),
    Home(HomeEvent),
    /// Print the current trade state again.
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{input}' (type 'help')")]
    Unknown { input: String },

    #[error("'{command}' expects one of: {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

pub const HELP: &str = "\
commands:
  load              reload balances and price
  amount [VALUE]    set the fiat amount to spend (empty clears it)
  buy               buy crypto for the entered amount
  settings          open settings
  home trade        home screen: open trade
  home settings     home screen: open settings
  state             print the current state
  help              show this help
  quit              exit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "load" => Command::Trade(TradeEvent::ScreenLoad),
        "amount" => Command::Trade(TradeEvent::AmountChange(rest.to_string())),
        "buy" => Command::Trade(TradeEvent::BuyCryptoClick),
        "settings" => Command::Trade(TradeEvent::SettingsClick),
        "home" => match rest {
            "trade" => Command::Home(HomeEvent::TradeClick),
            "settings" => Command::Home(HomeEvent::SettingsClick),
            _ => {
                return Err(CommandError::BadArgument {
                    command: "home",
                    expected: "trade, settings",
                })
            }
        },
        "state" => Command::State,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            return Err(CommandError::Unknown {
                input: line.to_string(),
            })
        }
    };
    Ok(Some(command))
}
