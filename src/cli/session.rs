use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::ui::home::{HomeEffect, HomeViewModel};
use crate::ui::trade::{TradeEffect, TradeEvent, TradeState, TradeViewModel};

use super::command::{parse_command, Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Drive the view models from `input` until it ends (or `quit`), then
/// wait for queued events to settle.
///
/// Each published trade state and every effect is written to `out`.
/// A buy error is acknowledged by reloading the screen, and navigating
/// to the trade screen loads it.
pub async fn run_session<R, W>(
    input: R,
    mut out: W,
    mut trade: TradeViewModel,
    mut home: HomeViewModel,
    format: OutputFormat,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut states = trade.subscribe();
    let Some(mut trade_effects) = trade.take_effects() else {
        return Err(io::Error::other("trade effects already consumed"));
    };
    let Some(mut home_effects) = home.take_effects() else {
        return Err(io::Error::other("home effects already consumed"));
    };

    let mut input_open = true;
    let mut effects_open = true;

    loop {
        tokio::select! {
            effect = trade_effects.recv(), if effects_open => match effect {
                Some(effect) => handle_trade_effect(&mut out, format, &trade, effect)?,
                None => effects_open = false,
            },
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                render_state(&mut out, format, &state)?;
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    trade.close();
                    continue;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Trade(event))) => dispatch(&trade, event),
                    Ok(Some(Command::Home(event))) => {
                        home.on_event(event);
                        while let Some(effect) = home_effects.try_recv() {
                            handle_home_effect(&mut out, format, &trade, effect)?;
                        }
                    }
                    Ok(Some(Command::State)) => render_state(&mut out, format, &trade.state())?,
                    Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
                    Ok(Some(Command::Quit)) => {
                        input_open = false;
                        trade.close();
                    }
                    Ok(None) => {}
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
        }
        out.flush()?;
    }

    while let Some(effect) = trade_effects.try_recv() {
        handle_trade_effect(&mut out, format, &trade, effect)?;
    }
    out.flush()
}

fn dispatch(trade: &TradeViewModel, event: TradeEvent) {
    if let Err(err) = trade.dispatch(event) {
        tracing::warn!(%err, "Event not delivered");
    }
}

fn handle_trade_effect<W: Write>(
    out: &mut W,
    format: OutputFormat,
    trade: &TradeViewModel,
    effect: TradeEffect,
) -> io::Result<()> {
    match effect {
        TradeEffect::NavigateToSettings => {
            render_effect(out, format, "navigate_to_settings", "open settings")
        }
        TradeEffect::ShowBuyError => {
            render_effect(out, format, "show_buy_error", "purchase failed, reloading")?;
            dispatch(trade, TradeEvent::ScreenLoad);
            Ok(())
        }
    }
}

fn handle_home_effect<W: Write>(
    out: &mut W,
    format: OutputFormat,
    trade: &TradeViewModel,
    effect: HomeEffect,
) -> io::Result<()> {
    match effect {
        HomeEffect::NavigateToTrade => {
            render_effect(out, format, "navigate_to_trade", "open trade")?;
            dispatch(trade, TradeEvent::ScreenLoad);
            Ok(())
        }
        HomeEffect::NavigateToSettings => {
            render_effect(out, format, "navigate_to_settings", "open settings")
        }
    }
}

fn render_effect<W: Write>(
    out: &mut W,
    format: OutputFormat,
    name: &str,
    message: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "effect": name })),
        OutputFormat::Text => writeln!(out, "effect: {message}"),
    }
}

fn render_state<W: Write>(out: &mut W, format: OutputFormat, state: &TradeState) -> io::Result<()> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string(state).map_err(io::Error::other)?;
        return writeln!(out, "{json}");
    }

    match state {
        TradeState::Idle => writeln!(out, "state: idle"),
        TradeState::Loading => writeln!(out, "state: loading"),
        TradeState::Error => writeln!(out, "state: error (type 'load' to retry)"),
        TradeState::Success(success) => {
            writeln!(out, "state: ready")?;
            writeln!(
                out,
                "  balance: {} | {}",
                success.formatted_crypto_balance, success.formatted_fiat_balance
            )?;
            writeln!(out, "  rate:    {}", success.formatted_exchange_rate)?;
            writeln!(
                out,
                "  amount:  {} -> {}",
                success.amount, success.formatted_result
            )?;
            let buy = if success.is_buying_allowed {
                "allowed"
            } else {
                "not allowed"
            };
            writeln!(out, "  buy:     {buy}")?;
            if let Some(error) = success.no_balance_error {
                writeln!(out, "  error:   {error}")?;
            }
            Ok(())
        }
    }
}
