//! Watch command - poll devices and log what the core resolves

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use gameinput_core::{
    DeviceSource, GameInput, InputConfig, KeyboardPreset, Player, ReshufflePhase,
    Side, SlotName, Vec2,
};

/// Arguments for the watch command
#[derive(Args)]
pub struct WatchArgs {
    /// Milliseconds between ticks
    #[arg(long, default_value_t = 16)]
    pub interval_ms: u64,

    /// Stop after this many ticks (runs until interrupted if omitted)
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Keyboard layout to start with (QWERTY, AZERTY, Dvorak, Blank)
    #[arg(long)]
    pub preset: Option<KeyboardPreset>,

    /// Do not assign the keyboard to a player (it never sees key events here)
    #[arg(long)]
    pub no_keyboard: bool,

    /// Spell out symbol labels (cross, circle, start) in button logs
    #[arg(long)]
    pub symbols_as_words: bool,
}

/// Execute the watch command
pub fn execute(args: WatchArgs, mut config: InputConfig) -> Result<()> {
    if let Some(preset) = args.preset {
        config.keyboard_preset = preset;
    }
    if args.no_keyboard {
        config.handle_keyboard = false;
    }

    let mut input = GameInput::new(config);
    let symbols_as_words = args.symbols_as_words;
    input.on_reshuffle_players(move |phase, players| {
        if phase != ReshufflePhase::Before {
            log_roster(phase, players, symbols_as_words);
        }
    });
    input.on_button_down(|player, slot| {
        tracing::info!("Player {} pressed {}", player + 1, slot);
    });
    input.on_button_up(|player, slot| {
        tracing::info!("Player {} released {}", player + 1, slot);
    });

    let mut source = device_source();
    let interval = Duration::from_millis(args.interval_ms);
    let mut tick = 0u64;
    let mut last_sticks = [[Vec2::ZERO; 2]; gameinput_core::MAX_PLAYERS];

    while args.ticks.is_none_or(|limit| tick < limit) {
        input.update(source.as_mut());
        log_sticks(input.players(), &mut last_sticks);
        tick += 1;
        std::thread::sleep(interval);
    }

    println!("Stopped after {} ticks", tick);
    Ok(())
}

#[cfg(feature = "gamepad")]
fn device_source() -> Box<dyn DeviceSource> {
    let source = gameinput_core::GilrsDeviceSource::new();
    if !source.is_available() {
        tracing::warn!("Gamepad backend unavailable; only the keyboard player will be assigned");
    }
    Box::new(source)
}

#[cfg(not(feature = "gamepad"))]
fn device_source() -> Box<dyn DeviceSource> {
    tracing::warn!("Built without gamepad support; only the keyboard player will be assigned");
    Box::new(gameinput_core::DeviceSlots::default())
}

fn log_roster(phase: ReshufflePhase, players: &[Player], symbols_as_words: bool) {
    tracing::info!("Players reshuffled ({:?})", phase);
    for player in players {
        let (Some(model), Some(theme)) = (player.model(), player.theme()) else {
            tracing::info!("  Player {}: unassigned", player.number());
            continue;
        };
        let faces: Vec<&str> = [
            SlotName::Button0,
            SlotName::Button1,
            SlotName::Button2,
            SlotName::Button3,
        ]
        .into_iter()
        .map(|slot| player.button_text(slot, symbols_as_words).unwrap_or("-"))
        .collect();
        tracing::info!(
            "  Player {}: {} [{}] theme {}, faces {}",
            player.number(),
            model.describe(),
            model.icon_name(),
            theme,
            faces.join(" ")
        );
    }
}

/// Log normalized stick positions when they move noticeably
fn log_sticks(players: &[Player], last: &mut [[Vec2; 2]; gameinput_core::MAX_PLAYERS]) {
    for (player, last) in players.iter().zip(last.iter_mut()) {
        if !player.has_gamepad() {
            continue;
        }
        for (side, last) in [Side::Left, Side::Right].into_iter().zip(last.iter_mut()) {
            let stick = player.normalized_stick_vector(side);
            if stick.distance(*last) > 0.1 {
                tracing::debug!(
                    "Player {} {:?} stick ({:.2}, {:.2}), trigger {:.2}",
                    player.number(),
                    side,
                    stick.x,
                    stick.y,
                    player.trigger_value(side)
                );
                *last = stick;
            }
        }
    }
}
