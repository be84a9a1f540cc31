use std::io::BufRead;
use std::time::Duration;

use clap::Args;
use tinnitus_core::games::tap_color;
use tinnitus_core::random::{self, seeded, GameRng};
use tinnitus_core::{
    deliver, BreathingPacer, ColorMatch, Config, Event, PatternGame, PatternPhase,
    SelectOutcome, SimulatedTicks, TapOutcome, TickSource,
};

use crate::host::{cue_sink, RealtimeTicks};

#[derive(Args)]
pub struct GameArgs {
    /// Seed for a repeatable game
    #[arg(long)]
    seed: Option<u64>,
    /// Number of rounds to play
    #[arg(long, default_value_t = 5)]
    rounds: u32,
}

#[derive(Args)]
pub struct BreatheArgs {
    /// Wait a real second between ticks
    #[arg(long)]
    realtime: bool,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

fn rng_for(seed: Option<u64>) -> GameRng {
    seed.map(seeded).unwrap_or_else(random::from_entropy)
}

pub fn breathe(args: BreatheArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut pacer = BreathingPacer::new(config.breathing.clone());
    let mut sink = cue_sink(&config.settings);
    let mut ticks: Box<dyn TickSource> = if args.realtime {
        Box::new(RealtimeTicks::new(Duration::from_secs(1), None)?)
    } else {
        Box::new(SimulatedTicks::unbounded())
    };

    if !args.json {
        println!("{}", pacer.phase().prompt());
    }
    while !pacer.is_complete() {
        if ticks.next_tick().is_none() {
            break;
        }
        let before = pacer.phase();
        let event = pacer.on_second();
        if pacer.phase() != before && !args.json {
            println!(
                "{} ({}/{})",
                pacer.phase().prompt(),
                pacer.completed_breaths(),
                pacer.target_breaths()
            );
        }
        if let Some(event) = event {
            if args.json {
                println!("{}", serde_json::to_string(&event)?);
            }
            deliver(&mut sink, [&event]);
        }
    }
    Ok(())
}

fn render_frame(value: Option<u8>) -> String {
    value
        .and_then(tap_color)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".into())
}

fn parse_taps(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

pub fn pattern(args: GameArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = PatternGame::new(config.pattern.clone(), rng_for(args.seed))?;
    let mut sink = cue_sink(&config.settings);
    let mut lines = std::io::stdin().lock().lines();

    'rounds: for _ in 0..args.rounds {
        let mut frames = Vec::new();
        while game.phase() == PatternPhase::Displaying {
            frames.push(render_frame(game.current_display_value()));
            game.tick();
        }
        println!("Watch: {}", frames.join(" "));
        println!(
            "Repeat {} taps (1=red 2=blue 3=green 4=yellow):",
            game.pattern().len()
        );

        while game.phase() == PatternPhase::AwaitingInput {
            let Some(line) = lines.next() else {
                break 'rounds;
            };
            let line = line?;
            let mut tokens = parse_taps(&line);
            while let Some(token) = tokens.next() {
                let Ok(value) = token.parse::<u8>() else {
                    eprintln!("ignoring '{token}'");
                    continue;
                };
                match game.submit_tap(value) {
                    TapOutcome::Rejected => eprintln!("ignoring tap {value}"),
                    TapOutcome::Recorded { .. } => {}
                    TapOutcome::Resolved(event) => {
                        match event {
                            Event::PatternMatched { score, next_len } => {
                                println!("Correct! Score: {score}. Next pattern: {next_len}")
                            }
                            _ => println!("Not quite. Score: {}", game.score()),
                        }
                        deliver(&mut sink, [&event]);
                        let rest: Vec<&str> = tokens.by_ref().collect();
                        if !rest.is_empty() {
                            eprintln!("ignoring '{}' after the round ended", rest.join(" "));
                        }
                        break;
                    }
                }
            }
        }

        while game.phase() == PatternPhase::Resolving {
            game.tick();
        }
    }

    println!("Final score: {}", game.score());
    Ok(())
}

pub fn color(args: GameArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = ColorMatch::new(config.color.clone(), rng_for(args.seed));
    let mut sink = cue_sink(&config.settings);
    let mut lines = std::io::stdin().lock().lines();

    let mut played = 0;
    while played < args.rounds {
        println!("Match this color: {}", game.target());
        let options: Vec<String> = game
            .options()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {}", i + 1, c))
            .collect();
        println!("{}", options.join("  "));

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let index = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .unwrap_or(usize::MAX);
        match game.select_option(index) {
            SelectOutcome::Rejected => eprintln!("no option '{}'", line.trim()),
            SelectOutcome::Resolved(event) => {
                match event {
                    Event::ColorMatched { score } => println!("Match! Score: {score}"),
                    _ => println!("Not quite. Score: {}", game.score()),
                }
                deliver(&mut sink, [&event]);
                played += 1;
            }
        }
    }

    println!("Final score: {}", game.score());
    Ok(())
}
