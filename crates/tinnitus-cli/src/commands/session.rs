use std::time::Duration;

use clap::Args;
use tinnitus_core::{
    deliver, Config, Event, Preset, SequenceController, SimulatedTicks, TickSource,
};

use crate::host::{cue_sink, RealtimeTicks};

#[derive(Args)]
pub struct SessionArgs {
    /// Routine: meditation, relaxation, jaw, massage, stretches
    preset: Preset,
    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,
    /// Wait a real second between ticks
    #[arg(long)]
    realtime: bool,
    /// Print events and the final snapshot as JSON lines
    #[arg(long)]
    json: bool,
}

fn describe(preset: Preset, controller: &SequenceController, event: &Event) -> Option<String> {
    let noun = preset.step_noun();
    let count = controller.routine().step_count();
    match event {
        Event::SequenceStarted { step_index, .. } => Some(format!(
            "{noun} {} of {count}: {}\n  {} remaining",
            step_index + 1,
            controller.current_prompt(),
            controller.clock()
        )),
        Event::SequencePaused { .. } => Some(format!("Paused at {}", controller.clock())),
        Event::Checkpoint { remaining_secs, .. } => Some(format!("  {remaining_secs}s remaining")),
        Event::StepAdvanced { step_index, .. } => Some(format!(
            "{noun} {} of {count}: {}",
            step_index + 1,
            controller.current_prompt()
        )),
        Event::SequenceCompleted { .. } => Some(format!("{} complete.", controller.routine().title)),
        _ => None,
    }
}

pub fn run(args: SessionArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let routine = config.routine(args.preset)?;
    let mut controller = SequenceController::new(routine);
    let mut sink = cue_sink(&config.settings);
    let mut ticks: Box<dyn TickSource> = if args.realtime {
        Box::new(RealtimeTicks::new(Duration::from_secs(1), args.ticks)?)
    } else {
        match args.ticks {
            Some(limit) => Box::new(SimulatedTicks::limited(limit)),
            None => Box::new(SimulatedTicks::unbounded()),
        }
    };
    tracing::debug!(preset = %args.preset, realtime = args.realtime, "session starting");

    if !args.json {
        println!("{}", controller.routine().title);
    }
    let start = controller.toggle_running();
    let emit = |controller: &SequenceController, event: &Event| -> Result<(), serde_json::Error> {
        if args.json {
            println!("{}", serde_json::to_string(event)?);
        } else if let Some(line) = describe(args.preset, controller, event) {
            println!("{line}");
        }
        Ok(())
    };
    emit(&controller, &start)?;
    deliver(&mut sink, [&start]);

    while controller.is_running() {
        if ticks.next_tick().is_none() {
            break;
        }
        let events = controller.tick();
        for event in &events {
            emit(&controller, event)?;
        }
        deliver(&mut sink, &events);
    }

    if args.json {
        println!("{}", serde_json::to_string(&controller.snapshot())?);
    } else if !controller.is_finished() {
        println!(
            "Stopped at {} of step {} ({:.0}% done)",
            controller.clock(),
            controller.step_index() + 1,
            controller.overall_progress_pct()
        );
    }
    Ok(())
}
