//! Command scripts for headless replays
//!
//! A script is a whitespace-separated list of tokens: `U`, `D`, `L`, `R`
//! move the forklift, `A` acts, and `W<ms>` advances the clock.

use anyhow::{bail, Context, Result};
use log::debug;

use crate::engine::{Command, CommandOutcome, Direction, WarehouseWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Command(Command),
    Wait(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandScript {
    pub steps: Vec<ScriptStep>,
}

impl CommandScript {
    pub fn parse(source: &str) -> Result<Self> {
        let steps = source
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                parse_token(token).with_context(|| format!("Bad script token #{}", index + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replay every step against the engine, returning command outcomes in
    /// order
    pub fn run(&self, world: &mut WarehouseWorld) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::new();
        for step in &self.steps {
            match *step {
                ScriptStep::Command(command) => {
                    let outcome = world.apply(command);
                    debug!("{:?} -> {:?}", command, outcome);
                    outcomes.push(outcome);
                }
                ScriptStep::Wait(ms) => world.advance(ms),
            }
        }
        outcomes
    }
}

fn parse_token(token: &str) -> Result<ScriptStep> {
    let step = match token.to_ascii_uppercase().as_str() {
        "U" => ScriptStep::Command(Command::Move(Direction::Up)),
        "D" => ScriptStep::Command(Command::Move(Direction::Down)),
        "L" => ScriptStep::Command(Command::Move(Direction::Left)),
        "R" => ScriptStep::Command(Command::Move(Direction::Right)),
        "A" => ScriptStep::Command(Command::Act),
        wait if wait.starts_with('W') => {
            let ms = wait[1..]
                .parse::<u64>()
                .with_context(|| format!("Invalid wait duration in '{}'", token))?;
            ScriptStep::Wait(ms)
        }
        _ => bail!("Unknown command '{}'", token),
    };
    Ok(step)
}
