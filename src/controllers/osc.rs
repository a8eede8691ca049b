// src/controllers/osc.rs
// OSC remote control of the deck

use nannou_osc as osc;
use tracing::{info, warn};

use crate::error::DeckError;
use crate::input::StepDirection;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    /// Pixel delta, treated like a wheel event.
    Scroll { delta: f32 },
    Step { direction: StepDirection },
    /// Centre a card (0-based) in the stacked deck.
    GoTo { index: usize },
    /// Scroll all the way back to the grid.
    Reset,
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, DeckError> {
        let receiver = osc::receiver(port).map_err(|e| DeckError::OscBind {
            port,
            reason: e.to_string(),
        })?;
        info!(port, "OSC receiver listening");

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    /// Drains whatever arrived since the last frame without blocking.
    pub fn process_messages(&mut self) {
        for (packet, addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!(addr = %message.addr, from = %addr, "ignoring OSC message"),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    match message.addr.as_str() {
        "/deck/scroll" => match &message.args[..] {
            [osc::Type::Float(delta)] => Some(OscCommand::Scroll { delta: *delta }),
            [osc::Type::Int(delta)] => Some(OscCommand::Scroll {
                delta: *delta as f32,
            }),
            _ => None,
        },
        "/deck/step" => {
            if let [osc::Type::Int(step)] = &message.args[..] {
                match step.signum() {
                    1 => Some(OscCommand::Step {
                        direction: StepDirection::Forward,
                    }),
                    -1 => Some(OscCommand::Step {
                        direction: StepDirection::Backward,
                    }),
                    _ => None,
                }
            } else {
                None
            }
        }
        "/deck/goto" => {
            if let [osc::Type::Int(index)] = &message.args[..] {
                usize::try_from(*index)
                    .ok()
                    .map(|index| OscCommand::GoTo { index })
            } else {
                None
            }
        }
        "/deck/reset" => Some(OscCommand::Reset),
        _ => None,
    }
}
