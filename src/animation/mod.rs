pub mod card_animator;
pub mod card_swap;
pub mod state_machine;

pub use card_animator::{
    centre_pose, grid_pose, slot_pose, stacked_pose, to_grid_pose, to_grid_progress,
    to_stack_pose, to_stack_progress,
};
pub use card_swap::{CardSwap, SwapPhase};
pub use state_machine::{DeckPhase, DeckState, PhaseChange};
