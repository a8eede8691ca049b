// src/controllers/deck_controller.rs
//
// The DeckController owns every piece of mutable deck state: the scroll
// model, the phase machine, the card swap, the text panel sync and the
// cards themselves. It is built when the window opens, relaid out on
// resize, and driven once per frame by the app's update loop. Rendering only
// ever reads from it.

use tracing::{debug, info};

use crate::{
    animation::{self, CardSwap, DeckPhase, DeckState, PhaseChange},
    config::{Config, LayoutConfig},
    controllers::{ContentSync, OscCommand},
    input::{build_scroll_model, ScrollInput, ScrollModel},
    models::{Card, CardPose, Layout},
};

pub struct DeckController {
    layout: Layout,
    layout_config: LayoutConfig,
    cards: Vec<Card>,
    scroll: Box<dyn ScrollModel>,
    state: DeckState,
    swap: CardSwap,
    content: ContentSync,
    active_index: usize,
    time: f32,
}

impl DeckController {
    pub fn new(config: &Config, card_count: usize, width: f32, height: f32) -> Self {
        let card_count = card_count.max(1);
        let layout = Layout::new(width, height, card_count, &config.layout);
        let cards = build_cards(&layout);
        let scroll = build_scroll_model(&config.scroll, card_count as f32);
        let state = DeckState::new(&config.animation);
        let swap = CardSwap::settled(0, config.animation.swap_speed);
        let content = ContentSync::new(config.animation.panel_fade_speed);

        info!(
            cards = card_count,
            mode = ?config.scroll.mode,
            scale = layout.scale_factor,
            "deck ready"
        );

        Self {
            layout,
            layout_config: config.layout.clone(),
            cards,
            scroll,
            state,
            swap,
            content,
            active_index: 0,
            time: 0.0,
        }
    }

    /************************** Input ********************************** */

    pub fn handle_input(&mut self, input: ScrollInput) {
        self.scroll.apply(input, self.time);
    }

    pub fn handle_osc(&mut self, command: OscCommand) {
        match command {
            OscCommand::Scroll { delta } => self.handle_input(ScrollInput::Wheel(delta)),
            OscCommand::Step { direction } => self.handle_input(ScrollInput::Key(direction)),
            OscCommand::GoTo { index } => self.go_to_card(index),
            OscCommand::Reset => self.return_to_grid(),
        }
    }

    /// Scrolls so that `index` becomes the active card.
    pub fn go_to_card(&mut self, index: usize) {
        let index = index.min(self.card_count() - 1);
        self.scroll.set_target(index as f32 + 1.0);
    }

    /// Scrolls back to the start; the deck unstacks once the position drops.
    pub fn return_to_grid(&mut self) {
        self.scroll.set_target(0.0);
    }

    /************************** Lifecycle ********************************** */

    /// Rebuilds layout and cards for a new viewport size.
    pub fn relayout(&mut self, width: f32, height: f32) {
        self.layout = Layout::new(width, height, self.card_count(), &self.layout_config);
        self.cards = build_cards(&self.layout);

        // cards are new, so in-flight transitions restart from canonical origins
        let anchor = CardPose {
            alpha: 220.0,
            ..CardPose::at_rest(self.layout.stack_anchor(), self.layout.target_size)
        };
        for card in self.cards.iter_mut() {
            if self.state.phase() == DeckPhase::AnimatingToGrid {
                card.pose = anchor;
            }
            card.capture_origin();
        }
        self.animate_cards();
        info!(width, height, scale = self.layout.scale_factor, "deck relayout");
    }

    /// Advances the deck by one frame. `time` is the app clock in seconds.
    pub fn update(&mut self, time: f32) {
        self.time = time;
        self.scroll.tick();

        let position = self.scroll.position();
        if let Some(change) = self.state.step(position) {
            self.on_phase_change(change);
        }

        if self.state.phase() == DeckPhase::Stacked {
            let index = self.derive_active_index(position);
            if index != self.active_index {
                debug!(from = self.active_index, to = index, "active card changed");
                self.active_index = index;
                self.swap.request(index);
            }
        }
        self.swap.tick();

        self.animate_cards();
        self.content.update(self.state.phase(), &self.swap);
    }

    fn on_phase_change(&mut self, change: PhaseChange) {
        match change {
            PhaseChange::Started(DeckPhase::AnimatingToStack) => {
                for card in self.cards.iter_mut() {
                    card.pose = animation::grid_pose(card.home, &self.layout);
                    card.capture_origin();
                    card.clear_trail();
                }
            }
            PhaseChange::Started(_) => {
                for card in self.cards.iter_mut() {
                    card.capture_origin();
                    card.clear_trail();
                }
            }
            PhaseChange::Landed(DeckPhase::Stacked) => {
                self.active_index = self.derive_active_index(self.scroll.position());
                self.swap.reset_to(self.active_index);
            }
            PhaseChange::Landed(_) => {
                self.scroll.reset();
                self.active_index = 0;
                self.swap.reset_to(0);
                self.content.reset();
                for card in self.cards.iter_mut() {
                    card.clear_trail();
                }
            }
        }
    }

    fn derive_active_index(&self, position: f32) -> usize {
        let index = (position - 1.0).floor().max(0.0) as usize;
        index.min(self.card_count() - 1)
    }

    fn animate_cards(&mut self) {
        let layout = &self.layout;
        let progress = self.state.progress();

        for card in self.cards.iter_mut() {
            match self.state.phase() {
                DeckPhase::Grid => {
                    card.pose = animation::grid_pose(card.home, layout);
                }
                DeckPhase::AnimatingToStack => {
                    card.pose = animation::to_stack_pose(
                        &card.transition_origin,
                        card.index,
                        layout,
                        progress,
                    );
                    if animation::to_stack_progress(card.index, progress) > 0.0 {
                        card.push_trail();
                    }
                }
                DeckPhase::Stacked => {
                    card.pose = animation::stacked_pose(card.index, &self.swap, layout, self.time);
                }
                DeckPhase::AnimatingToGrid => {
                    card.pose = animation::to_grid_pose(
                        &card.transition_origin,
                        card.home,
                        card.index,
                        layout,
                        progress,
                    );
                    if animation::to_grid_progress(card.index, layout.card_count, progress) > 0.0 {
                        card.push_trail();
                    }
                }
            }
        }
    }

    /************************** Queries ********************************** */

    /// Card indices in back-to-front order.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        let mut raise = |index: usize| {
            order.retain(|&i| i != index);
            order.push(index);
        };

        match self.state.phase() {
            DeckPhase::Grid => {}
            DeckPhase::AnimatingToStack | DeckPhase::AnimatingToGrid => raise(0),
            DeckPhase::Stacked => {
                if !self.swap.is_settled() {
                    raise(self.swap.from());
                }
                raise(self.swap.to());
            }
        }
        order
    }

    pub fn phase(&self) -> DeckPhase {
        self.state.phase()
    }

    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll.position()
    }

    pub fn scroll_target(&self) -> f32 {
        self.scroll.target()
    }

    /// Scroll position as a fraction of the whole range, for the progress indicator.
    pub fn scroll_fraction(&self) -> f32 {
        (self.scroll.position() / self.scroll.range().max(f32::EPSILON)).clamp(0.0, 1.0)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The card that is centred, or becoming centred, in the stack.
    pub fn focused_index(&self) -> usize {
        self.swap.to()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn swap(&self) -> &CardSwap {
        &self.swap
    }

    pub fn content(&self) -> &ContentSync {
        &self.content
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn status_line(&self) -> String {
        format!(
            "{:?} {:.2} | scroll {:.2} -> {:.2} (v {:.3}) | card {}",
            self.state.phase(),
            self.state.progress(),
            self.scroll.position(),
            self.scroll.target(),
            self.scroll.velocity(),
            self.active_index
        )
    }
}

fn build_cards(layout: &Layout) -> Vec<Card> {
    (0..layout.card_count)
        .map(|index| Card::new(index, layout.home(index), layout.card_size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollMode;
    use crate::input::StepDirection;

    const FRAME: f32 = 1.0 / 60.0;

    fn test_config(mode: ScrollMode) -> Config {
        let mut config = Config::from_toml_str(
            r#"
            [window]
            width = 1200
            height = 800

            [paths]
            services_file = "services.json"
            image_directory = "assets"
            "#,
        )
        .unwrap();
        config.scroll.mode = mode;
        config
    }

    fn deck(mode: ScrollMode) -> DeckController {
        DeckController::new(&test_config(mode), 8, 1200.0, 800.0)
    }

    // runs frames, checking the invariants that must hold on every one
    fn run(deck: &mut DeckController, frames: usize) {
        for _ in 0..frames {
            let time = deck.time() + FRAME;
            deck.update(time);
            assert_invariants(deck);
        }
    }

    fn assert_invariants(deck: &DeckController) {
        let position = deck.scroll_position();
        assert!((0.0..=8.0).contains(&position), "position {}", position);
        assert!((0.0..=1.0).contains(&deck.progress()));
        assert!(deck.active_index() < 8);
        for card in deck.cards() {
            assert!((0.0..=255.0).contains(&card.pose.alpha));
            assert!(card.pose.size > 0.0);
        }
    }

    fn scroll_to(deck: &mut DeckController, target: f32) {
        let pixels = (target - deck.scroll_target()) / 0.003;
        deck.handle_input(ScrollInput::Wheel(pixels));
    }

    fn settle(deck: &mut DeckController) {
        run(deck, 400);
    }

    #[test]
    fn test_starts_in_grid() {
        let deck = deck(ScrollMode::Continuous);
        assert_eq!(deck.phase(), DeckPhase::Grid);
        assert_eq!(deck.draw_order(), (0..8).collect::<Vec<_>>());
        for card in deck.cards() {
            assert_eq!(card.pose.position, card.home);
        }
    }

    #[test]
    fn test_forward_scroll_stacks_deck_on_first_card() {
        let mut deck = deck(ScrollMode::Continuous);
        for _ in 0..7 {
            deck.handle_input(ScrollInput::Wheel(50.0));
        }
        assert!((deck.scroll_target() - 1.05).abs() < 1e-4);

        let mut phases = vec![deck.phase()];
        for _ in 0..200 {
            deck.update(deck.time() + FRAME);
            assert_invariants(&deck);
            if phases.last() != Some(&deck.phase()) {
                phases.push(deck.phase());
            }
        }
        assert_eq!(
            phases,
            vec![
                DeckPhase::Grid,
                DeckPhase::AnimatingToStack,
                DeckPhase::Stacked
            ]
        );
        assert_eq!(deck.active_index(), 0);
        assert_eq!(deck.focused_index(), 0);
        assert_eq!(deck.cards()[0].pose.alpha, 255.0);
        assert_eq!(deck.cards()[0].pose.position, deck.layout().stack_anchor());
    }

    #[test]
    fn test_moving_to_five_activates_fifth_card() {
        let mut deck = deck(ScrollMode::Continuous);
        scroll_to(&mut deck, 4.5);
        settle(&mut deck);
        assert_eq!(deck.phase(), DeckPhase::Stacked);
        assert_eq!(deck.active_index(), 3);

        deck.go_to_card(4);
        settle(&mut deck);
        assert_eq!(deck.scroll_position(), 5.0);
        assert_eq!(deck.active_index(), 4);
        assert!(deck.swap().is_settled());
        assert_eq!(deck.swap().progress(), 1.0);

        let outgoing = &deck.cards()[3].pose;
        let resting = animation::slot_pose(-1.0, deck.layout());
        assert_eq!(outgoing.alpha, resting.alpha);
        assert_eq!(deck.cards()[4].pose.alpha, 255.0);

        let order = deck.draw_order();
        assert_eq!(order.last(), Some(&4));
    }

    #[test]
    fn test_reversal_mid_transition_returns_cleanly_to_grid() {
        let mut deck = deck(ScrollMode::Continuous);
        scroll_to(&mut deck, 1.2);
        while deck.phase() != DeckPhase::AnimatingToStack || deck.progress() < 0.4 {
            run(&mut deck, 1);
        }

        deck.handle_input(ScrollInput::Wheel(-10_000.0));
        assert_eq!(deck.scroll_target(), 0.0);
        run(&mut deck, 1);
        assert_eq!(deck.phase(), DeckPhase::AnimatingToStack);

        settle(&mut deck);
        assert_eq!(deck.phase(), DeckPhase::Grid);
        assert_eq!(deck.scroll_position(), 0.0);
        for card in deck.cards() {
            assert_eq!(card.pose.alpha, 255.0);
            assert_eq!(card.pose.position, card.home);
            assert_eq!(card.pose.size, deck.layout().card_size);
        }
    }

    #[test]
    fn test_phases_never_overlap_and_progress_resets() {
        let mut deck = deck(ScrollMode::Continuous);
        scroll_to(&mut deck, 3.0);
        let mut previous_phase = deck.phase();
        let mut previous_progress = deck.progress();
        for frame in 0..600 {
            if frame == 150 {
                scroll_to(&mut deck, 0.0);
            }
            deck.update(deck.time() + FRAME);
            let phase = deck.phase();
            if phase.is_transitioning() {
                if phase == previous_phase {
                    assert!(deck.progress() > previous_progress);
                } else {
                    assert_eq!(deck.progress(), 0.0);
                }
            }
            previous_phase = phase;
            previous_progress = deck.progress();
        }
        assert_eq!(deck.phase(), DeckPhase::Grid);
    }

    #[test]
    fn test_draw_order_during_transition_raises_first_card() {
        let mut deck = deck(ScrollMode::Continuous);
        scroll_to(&mut deck, 2.0);
        while deck.phase() != DeckPhase::AnimatingToStack {
            run(&mut deck, 1);
        }
        assert_eq!(deck.draw_order(), vec![1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_draw_order_during_swap() {
        let mut deck = deck(ScrollMode::Continuous);
        deck.go_to_card(0);
        settle(&mut deck);
        assert_eq!(deck.active_index(), 0);
        deck.go_to_card(2);
        while deck.swap().is_settled() {
            run(&mut deck, 1);
        }
        let order = deck.draw_order();
        assert_eq!(order.len(), 8);
        assert_eq!(&order[6..], &[0, deck.focused_index()]);
    }

    #[test]
    fn test_stepped_mode() {
        let mut deck = deck(ScrollMode::Stepped);
        deck.handle_input(ScrollInput::Wheel(2.0));
        assert_eq!(deck.scroll_position(), 1.0);
        settle(&mut deck);
        assert_eq!(deck.phase(), DeckPhase::Stacked);
        assert_eq!(deck.active_index(), 0);

        // debounced: the second event lands within the window and is dropped
        deck.handle_input(ScrollInput::Key(StepDirection::Forward));
        deck.handle_input(ScrollInput::Key(StepDirection::Forward));
        settle(&mut deck);
        assert_eq!(deck.active_index(), 1);
        assert_eq!(deck.focused_index(), 1);

        deck.handle_input(ScrollInput::Key(StepDirection::Backward));
        run(&mut deck, 30);
        deck.handle_input(ScrollInput::Key(StepDirection::Backward));
        settle(&mut deck);
        assert_eq!(deck.phase(), DeckPhase::Grid);
    }

    #[test]
    fn test_osc_commands() {
        let mut deck = deck(ScrollMode::Continuous);
        deck.handle_osc(OscCommand::GoTo { index: 42 });
        assert_eq!(deck.scroll_target(), 8.0);
        settle(&mut deck);
        assert_eq!(deck.active_index(), 7);

        deck.handle_osc(OscCommand::Reset);
        settle(&mut deck);
        assert_eq!(deck.phase(), DeckPhase::Grid);
    }

    #[test]
    fn test_relayout_keeps_state() {
        let mut deck = deck(ScrollMode::Continuous);
        scroll_to(&mut deck, 3.5);
        settle(&mut deck);
        deck.relayout(600.0, 900.0);
        assert_eq!(deck.phase(), DeckPhase::Stacked);
        assert_eq!(deck.layout().scale_factor, 0.6);
        assert_eq!(deck.cards().len(), 8);
        assert_eq!(
            deck.cards()[deck.focused_index()].pose.position,
            deck.layout().stack_anchor()
        );
    }

    #[test]
    fn test_panel_follows_stack() {
        let mut deck = deck(ScrollMode::Continuous);
        assert!(!deck.content().is_visible());
        deck.go_to_card(1);
        settle(&mut deck);
        assert_eq!(deck.content().panel_alpha(), 1.0);
        assert_eq!(deck.content().offset(), 1.0);
        assert!((deck.scroll_fraction() - 0.25).abs() < 1e-6);
    }
}
