//! Choices the engine asks an outside decision maker to make.
//!
//! When arrival resolution needs a choice (which item to drop when a
//! champion's pack is full) it stops and hands back a `DecisionContext`.
//! Any `DecisionSource` answers it with a `Decision`: a scripted bot, a
//! random picker, a language model or a human at a prompt.

use crate::board::PlayerId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub description: String,
}

impl DecisionOption {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// What the engine is asking, and of whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub player: PlayerId,
    pub description: String,
    pub options: Vec<DecisionOption>,
}

impl DecisionContext {
    pub fn option(&self, id: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// The answer: one of the offered option ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub option_id: String,
    pub reasoning: Option<String>,
}

impl Decision {
    pub fn new(option_id: impl Into<String>) -> Self {
        Self {
            option_id: option_id.into(),
            reasoning: None,
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}

/// Anything that can answer a decision
pub trait DecisionSource {
    fn decide(&mut self, context: &DecisionContext) -> Decision;
}

/// Always takes the first offered option
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOptionDecider;

impl DecisionSource for FirstOptionDecider {
    fn decide(&mut self, context: &DecisionContext) -> Decision {
        let id = context
            .options
            .first()
            .map(|o| o.id.clone())
            .unwrap_or_default();
        Decision::new(id)
    }
}

/// Picks uniformly among the offered options
#[derive(Debug, Clone)]
pub struct RandomDecider<R> {
    rng: R,
}

impl<R: Rng> RandomDecider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DecisionSource for RandomDecider<R> {
    fn decide(&mut self, context: &DecisionContext) -> Decision {
        let id = context
            .options
            .choose(&mut self.rng)
            .map(|o| o.id.clone())
            .unwrap_or_default();
        Decision::new(id).with_reasoning("random choice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context() -> DecisionContext {
        DecisionContext {
            player: 0,
            description: "Pick one".into(),
            options: vec![DecisionOption::new("a", "first"), DecisionOption::new("b", "second")],
        }
    }

    #[test]
    fn test_first_option_decider() {
        assert_eq!(FirstOptionDecider.decide(&context()).option_id, "a");
    }

    #[test]
    fn test_random_decider_stays_within_options() {
        let ctx = context();
        let mut decider = RandomDecider::new(StdRng::seed_from_u64(4));
        for _ in 0..20 {
            let decision = decider.decide(&ctx);
            assert!(ctx.option(&decision.option_id).is_some());
        }
    }
}
