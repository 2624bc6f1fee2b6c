pub mod enhancer;
pub mod reaction;

pub use enhancer::ENHANCER_SYSTEM_PROMPT;
pub use reaction::REACTION_SYSTEM_PROMPT;
