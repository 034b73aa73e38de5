pub mod classify;
pub mod dict;
pub mod encode;
pub mod predict;
pub mod repl;

pub use classify::{classify, Classification, Sentiment};
pub use encode::{encode, TokenSequence, MAX_SEQ_LENGTH};
pub use predict::{FnPredictor, HeuristicPredictor, Predictor};
pub use repl::{Repl, Step};
