mod answer_chase;

pub use answer_chase::{answer_chase_for, AnswerChase, ChaseOutcome, IndexedChase, OrderedChase};
