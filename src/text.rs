/// Glyph metrics and painting.
pub mod face;
/// Space insertion after sentence punctuation.
pub mod normalize;
/// Greedy line wrapping against a width budget.
pub mod wrap;
