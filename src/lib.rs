pub mod breaker;
pub mod char_filter;
pub mod offset;
pub mod script;
pub mod sentence;
pub mod span;
pub mod token;
pub mod tokenizer;
pub mod unicode;
pub mod window;
pub mod word;

#[cfg(test)]
pub(crate) mod testing;

pub use breaker::{BoundaryCorrector, BoundaryEngine, FixedBoundaries, IcuWordEngine};
pub use char_filter::{CharFilter, Filtered, FormatControlFilter};
pub use offset::{OffsetChain, OffsetCorrector, OffsetMap};
pub use script::NativeScript;
pub use span::TextSpan;
pub use token::{Token, TokenSink};
pub use tokenizer::{TokenStream, Tokenizer, TokenizerBuilder, TokenizerConfig, TokenizerError};
pub use word::WordTokenizer;
