use std::{
    error::Error,
    io::{self, BufWriter, Read, Write},
};
use thaitok::{NativeScript, Tokenizer};

/// Tokenize stdin, one `text<TAB>start<TAB>end` line per token.
///
/// Usage: `thaitok [SCRIPT]` where `SCRIPT` is an ISO 15924 code
/// (`Thai`, `Laoo`, `Khmr`, `Mymr`). Set `RUST_LOG` for diagnostics.
fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let script = match std::env::args().nth(1) {
        Some(code) => NativeScript::from_code(&code)
            .ok_or_else(|| format!("unknown script code: {code}"))?,
        None => NativeScript::default(),
    };
    let tokenizer = Tokenizer::builder()
        .script(script)
        .strip_format_controls(true)
        .build()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for token in tokenizer.stream(&input) {
        writeln!(out, "{}", token?)?;
    }
    out.flush()?;
    Ok(())
}
