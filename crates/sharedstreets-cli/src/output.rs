use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use sharedstreets_core::batch::HashedFeature;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

/// One hashed feature: JSON object, or `kind  id  message` in text mode.
pub fn emit(item: &HashedFeature) -> anyhow::Result<()> {
    if is_json() {
        return print(item);
    }
    let mut out = stdout();
    write_label(&mut out, item.kind.as_str(), Color::Cyan)?;
    writeln!(out, "{}  {}", item.id, item.message)?;
    Ok(())
}

/// Colored, padded label followed by a space.
pub fn write_label(out: &mut StandardStream, label: &str, color: Color) -> anyhow::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label:<13}")?;
    out.reset()?;
    write!(out, " ")?;
    Ok(())
}
