//! Cellcode terminal prompt
//!
//! Drives a six-cell numeric code input from stdin and prints the cells after
//! every event. Each line is one event:
//! - a key name (`1`, `Backspace`, `ArrowLeft`, `ArrowRight`, ...), typed
//!   into the focused cell
//! - `paste:<text>` pastes `<text>` onto the widget
//! - `focus:<index>` moves focus as a mouse click would
//! - `quit` exits
//!
//! Run with: cargo run -p cellcode --example otp_prompt
//! Set `RUST_LOG=cellcode=trace` to watch the router.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use cellcode::prelude::*;

/// A cell "rendered" on the terminal; focus moves are only reported.
struct TerminalCell {
    index: usize,
}

impl CellHandle for TerminalCell {
    fn focus(&mut self) {
        println!("  (focus -> cell {})", self.index);
    }

    fn select(&mut self) {
        println!("  (select -> cell {})", self.index);
    }

    fn blur(&mut self) {
        println!("  (blur cell {})", self.index);
    }
}

fn render(input: &CodeInput, value: &str) {
    let Some(view) = input.view(value) else {
        println!("(no cells)");
        return;
    };
    let line: String = view
        .cells
        .iter()
        .map(|cell| {
            let text = if cell.is_filled() {
                cell.display_text.as_str()
            } else {
                cell.placeholder.as_str()
            };
            if cell.focused {
                format!(">{text:^1}<")
            } else {
                format!("[{text:^1}]")
            }
        })
        .collect();
    println!("{line}   value = {value:?}");
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = CodeInputConfig::new(6)
        .with_condition(Condition::Numbers)
        .with_placeholder("______");
    let mut input = CodeInput::new(config);

    let value = Arc::new(Mutex::new(String::new()));
    let sink = value.clone();
    input.value_changed.connect(move |new| *sink.lock() = new.clone());
    input
        .code_completed
        .connect(|code| println!("*** code entered: {code} ***"));

    for index in 0..input.fields() {
        input.register_cell(index, Box::new(TerminalCell { index }));
    }
    input.mount("");
    input.focus_registry_mut().focus(0);

    let stdin = io::stdin();
    render(&input, &value.lock());
    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        let current = value.lock().clone();

        if line == "quit" {
            break;
        } else if let Some(text) = line.strip_prefix("paste:") {
            let mut event = PasteEvent::new(text);
            input.paste(&current, &mut event);
        } else if let Some(index) = line.strip_prefix("focus:") {
            match index.trim().parse::<usize>() {
                Ok(index) => {
                    input.focus_registry_mut().focus(index);
                }
                Err(err) => println!("bad index: {err}"),
            }
        } else if !line.is_empty() {
            let index = input.focused_cell().unwrap_or(0);
            let mut event = KeyPressEvent::key(Key::from_name(line));
            input.key_press(&current, index, &mut event);
        }

        render(&input, &value.lock());
        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
