use std::io::Write;
use std::process::{Command, Stdio};

/// Copy text to the system clipboard. OSC 52 first (works in most modern
/// terminals and over ssh), then a spawned platform clipboard command.
/// Returns the backend that took the text, for the status message.
pub fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    if osc52_copy(text).is_ok() {
        return Ok("osc52");
    }
    command_copy(text)
}

/// Copy via the OSC 52 escape sequence, written directly to stdout.
fn osc52_copy(text: &str) -> std::io::Result<()> {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("\x1b]52;c;{}\x07", encoded).as_bytes())?;
    stdout.flush()
}

/// Fallback: pipe the text into whichever platform clipboard tool exists.
fn command_copy(text: &str) -> Result<&'static str, String> {
    const CANDIDATES: &[(&str, &[&str])] = &[
        ("pbcopy", &[]),
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
    ];

    let mut last_err = "no clipboard command available".to_string();
    for (name, args) in CANDIDATES {
        let child = Command::new(name)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(c) => c,
            Err(e) => {
                last_err = format!("{name}: {e}");
                continue;
            }
        };
        if let Some(stdin) = child.stdin.as_mut() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                last_err = format!("{name}: {e}");
                continue;
            }
        }
        match child.wait() {
            Ok(status) if status.success() => return Ok(name),
            Ok(status) => last_err = format!("{name} exited with {status}"),
            Err(e) => last_err = format!("{name}: {e}"),
        }
    }
    Err(last_err)
}
