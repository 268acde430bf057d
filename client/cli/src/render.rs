//! Terminal presentation of the scan session.
//!
//! Pure rendering: functions take the session state and return strings,
//! owning no state of their own. When structured data is present the
//! structured view is shown exclusively; raw OCR lines are the fallback.

use labelscan_core::ScanSession;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false))
}

/// Render the terminal view of a finished (or idle) session.
pub fn render_session(session: &ScanSession, color: bool) -> String {
    let mut out = String::new();

    if let Some(uri) = &session.image_uri {
        out.push_str(&format!("Photo: {uri}\n"));
    }

    if let Some(structured) = &session.structured {
        render_score(&mut out, session.health_score(), color);

        if !structured.ingredients.is_empty() {
            out.push_str(&heading("Ingredients", color));
            for ingredient in &structured.ingredients {
                match ingredient.percent {
                    Some(pct) => out.push_str(&format!("  - {} ({pct}%)\n", ingredient.name)),
                    None => out.push_str(&format!("  - {}\n", ingredient.name)),
                }
            }
        }

        if !structured.allergens.is_empty() {
            out.push_str(&heading("Allergens", color));
            out.push_str(&format!("  {}\n", structured.allergens.join(", ")));
        }

        if !structured.additives.is_empty() {
            out.push_str(&heading("Additives", color));
            for additive in &structured.additives {
                match &additive.name {
                    Some(name) => out.push_str(&format!("  E{} — {name}\n", additive.code)),
                    None => out.push_str(&format!("  E{}\n", additive.code)),
                }
            }
        }

        let raised: Vec<&str> = structured
            .flags
            .iter()
            .filter(|(_, raised)| **raised)
            .map(|(name, _)| name.as_str())
            .collect();
        if !raised.is_empty() {
            let mut raised = raised;
            raised.sort_unstable();
            out.push_str(&heading("Flags", color));
            out.push_str(&format!("  {}\n", raised.join(", ")));
        }
    } else if !session.lines.is_empty() {
        out.push_str(&heading("Recognized text", color));
        for line in &session.lines {
            match line.confidence {
                Some(c) if color => {
                    out.push_str(&format!("  {} {DIM}({c:.2}){RESET}\n", line.text))
                }
                Some(c) => out.push_str(&format!("  {} ({c:.2})\n", line.text)),
                None => out.push_str(&format!("  {}\n", line.text)),
            }
        }
    } else {
        out.push_str("No text recognized.\n");
    }

    out
}

fn render_score(out: &mut String, score: Option<u8>, color: bool) {
    let Some(score) = score else { return };
    if color {
        let band = match score {
            80..=100 => GREEN,
            50..=79 => YELLOW,
            _ => RED,
        };
        out.push_str(&format!("{BOLD}Health score: {band}{score}{RESET}{BOLD}/100{RESET}\n"));
    } else {
        out.push_str(&format!("Health score: {score}/100\n"));
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        format!("{BOLD}{text}:{RESET}\n")
    } else {
        format!("{text}:\n")
    }
}

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{DIM}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}
