use ime_core::ImeEngine;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

// Newline-delimited command protocol for a host keyboard process:
//   GET_VARIANTS <vowel>
//   RECORD_SELECTION <variant> <vowel>
//   LEARN_TEXT <text...>
//   SUGGEST_WORDS <prefix> [limit]
//   PREDICT_NEXT <text> [limit]
//   EXIT
// Every response is a single line; empty results reply with the bare
// response keyword, which the host treats as "no suggestions".

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("polytonic_ime.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

fn reply(stdout: &mut io::Stdout, line: &str) -> io::Result<()> {
    log(&format!("engine -> '{}'", line));
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

fn main() -> io::Result<()> {
    // Clear old log file
    let _ = std::fs::remove_file(get_log_path());
    log("--- Polytonic IME engine starting ---");

    let mut engine = ImeEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        log(&format!("engine <- '{}'", input));
        let parts: Vec<&str> = input.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "GET_VARIANTS" => {
                let vowel = parts.get(1).and_then(|s| s.chars().next());
                let variants = vowel.map(|v| engine.get_variants(v)).unwrap_or_default();
                let rendered: String = variants.iter().collect();
                reply(&mut stdout, &format!("VARIANTS {}", rendered))?;
            }
            "RECORD_SELECTION" => {
                let selected = parts.get(1).and_then(|s| s.chars().next());
                let vowel = parts.get(2).and_then(|s| s.chars().next());
                if let (Some(selected), Some(vowel)) = (selected, vowel) {
                    engine.record_selection(selected, vowel);
                    reply(&mut stdout, "OK")?;
                } else {
                    reply(&mut stdout, "ERR missing arguments")?;
                }
            }
            "LEARN_TEXT" => {
                engine.learn_from_text(&parts[1..].join(" "));
                reply(&mut stdout, "OK")?;
            }
            "SUGGEST_WORDS" => {
                let prefix = parts.get(1).copied().unwrap_or("");
                let limit = parse_limit(parts.get(2));
                let words = engine.get_word_suggestions(prefix, limit);
                reply(&mut stdout, &format!("WORDS {}", words.join(" ")).trim_end())?;
            }
            "PREDICT_NEXT" => {
                let text = parts.get(1).copied().unwrap_or("");
                let limit = parse_limit(parts.get(2));
                let chars: String = engine.get_next_character_predictions(text, limit)
                    .into_iter()
                    .collect();
                reply(&mut stdout, &format!("CHARS {}", chars).trim_end())?;
            }
            "EXIT" => {
                log("engine: received EXIT, shutting down.");
                break;
            }
            _ => {
                log("engine: received unknown command.");
                reply(&mut stdout, "ERR unknown command")?;
            }
        }
    }
    log("engine: stopped.");
    Ok(())
}

fn parse_limit(arg: Option<&&str>) -> usize {
    arg.and_then(|s| s.parse().ok())
        .unwrap_or(ime_core::DEFAULT_SUGGESTION_LIMIT)
}
