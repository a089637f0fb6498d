use crossterm::style::Stylize;
use ime_core::core::predictor::PredictiveTextModel;
use ime_core::learning::PreferenceTracker;
use ime_core::ImeEngine;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{stdin, stdout, BufReader, BufWriter, Error, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The learned half of the engine, snapshotted across runs. The catalog
/// is static reference data and is rebuilt fresh every start.
#[derive(Clone, Serialize, Deserialize)]
struct LearnedProfile {
    preferences: PreferenceTracker,
    predictor: PredictiveTextModel,
}

fn profile_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("polytonic-ime");
    path.push("learned_profile.bin");
    path
}

fn load_engine(path: &Path) -> ImeEngine {
    let mut engine = ImeEngine::new();
    if let Ok(file) = File::open(path) {
        if let Ok(profile) =
            bincode::deserialize_from::<_, LearnedProfile>(BufReader::new(file))
        {
            engine.preferences = profile.preferences;
            engine.predictor = profile.predictor;
        }
    }
    engine
}

fn save_engine(engine: &ImeEngine, path: &Path) -> Result<(), Error> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let profile = LearnedProfile {
        preferences: engine.preferences.clone(),
        predictor: engine.predictor.clone(),
    };

    // Write through a temp file so a crash never leaves a torn profile.
    let temp_file = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &profile)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;
    temp_file.persist(path)?;
    Ok(())
}

fn main() {
    let path = profile_path();
    let mut engine = load_engine(&path);
    let mut preedit = String::new();
    // The variants last shown by :v, with the vowel they belong to, so
    // a :n pick knows what to record.
    let mut popup: Option<(char, Vec<char>)> = None;

    loop {
        print_ui(&engine, &preedit, &popup);

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim_end_matches(&['\r', '\n'][..]);

        match cmd {
            "exit" => break,
            "" => {
                // Enter commits the line: the engine learns it.
                if !preedit.is_empty() {
                    engine.learn_from_text(&preedit);
                    preedit.clear();
                }
                popup = None;
            }
            s if s.starts_with(":v ") => {
                // Simulated long-press on a base character.
                if let Some(vowel) = s[3..].trim().chars().next() {
                    let variants = engine.get_variants(vowel);
                    popup = Some((vowel, variants));
                }
            }
            s if s.starts_with(':') && s.len() > 1 => {
                // Pick from the popup: records the selection and types it.
                if let (Ok(n), Some((vowel, variants))) = (s[1..].parse::<usize>(), &popup) {
                    if n > 0 && n <= variants.len() {
                        let chosen = variants[n - 1];
                        engine.record_selection(chosen, *vowel);
                        preedit.push(chosen);
                        popup = None;
                    }
                }
            }
            s => {
                preedit.push_str(s);
                popup = None;
            }
        }
    }

    println!("\nSaving profile...");
    match save_engine(&engine, &path) {
        Ok(()) => println!("Profile saved to '{}'", path.display()),
        Err(e) => eprintln!("[ERROR] Could not save profile: {}", e),
    }
}

fn print_ui(engine: &ImeEngine, preedit: &str, popup: &Option<(char, Vec<char>)>) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Polytonic Greek IME Demo".bold());
    println!("---------------------------------------------------------------");
    println!("Type to extend the line, [Enter] to commit and learn it.");
    println!("':v <vowel>' shows the variant popup, ':1'..':8' picks from it.");
    println!("'exit' to save and quit.\n");

    println!("Pre-edit: [{}]", preedit.to_string().cyan());

    if let Some((vowel, variants)) = popup {
        println!("\nVariants for '{}':", vowel);
        for (i, variant) in variants.iter().enumerate() {
            let tag = engine
                .catalog
                .tag_of(*variant)
                .map(|t| t.description())
                .unwrap_or("Selected before, outside the catalog");
            println!("  :{}: {}  {}", i + 1, variant.to_string().bold(), tag.dim());
        }
    }

    let partial = preedit.split_whitespace().last().unwrap_or("");
    let words = engine.word_suggestions(partial);
    if !words.is_empty() {
        println!("\nWord suggestions: {}", words.join("  ").green());
    }

    let next = engine.next_character_predictions(partial);
    if !next.is_empty() {
        let rendered: String = next
            .iter()
            .map(|ch| ch.to_string())
            .collect::<Vec<_>>()
            .join("  ");
        println!("Next characters:  {}", rendered.yellow());
    }

    print!("\n> ");
    let _ = stdout().flush();
}
