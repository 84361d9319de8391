use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use nodedump_core::{NodeRequest, render_text};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.json");
        if !input.exists() {
            continue;
        }
        let output = path.join("expected.txt");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let json = fs::read_to_string(input)
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let request: NodeRequest = serde_json::from_str(&json)
        .map_err(|err| format!("invalid request in {}: {}", input.display(), err))?;
    let text = render_text(&request.decode());
    fs::write(output, text)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
