//! Subcommand implementations. Each returns the process exit code.

use lintreview_tools::{Flake8, Problems, Tool, ToolsConfig};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Exit code when a required tool is not installed.
const EXIT_MISSING_TOOL: i32 = 2;

fn load_config(root: &Path, config: Option<&Path>) -> Option<ToolsConfig> {
    let loaded = match config {
        Some(path) => ToolsConfig::from_path(path),
        None => ToolsConfig::load(root),
    };
    match loaded {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            None
        }
    }
}

/// Run flake8 over `files` and print the problems found.
pub fn cmd_check(files: &[PathBuf], root: Option<&Path>, config: Option<&Path>, json: bool) -> i32 {
    let root = root.unwrap_or_else(|| Path::new("."));
    let Some(config) = load_config(root, config) else {
        return 1;
    };

    let flake8 = Flake8::new(config.tools.flake8, root);
    if !flake8.check_dependencies() {
        eprintln!("flake8 is not installed or not on PATH; skipping.");
        return EXIT_MISSING_TOOL;
    }

    let mut problems = Problems::new();
    if let Err(e) = flake8.execute(files, &mut problems) {
        warn!(error = %e, "flake8 failed");
        eprintln!("Failed to run flake8: {}", e);
        return 1;
    }

    if json {
        match serde_json::to_string_pretty(&problems) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize problems: {}", e);
                return 1;
            }
        }
    } else {
        print!("{}", format_problems(&problems));
    }

    if problems.is_empty() { 0 } else { 1 }
}

/// List tools with their install status.
pub fn cmd_tools(root: Option<&Path>) -> i32 {
    let root = root.unwrap_or_else(|| Path::new("."));
    let Some(config) = load_config(root, None) else {
        return 1;
    };

    let tools: Vec<Box<dyn Tool>> = vec![Box::new(Flake8::new(config.tools.flake8, root))];

    println!("Available tools:\n");
    for tool in &tools {
        let info = tool.info();
        let status = if tool.check_dependencies() {
            tool.version().unwrap_or_else(|| "installed".to_string())
        } else {
            "(not installed)".to_string()
        };
        let extensions: Vec<String> = info.extensions.iter().map(|e| format!(".{e}")).collect();
        println!(
            "  {:10} {:12} {}  {}",
            info.name,
            extensions.join(","),
            status,
            info.website
        );
    }
    0
}

fn format_problems(problems: &Problems) -> String {
    problems
        .iter()
        .map(|p| format!("{}:{}: {}\n", p.filename, p.line, p.message))
        .collect()
}
