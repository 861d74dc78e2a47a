//! Terminal styling utilities

use std::path::Path;

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

const CARD_WIDTH: usize = 56;

/// Print the application banner
pub fn print_banner(version: &str, subtitle: &str) {
    println!();
    println!(
        "    {} {}",
        style("METRICA").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style(subtitle).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the workforce run configuration card
pub fn print_workforce_config(
    employees: &Path,
    training: &Path,
    performance: &Path,
    output: &Path,
    join: &str,
) {
    let line = "─".repeat(CARD_WIDTH - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(CARD_WIDTH - 20)
    );
    println!("    ├{}┤", line);
    println!("    │  {} Employees:   {:<34}│", FOLDER, truncate_path(employees, 33));
    println!("    │  {} Training:    {:<34}│", FOLDER, truncate_path(training, 33));
    println!("    │  {} Performance: {:<34}│", FOLDER, truncate_path(performance, 33));
    println!("    │  {} Output:      {:<34}│", SAVE, truncate_path(output, 33));
    println!("    ├{}┤", line);
    println!(
        "    │  {} Join policy: {:<34}│",
        LINK,
        style(truncate_string(join, 33)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a section title without a step number
pub fn print_section(title: &str) {
    println!();
    println!("    {}", style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print the final completion message
pub fn print_completion(message: &str) {
    println!();
    println!("    {} {}", ROCKET, style(message).green().bold());
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

/// Print an indented table rendered by comfy-table
pub fn print_indented(block: &str) {
    for line in block.lines() {
        println!("    {}", line);
    }
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Keep the tail of `s` so it fits in `max_len` characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
