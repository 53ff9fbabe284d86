//! Output formatting for CLI

use crate::{pipeline::TrainingResult, value_table::ValueTable};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, String)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Print a learned table, aligned under `label`
pub fn print_values(label: &str, values: &ValueTable, label_width: usize) {
    println!(
        "Final state values for {:label_width$} {values}",
        format!("{label}:")
    );
}

/// Print the episode statistics of a run
pub fn print_training_result(result: &TrainingResult) {
    print_stats_table(&[
        ("Episodes", result.episodes.to_string()),
        ("Total steps", result.total_steps.to_string()),
        ("Mean length", format!("{:.2}", result.mean_episode_length)),
        (
            "Right exits",
            format!(
                "{} ({:.1}%)",
                result.right_exits,
                result.right_exit_rate() * 100.0
            ),
        ),
        ("Left exits", result.left_exits.to_string()),
        ("Truncated", result.truncated.to_string()),
    ]);
}
