//! Console output utilities.
//!
//! Status messages go to stderr so stdout carries only the printed names.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a resolved name on stdout.
pub fn print_name(name: &str) {
    println!("{}", name);
}

/// A single name as a one-key JSON object.
pub fn name_json(key: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ key: name })
}

/// Print every name for one analysis, one labelled line each.
pub fn print_artifact_names(names: &crate::fs::ArtifactNames) {
    let rows = [
        ("distance column", names.distance_column.clone()),
        ("galaxy", names.galaxy_file.clone()),
        ("H0 public", names.h0_public.display().to_string()),
        ("H0 proprietary", names.h0_proprietary.display().to_string()),
        ("H0 plot", names.h0_plot.clone()),
        ("manifest public", names.manifest_public.display().to_string()),
        ("manifest private", names.manifest_private.display().to_string()),
    ];

    println!(
        "{}",
        style(format!("{} / {} / {}", names.graceid, names.skymap, names.galaxy)).bold()
    );
    for (label, value) in rows {
        println!("  {:<17} {}", style(label).dim(), value);
    }
}
