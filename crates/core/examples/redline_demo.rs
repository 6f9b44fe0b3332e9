//! Basic usage example of the lexline redline engine

use lexline_core::{compare, compute_redline, ChangeKind, DiffConfig};

const LINE: &str = "----------------------------------------";

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Lexline Redline Examples ===\n");

    // Example 1: Simple comparison with default configuration
    example_simple_comparison();

    // Example 2: Rendering a change list
    example_change_list();

    // Example 3: Custom substitution threshold
    example_custom_threshold();
}

fn example_simple_comparison() {
    println!("Example 1: Simple Comparison");
    println!("{}", LINE);

    let original = "The Company shall pay Contractor $100.";
    let revised = "The Corporation shall pay Service Provider $150.";

    let result = compare(original, revised);

    println!("Original: {}", original);
    println!("Revised:  {}", revised);
    println!("\n{}", result.summary());
    println!("\nChanges:");
    for change in &result.changes {
        println!("  {}. {}", change.index + 1, change.description());
    }
    println!("\n");
}

fn example_change_list() {
    println!("Example 2: Rendering a Change List");
    println!("{}", LINE);

    let original = "Payment is due within 30 days of the invoice date.";
    let revised = "Payment is due within 45 days of the invoice date.";

    let result = compare(original, revised);

    // A rendering layer would map each record to styled markup; plain
    // markers stand in for that here.
    let mut rendered = String::new();
    for change in &result.changes {
        match change.kind {
            ChangeKind::Unchanged => {
                rendered.push_str(change.content.as_deref().unwrap_or(""));
            }
            ChangeKind::Added => {
                rendered.push_str(&format!("[+{}]", change.content.as_deref().unwrap_or("")));
            }
            ChangeKind::Removed => {
                rendered.push_str(&format!("[-{}]", change.content.as_deref().unwrap_or("")));
            }
            ChangeKind::Changed => {
                rendered.push_str(&format!(
                    "[{} => {}]",
                    change.original_content.as_deref().unwrap_or(""),
                    change.revised_content.as_deref().unwrap_or("")
                ));
            }
        }
    }

    println!("{}", rendered);
    println!("\n");
}

fn example_custom_threshold() {
    println!("Example 3: Custom Substitution Threshold");
    println!("{}", LINE);

    let original = "fee";
    let revised = "payment";

    // 3/7 is below the default threshold; lowering it merges the pair
    let default_result = compute_redline(Some(original), Some(revised), None);
    println!(
        "Default threshold:  {} substitutions",
        default_result.stats.substitutions
    );

    let config = DiffConfig::new().with_substitution_ratio(0.3);
    let relaxed_result = compute_redline(Some(original), Some(revised), Some(config));
    println!(
        "Relaxed threshold:  {} substitutions",
        relaxed_result.stats.substitutions
    );
}
