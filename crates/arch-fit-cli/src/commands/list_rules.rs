//! List rules command implementation.

use arch_fit_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<62} Description", "Code", "Name");
    println!("{}", "-".repeat(120));

    for rule in all_rules() {
        println!(
            "{:<8} {:<62} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  all           - every rule (default)");
    println!("  dependencies  - AF1xx, AF2xx, AF3xx, AF601");
    println!("  structure     - AF4xx, AF5xx");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  arch-fit check --rules module-isolation,forbidden-libraries");
    println!("  arch-fit check --rules AF101,AF301,AF403");
}
