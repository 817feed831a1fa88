//! List rules command implementation.

use naming_check_core::RuleId;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<7} {:<27} {:<8} {:<8} Description",
        "Code", "Name", "Language", "Default"
    );
    println!("{}", "-".repeat(100));

    for rule in RuleId::ALL {
        println!(
            "{:<7} {:<27} {:<8} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.language().to_string(),
            if rule.enabled_by_default() { "on" } else { "off" },
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  naming-check check src --rules variable-min-length,function-lower-case");
    println!("  naming-check check src --rules NC001,NC004");
}
