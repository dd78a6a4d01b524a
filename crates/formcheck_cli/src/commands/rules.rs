use anyhow::Result;
use formcheck_validator::RuleRegistry;

pub fn execute() -> Result<()> {
    let registry = RuleRegistry::builtin();

    println!("Built-in rules ({}):", registry.len());
    for name in registry.names() {
        println!("  {}", name);
    }

    Ok(())
}
