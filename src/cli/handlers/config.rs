use crate::cli::args::ConfigAction;
use bech32_text::HrpRegistry;

pub fn handle(action: ConfigAction, config: &HrpRegistry) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { preset } => handle_show(&preset, config),
    }
}

fn handle_list(json: bool, config: &HrpRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let mut names: Vec<&String> = config.hrps.keys().collect();
    names.sort();

    if json {
        let presets: Vec<_> = names
            .iter()
            .map(|name| {
                let preset = &config.hrps[*name];
                serde_json::json!({
                    "name": name,
                    "hrp": preset.hrp,
                    "variant": preset.variant.unwrap_or(config.settings.variant()),
                    "description": preset.description,
                })
            })
            .collect();
        let output = serde_json::json!({
            "default_variant": config.settings.variant(),
            "default_preset": config.settings.default_preset,
            "presets": presets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available presets:\n");
    for name in names {
        let preset = &config.hrps[name];
        let variant = preset.variant.unwrap_or(config.settings.variant());
        println!(
            "  {:<15} {:<18} {:<8} {}",
            name,
            preset.hrp,
            variant.as_str(),
            preset.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn handle_show(name: &str, config: &HrpRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let preset = config
        .get_preset(name)
        .ok_or_else(|| format!("error: hrp preset '{}' not found", name))?;

    println!("Preset: {}", name);
    println!("  hrp:         {}", preset.hrp);
    println!(
        "  variant:     {}",
        preset
            .variant
            .unwrap_or(config.settings.variant())
            .as_str()
    );
    if let Some(description) = &preset.description {
        println!("  description: {}", description);
    }
    Ok(())
}
