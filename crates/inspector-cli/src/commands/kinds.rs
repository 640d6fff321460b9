use crate::cli::UniverseArg;
use inspector_kernel::{KindEntry, Registry, Universe};

pub fn run(universe: Option<UniverseArg>, json_output: bool) {
    let entries: Vec<KindEntry> = [Registry::platform(), Registry::intrinsic()]
        .into_iter()
        .filter(|registry| universe.is_none_or(|arg| Universe::from(arg) == registry.universe()))
        .flat_map(Registry::entries)
        .collect();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).expect("json serialization")
        );
        return;
    }

    for entry in &entries {
        println!(
            "{:<10} {:>3}  {}",
            entry.universe.to_string(),
            entry.position,
            entry.name
        );
    }
}
