use topgen::core::chemistry::Polymer;

pub fn run() {
    println!("Built-in polymers:");
    for line in lines() {
        println!("{}", line);
    }
}

fn lines() -> Vec<String> {
    Polymer::ALL
        .iter()
        .map(|polymer| {
            let template = polymer.template();
            format!(
                "  {:<8} {:<8} {}",
                polymer.to_string(),
                template.name,
                polymer.description()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_built_in_polymer() {
        let lines = lines();
        assert_eq!(lines.len(), Polymer::ALL.len());
        assert!(lines[0].trim_start().starts_with("pss"));
        assert!(lines[0].contains("PSS"));
        assert!(lines[1].trim_start().starts_with("pdadma"));
        assert!(lines[1].contains("3 beads per monomer"));
    }
}
