use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                set: false,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                set: false,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress status and interrupt notices".to_string(),
                set: false,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Enable debug logging on stderr".to_string(),
                set: false,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;
            flag.set = true;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    pub fn print_help(&self) {
        println!("Usage: tern [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
