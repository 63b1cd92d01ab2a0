use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read raw input bytes from a file or stdin
pub fn read_input_bytes(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Read UTF-8 input from a file or stdin, trimmed of surrounding whitespace
pub fn read_input_text(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    let text = if let Some(file_path) = file {
        fs::read_to_string(file_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    Ok(text.trim().to_string())
}

/// Parse integers separated by commas and/or whitespace
pub fn parse_values(tokens: &[String]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    tokens
        .iter()
        .flat_map(|t| t.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .map(|t| -> Result<u8, Box<dyn std::error::Error>> {
            t.parse::<u8>()
                .map_err(|_| format!("error: '{}' is not a value between 0 and 255", t).into())
        })
        .collect()
}

/// Format values as a comma-separated list
pub fn format_values(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
