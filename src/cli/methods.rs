use crate::error::Result;
use crate::method::Method;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn method_infos() -> Vec<MethodInfo> {
    Method::ALL
        .into_iter()
        .map(|m| MethodInfo {
            name: m.name(),
            description: m.description(),
        })
        .collect()
}

/// List the available methods
pub fn show_methods() -> String {
    let mut output = String::new();
    output.push_str("Encoding Methods\n");
    output.push_str("================\n\n");
    for info in method_infos() {
        output.push_str(&format!("  {:<12}{}\n", info.name, info.description));
    }
    output
}

pub fn show_methods_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&method_infos())?)
}
