use serde::Deserialize;

/// Default namespace of the generated declarations.
pub const DEFAULT_NAMESPACE: &str = "Reynolds.Mappings";

/// Default `using` directives, in emission order.
pub const DEFAULT_USINGS: &[&str] = &[
    "System",
    "System.Collections",
    "System.Collections.Generic",
    "System.Threading",
    "System.Linq",
];

/// Default base name of key parameters.
pub const DEFAULT_KEY: &str = "key";

/// `[csharp]` section: names used in the generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsharpConfig {
    pub namespace: String,
    pub usings: Vec<String>,
    /// Base name for key parameters and properties (`key` gives `key1`, `Key1`)
    pub key: String,
}

impl Default for CsharpConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            usings: DEFAULT_USINGS.iter().map(|s| s.to_string()).collect(),
            key: DEFAULT_KEY.to_string(),
        }
    }
}
