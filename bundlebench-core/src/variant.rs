//! Producer and variant definitions.

use serde::{Deserialize, Serialize};

/// A bundler toolchain under comparison.
///
/// Producer identity is an explicit tag, never re-derived from variant id
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Producer {
    /// Metro, the stock React Native bundler (`react-native bundle`).
    Metro,
    /// Re.Pack, the webpack-based alternative (`react-native webpack-bundle`).
    Repack,
    /// Expo export, the framework-level export tool (`expo export`).
    Expo,
}

impl Producer {
    /// All producers, baseline first.
    pub const ALL: [Producer; 3] = [Producer::Metro, Producer::Repack, Producer::Expo];

    /// Short identifier used in variant ids and directory names.
    pub fn slug(self) -> &'static str {
        match self {
            Producer::Metro => "metro",
            Producer::Repack => "repack",
            Producer::Expo => "expo",
        }
    }

    /// Human-readable name for report output.
    pub fn label(self) -> &'static str {
        match self {
            Producer::Metro => "Metro",
            Producer::Repack => "Re.Pack",
            Producer::Expo => "Expo",
        }
    }
}

impl std::fmt::Display for Producer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Producer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metro" => Ok(Producer::Metro),
            "repack" | "re.pack" => Ok(Producer::Repack),
            "expo" => Ok(Producer::Expo),
            other => Err(format!("Unknown producer: {}", other)),
        }
    }
}

/// Build mode passed to the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Development build (`--dev true`); implicitly unminified.
    Development,
    /// Production build (`--dev false`).
    Production,
}

impl BuildMode {
    /// Whether this is a development build.
    pub fn is_dev(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

/// One point in the build matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleVariant {
    /// Which toolchain builds this variant.
    pub producer: Producer,
    /// Development or production.
    pub mode: BuildMode,
    /// Minification flag; only ever true in production mode.
    pub minified: bool,
    /// Whether this variant is the Hermes bytecode transform of a
    /// production bundle. Bytecode variants are never built from source,
    /// only compiled from an existing artifact.
    pub bytecode: bool,
}

impl BundleVariant {
    /// Stable identifier, used as the variant's directory name and report key.
    ///
    /// Follows the `<producer>-<mode>[-min][-hbc]` scheme, e.g.
    /// `metro-prod-min-hbc`.
    pub fn id(&self) -> String {
        let mut id = String::from(self.producer.slug());
        id.push_str(match self.mode {
            BuildMode::Development => "-dev",
            BuildMode::Production => "-prod",
        });
        if self.minified {
            id.push_str("-min");
        }
        if self.bytecode {
            id.push_str("-hbc");
        }
        id
    }

    /// Human-readable variant kind, shared by all producers in a comparison
    /// group.
    pub fn kind_label(&self) -> &'static str {
        match (self.mode, self.minified, self.bytecode) {
            (BuildMode::Development, _, _) => "Development",
            (BuildMode::Production, false, false) => "Production",
            (BuildMode::Production, true, false) => "Production Minified",
            (BuildMode::Production, false, true) => "Production (HBC)",
            (BuildMode::Production, true, true) => "Production Minified (HBC)",
        }
    }

    /// The non-bytecode variant a bytecode variant is compiled from.
    ///
    /// Returns `None` for variants that are built directly from source.
    pub fn source_variant(&self) -> Option<BundleVariant> {
        if !self.bytecode {
            return None;
        }
        Some(BundleVariant {
            bytecode: false,
            ..*self
        })
    }
}

impl std::fmt::Display for BundleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_scheme_matches_naming_convention() {
        let variant = BundleVariant {
            producer: Producer::Metro,
            mode: BuildMode::Production,
            minified: true,
            bytecode: true,
        };
        assert_eq!(variant.id(), "metro-prod-min-hbc");

        let variant = BundleVariant {
            producer: Producer::Repack,
            mode: BuildMode::Development,
            minified: false,
            bytecode: false,
        };
        assert_eq!(variant.id(), "repack-dev");
    }

    #[test]
    fn source_variant_strips_bytecode_only() {
        let hbc = BundleVariant {
            producer: Producer::Expo,
            mode: BuildMode::Production,
            minified: true,
            bytecode: true,
        };
        let source = hbc.source_variant().unwrap();
        assert_eq!(source.producer, Producer::Expo);
        assert_eq!(source.mode, BuildMode::Production);
        assert!(source.minified);
        assert!(!source.bytecode);

        assert!(source.source_variant().is_none());
    }

    #[test]
    fn kind_labels_shared_across_producers() {
        for producer in Producer::ALL {
            let variant = BundleVariant {
                producer,
                mode: BuildMode::Production,
                minified: false,
                bytecode: true,
            };
            assert_eq!(variant.kind_label(), "Production (HBC)");
        }
    }

    #[test]
    fn producer_from_str() {
        assert_eq!("metro".parse::<Producer>().unwrap(), Producer::Metro);
        assert_eq!("Re.Pack".parse::<Producer>().unwrap(), Producer::Repack);
        assert!("rollup".parse::<Producer>().is_err());
    }
}
