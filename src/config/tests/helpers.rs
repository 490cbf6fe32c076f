//! Layer builders for composing a [`BlockadeConfig`] without touching the
//! process environment or the filesystem.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::BlockadeConfig;

/// Configuration sources, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

impl Layer {
    /// Pushes `value` onto `composer` as this source.
    pub fn push(self, composer: &mut MergeComposer, value: Value) {
        match self {
            Self::Defaults => composer.push_defaults(value),
            Self::File => composer.push_file(value, None),
            Self::Environment => composer.push_environment(value),
            Self::Cli => composer.push_cli(value),
        }
    }
}

/// Merges `layers` in order into a [`BlockadeConfig`].
pub fn compose(layers: &[(Layer, Value)]) -> BlockadeConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers {
        layer.push(&mut composer, value.clone());
    }
    BlockadeConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
