//! Member installation for installkit
//!
//! This module handles:
//! - Normalizing package descriptors into flat entries
//! - Applying entries to their destinations through a controller
//! - The entry points that tie the two together
//!
//! Every entry point normalizes, performs the first `init`, and hands back
//! the [`InstallController`]. A collision during that first `init` is
//! returned as an error and the controller is discarded; members applied
//! before the collision stay in place.

pub mod controller;
pub mod normalize;

pub use controller::InstallController;
pub use normalize::Normalizer;

use tracing::debug;

use crate::config::InstallConfig;
use crate::domain::{EntrySpec, Package};
use crate::error::{Result, invalid_arguments};
use crate::value::{Container, Value};

/// Install a package descriptor onto `destination`
///
/// The descriptor may be an entry, an array, a group, or a flat mapping.
/// Mapping shorthand anywhere in the descriptor reads its content from the
/// top-level descriptor.
pub fn install_entries(
    config: &InstallConfig,
    destination: &Container,
    descriptor: &Value,
) -> Result<InstallController> {
    install_descriptor(
        config,
        &Value::Object(destination.clone()),
        descriptor,
        Some(descriptor),
    )
}

/// Install every own member of `map` under the same name
///
/// Unlike [`install_entries`], the map is never read as an entry or a group
/// even if it has `path`, `content` or `items` members.
pub fn install_from_map(
    config: &InstallConfig,
    destination: &Container,
    map: &Value,
) -> Result<InstallController> {
    let keys = map.as_container().map(Container::keys).unwrap_or_default();
    let specs = Normalizer::new(config, Some(map)).normalize(
        &Package::Mapping(keys),
        &Value::Object(destination.clone()),
        "",
    );
    finish(config, specs)
}

/// Install a single member at `path`, bypassing normalization
pub fn install_one(
    config: &InstallConfig,
    destination: &Container,
    path: &str,
    content: impl Into<Value>,
) -> Result<InstallController> {
    let spec = EntrySpec {
        destination: Some(destination.clone()),
        ..EntrySpec::new(path, Some(content.into()))
    };
    finish(config, vec![spec])
}

/// Install a descriptor against an explicit context destination
///
/// Groups with a `dest` override route their items elsewhere; everything
/// else lands on `context`. There is no mapping source here, so mapping
/// shorthand installs nothing.
pub fn install_in_context(
    config: &InstallConfig,
    context: &Value,
    descriptor: &Value,
) -> Result<InstallController> {
    install_descriptor(config, context, descriptor, None)
}

/// Argument-count compatible entry point
///
/// - `(destination, descriptor)` behaves like [`install_entries`]
/// - `(destination, path, content, ..)` behaves like [`install_one`];
///   extra arguments are ignored
///
/// Zero or one argument is rejected: the destination must be explicit. A
/// destination that cannot hold members, or a non-string path, installs
/// nothing.
pub fn install(config: &InstallConfig, args: &[Value]) -> Result<InstallController> {
    match args {
        [] | [_] => Err(invalid_arguments(args.len())),
        [destination, descriptor] => {
            install_descriptor(config, destination, descriptor, Some(descriptor))
        }
        [destination, path, content, ..] => {
            let specs = match path {
                Value::String(path) => vec![EntrySpec {
                    destination: destination.as_container().cloned(),
                    ..EntrySpec::new(path.clone(), Some(content.clone()))
                }],
                _ => {
                    debug!("ignoring install call with a non-string path");
                    Vec::new()
                }
            };
            finish(config, specs)
        }
    }
}

fn install_descriptor(
    config: &InstallConfig,
    destination: &Value,
    descriptor: &Value,
    source: Option<&Value>,
) -> Result<InstallController> {
    let specs = match Package::classify(descriptor) {
        Some(package) => Normalizer::new(config, source).normalize(&package, destination, ""),
        None => {
            debug!("descriptor is not extensible, nothing to install");
            Vec::new()
        }
    };
    finish(config, specs)
}

fn finish(config: &InstallConfig, specs: Vec<EntrySpec>) -> Result<InstallController> {
    let mut controller = InstallController::from_specs(config, specs);
    controller.init()?;
    Ok(controller)
}
