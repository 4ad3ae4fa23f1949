//! Parsed synthesis options.

#![allow(missing_docs)]

use proc_macro2::Ident;

use crate::core::config::SynthConfig;
use crate::core::errors::{MksError, Result};

/// `[synth]` settings parsed into the syntax they are spliced as.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Path of the runtime module, e.g. `::mockseam::runtime`.
    pub runtime_path: syn::Path,
    /// cfg predicate that is true only in test builds.
    pub test_cfg: syn::Meta,
    /// Field on the user's type holding the generated mocks struct.
    pub mock_field: Ident,
    pub control_prefix: String,
    /// Derives applied to generated call-record structs.
    pub call_derives: Vec<syn::Path>,
}

impl SynthOptions {
    pub fn from_config(config: &SynthConfig) -> Result<Self> {
        let runtime_path = syn::parse_str::<syn::Path>(&config.runtime_path).map_err(|e| {
            invalid(format!(
                "synth.runtime_path {:?} is not a Rust path: {e}",
                config.runtime_path
            ))
        })?;
        let test_cfg = syn::parse_str::<syn::Meta>(&config.test_cfg).map_err(|e| {
            invalid(format!(
                "synth.test_cfg {:?} is not a cfg predicate: {e}",
                config.test_cfg
            ))
        })?;
        let mock_field = syn::parse_str::<Ident>(&config.mock_field).map_err(|_| {
            invalid(format!(
                "synth.mock_field {:?} is not an identifier",
                config.mock_field
            ))
        })?;
        let probe = format!("{}probe", config.control_prefix);
        if syn::parse_str::<Ident>(&probe).is_err() {
            return Err(invalid(format!(
                "synth.control_prefix {:?} does not form identifiers",
                config.control_prefix
            )));
        }
        let call_derives = config
            .call_derives
            .iter()
            .map(|raw| {
                syn::parse_str::<syn::Path>(raw)
                    .map_err(|_| invalid(format!("synth.call_derives entry {raw:?} is not a path")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            runtime_path,
            test_cfg,
            mock_field,
            control_prefix: config.control_prefix.clone(),
            call_derives,
        })
    }
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            runtime_path: syn::parse_quote!(::mockseam::runtime),
            test_cfg: syn::parse_quote!(test),
            mock_field: syn::parse_quote!(mocks),
            control_prefix: "mock_".to_string(),
            call_derives: Vec::new(),
        }
    }
}

fn invalid(details: String) -> MksError {
    MksError::InvalidConfig { details }
}
