// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::params::Parameters;

/// Loads scheduler parameters from a TOML file. Keys that are absent take
/// their default values.
pub fn load_parameters(path: &Path) -> Fallible<Parameters> {
    if !path.exists() {
        return fail(
            ErrorKind::Io,
            format!("config file {} does not exist", path.display()),
        );
    }
    log::debug!("Loading parameters from {}.", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_parameters(&content)
}

pub fn parse_parameters(content: &str) -> Fallible<Parameters> {
    let params: Parameters = toml::from_str(content)?;
    params.validate()?;
    Ok(params)
}
