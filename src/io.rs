// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! STL export over the kernel's serializers.

use anyhow::{Context, Result};
use std::path::Path;

use crate::Shape;

/// Export a solid as binary STL.
pub fn export_stl(shape: &Shape, name: &str, path: &Path) -> Result<()> {
    let bytes = shape
        .to_stl_binary(name)
        .with_context(|| format!("failed to serialize {name} as STL"))?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Export a solid as ASCII STL.
pub fn export_stl_ascii(shape: &Shape, name: &str, path: &Path) -> Result<()> {
    let stl = shape.to_stl_ascii(name);
    std::fs::write(path, stl).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
