// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvedit: replay editor input against a curve shape

fn main() -> anyhow::Result<()> {
    curvedit::run()
}
