// ABOUTME: One-shot study tool command for eare-cli
// ABOUTME: Reads input from the flag or stdin, runs the tool on a workbench, and prints the output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use anyhow::{bail, Result};
use eare_intelligence::{
    gateway::ModelGateway, models::StudyToolKind, session::ToolWorkbench,
};
use tokio::io::{stdin, AsyncReadExt};
use tracing::info;

use crate::helpers::display::print_tool_output;

async fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

/// Run a tool once over the given input, or stdin when none is given
pub async fn run(gateway: &ModelGateway, kind: StudyToolKind, input: Option<String>) -> Result<()> {
    let input = match input {
        Some(text) => text,
        None => read_stdin().await?,
    };

    let mut workbench = ToolWorkbench::new();
    workbench.select(kind);
    workbench.set_input(input);

    info!(tool = %kind, "Running study tool");
    let Some(output) = workbench.run(gateway).await else {
        bail!("{} needs non-empty input", kind.display_name());
    };
    print_tool_output(kind, output);
    Ok(())
}
