// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reel events` - List the raw events the state aggregator consumes

use crate::output::{self, OutputFormat};
use clap::Args;
use reel_core::names;

#[derive(Args)]
pub struct EventsArgs {
    /// List the `state:*` events produced instead
    #[arg(long)]
    pub outbound: bool,

    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn events(args: EventsArgs) {
    let catalogue = if args.outbound {
        names::OUTBOUND
    } else {
        names::INBOUND
    };
    output::print_list(catalogue, OutputFormat::from_json_flag(args.json));
}
