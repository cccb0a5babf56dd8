use anyhow::Result;

use crate::args::{Cli, Command};

mod batch;
mod fixtures;
mod geometry;
mod hash;
mod intersection;
mod reference;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Hash { message } => hash::run(&message),
        Command::Intersection { lon, lat, node_id } => {
            intersection::run(lon, lat, node_id.as_deref())
        }
        Command::Geometry { coords } => geometry::run(&coords),
        Command::Reference { form_of_way, input } => reference::run(&form_of_way, &input),
        Command::Batch { input } => batch::run(&input),
        Command::Fixtures => fixtures::run(),
    }
}
