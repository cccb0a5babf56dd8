use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "sharedstreets", version, about = "SharedStreets identifier CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter (e.g. `debug`). Overrides SHAREDSTREETS_LOG.
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Hash a raw message as-is.
    Hash {
        message: String,
    },

    /// Identifier of an intersection point.
    Intersection {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Optional basemap node id appended to the message.
        #[arg(long)]
        node_id: Option<String>,
    },

    /// Identifier of a polyline given as `lon lat lon lat ...`.
    Geometry {
        #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
        coords: Vec<f64>,
    },

    /// Identifier of a street reference.
    Reference {
        /// Form of way, by name (`Motorway`) or number (`1`).
        #[arg(long, default_value = "Undefined")]
        form_of_way: String,
        /// JSON file holding an array of location references.
        #[arg(long)]
        input: String,
    },

    /// Hash every feature in a JSON array.
    Batch {
        #[arg(long)]
        input: String,
    },

    /// Print identifiers of the built-in example features and check them.
    Fixtures,
}
