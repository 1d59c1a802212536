use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rMapty
/// CLI application to log running and cycling workouts pinned to a map
#[derive(Parser)]
#[command(
    name = "rmapty",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log running and cycling workouts at map locations and render them as GeoJSON",
    long_about = None
)]
pub struct Cli {
    /// Override the workout storage file (useful for tests or a second log)
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Current position as LAT,LNG (overrides $RMAPTY_LOCATION and the config)
    #[arg(global = true, long = "location", allow_hyphen_values = true)]
    pub location: Option<String>,

    /// Override the GeoJSON map output file
    #[arg(global = true, long = "map-file")]
    pub map_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q)
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the workout storage
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a workout at a map location
    Add {
        /// Map location of the workout as LAT,LNG
        #[arg(long = "at", allow_hyphen_values = true)]
        at: String,

        /// Workout type: running or cycling
        #[arg(long = "type", short = 't', default_value = "running")]
        kind: String,

        /// Distance in km
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        distance: String,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        duration: String,

        /// Cadence in steps/min (running)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        cadence: String,

        /// Elevation gain in meters (cycling, may be negative)
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        elevation: String,
    },

    /// List logged workouts
    List,

    /// Center the map on a workout
    Show {
        /// Workout id (see `list`)
        id: String,
    },

    /// Render every workout to the GeoJSON map file
    Map,

    /// Delete ALL workouts and reset the map
    Del,
}
