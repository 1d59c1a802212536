use super::session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{AppEvent, FormInput, Outcome};
use crate::errors::AppResult;
use crate::models::{Coordinate, WorkoutKind};
use crate::ui::messages::success;

/// Log a workout: a map click at `--at` followed by a form submission.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        at,
        kind,
        distance,
        duration,
        cadence,
        elevation,
    } = &cli.command
    {
        let at = Coordinate::parse(at)?;
        let mut app = session::open(cli, cfg, true)?;

        app.dispatch(AppEvent::MapClicked(at))?;

        if let Some(selected) = WorkoutKind::from_code(kind) {
            app.dispatch(AppEvent::TypeChanged(selected))?;
        }

        let input = FormInput {
            kind: kind.clone(),
            distance: distance.clone(),
            duration: duration.clone(),
            cadence: cadence.clone(),
            elevation: elevation.clone(),
        };

        if let Outcome::Created(id) = app.dispatch(AppEvent::FormSubmitted(input))? {
            session::save_map(&app, cfg)?;

            if let Some(w) = app.workouts().iter().find(|w| w.id() == id) {
                success(format!("{} saved (id {})", w.description(), id));
            }
            if let Some(tile) = app.tiles().tiles().last() {
                println!(
                    "   {} | {} | {} | {}",
                    tile.distance, tile.duration, tile.metric, tile.quantity
                );
            }
        }
    }

    Ok(())
}
